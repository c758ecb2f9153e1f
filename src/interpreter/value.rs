use crate::{
    error::EvalError,
    interpreter::evaluator::core::EvalResult,
    util::num::{f64_to_i64_checked, i64_to_f64_checked},
};

/// Represents a runtime numeric value.
///
/// Every expression reduces to a `Number`: either a 64-bit signed integer or
/// an IEEE-754 double. Which kind an operation produces is governed by the
/// promotion rule: operations where both operands are integers and the result
/// is exact stay integral, everything else is real.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64-bit signed integer value.
    Integer(i64),
    /// A double precision floating-point value.
    Real(f64),
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl Number {
    /// Converts the value to an `f64`.
    ///
    /// Integers are converted only if they are exactly representable as an
    /// `f64`; larger magnitudes fail with `EvalError::Overflow` rather than
    /// silently losing precision.
    ///
    /// # Parameters
    /// - `position`: Byte offset in the source expression for error
    ///   reporting.
    ///
    /// # Example
    /// ```
    /// use mathex::interpreter::value::Number;
    ///
    /// let x = Number::Integer(10);
    /// assert_eq!(x.as_real(0).unwrap(), 10.0);
    /// ```
    pub fn as_real(self, position: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(r),
            Self::Integer(n) => i64_to_f64_checked(n, EvalError::Overflow { position }),
        }
    }

    /// Converts the value to an `i64`, on behalf of a function that requires
    /// an integral argument.
    ///
    /// Integers are returned unchanged. Reals are accepted only when they are
    /// finite and integral (`4.0` is as good as `4`); anything fractional
    /// fails with `EvalError::Domain` naming the requesting function.
    ///
    /// # Parameters
    /// - `name`: The function requiring the integral value.
    /// - `position`: Byte offset in the source expression for error
    ///   reporting.
    ///
    /// # Example
    /// ```
    /// use mathex::interpreter::value::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_integral("gcd", 0).unwrap(), 42);
    /// assert_eq!(Number::Real(10.0).as_integral("gcd", 0).unwrap(), 10);
    /// assert!(Number::Real(1.23).as_integral("gcd", 0).is_err());
    /// ```
    pub fn as_integral(self, name: &str, position: usize) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(n),
            Self::Real(r) => f64_to_i64_checked(r, name, position),
        }
    }

    /// Promotes a pair of numbers for mixed arithmetic.
    ///
    /// If one side is an integer and the other is a real, the integer is
    /// converted to a real; two integers or two reals are returned unchanged.
    ///
    /// # Parameters
    /// - `other`: The value to promote with.
    /// - `position`: Byte offset in the source expression for error
    ///   reporting.
    ///
    /// # Returns
    /// - `Ok((Self, Self))`: Promoted values.
    /// - `Err(EvalError::Overflow)`: If an integer is too large to promote
    ///   exactly.
    pub fn promote_to_real(self, other: Self, position: usize) -> EvalResult<(Self, Self)> {
        use Number::{Integer, Real};

        match (self, other) {
            (Real(_), Integer(_)) => Ok((self, Real(other.as_real(position)?))),
            (Integer(_), Real(_)) => Ok((Real(self.as_real(position)?), other)),
            _ => Ok((self, other)),
        }
    }

    /// Returns `true` if the value is [`Integer`].
    ///
    /// [`Integer`]: Number::Integer
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is zero, regardless of kind.
    ///
    /// Used for divisor checks; `-0.0` counts as zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r == 0.0,
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // The Debug form keeps a trailing ".0" on whole reals, so the
            // printed kind always survives a re-parse.
            Self::Real(r) => write!(f, "{r:?}"),
        }
    }
}
