use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::Number},
};

/// Defines builtins that reduce a single value to a real and apply an `f64`
/// method.
macro_rules! real_builtin {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name(args: &[Number], position: usize) -> EvalResult<Number> {
                Ok(Number::Real(args[0].as_real(position)?.$name()))
            }
        )*
    };
}

real_builtin! {
    /// Sine of an angle in radians.
    sin,
    /// Cosine of an angle in radians.
    cos,
    /// Tangent of an angle in radians.
    tan,
}

/// Absolute value, preserving the operand's kind.
pub fn abs(args: &[Number], position: usize) -> EvalResult<Number> {
    match args[0] {
        Number::Integer(n) => n.checked_abs()
                               .map(Number::Integer)
                               .ok_or(EvalError::Overflow { position }),
        Number::Real(r) => Ok(Number::Real(r.abs())),
    }
}

/// Square root. Negative arguments are rejected rather than producing NaN.
pub fn sqrt(args: &[Number], position: usize) -> EvalResult<Number> {
    let value = args[0].as_real(position)?;
    if value < 0.0 {
        return Err(EvalError::Domain { name:     "sqrt".to_string(),
                                       details:  "argument must be non-negative".to_string(),
                                       position, });
    }
    Ok(Number::Real(value.sqrt()))
}

/// Euclidean norm of its arguments: `sqrt(x1**2 + x2**2 + ...)`.
///
/// Folds with [`f64::hypot`], which avoids the intermediate overflow a
/// naive sum of squares would hit for large magnitudes.
pub fn hypot(args: &[Number], position: usize) -> EvalResult<Number> {
    let mut norm = 0.0f64;
    for arg in args {
        norm = norm.hypot(arg.as_real(position)?);
    }
    Ok(Number::Real(norm))
}

/// Logical negation: `1` for a zero argument, `0` otherwise.
pub fn not(args: &[Number], _position: usize) -> EvalResult<Number> {
    Ok(Number::Integer(i64::from(args[0].is_zero())))
}
