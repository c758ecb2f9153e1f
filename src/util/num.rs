use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds [`MAX_SAFE_I64_INT`] in absolute
/// value.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Returns
/// - `Ok(f64)`: The converted value if it is safe.
/// - `Err(error)`: If the value is too large.
///
/// ## Example
/// ```
/// use mathex::util::num::{MAX_SAFE_I64_INT, i64_to_f64_checked};
///
/// // Works for safe values
/// let result = i64_to_f64_checked(42, "too big!");
/// assert_eq!(result.unwrap(), 42.0);
///
/// // Fails for values outside safe range
/// let big = MAX_SAFE_I64_INT + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_I64_INT.unsigned_abs() {
        return Err(error);
    }
    Ok(value as f64)
}

/// Safely converts an `f64` to `i64` if the value is finite, within range, and
/// not fractional.
///
/// ## Errors
/// - Non-finite values produce `EvalError::Domain` naming the calling
///   function.
/// - Out-of-range values produce `EvalError::Overflow`.
/// - Fractional values produce `EvalError::Domain`.
///
/// ## Parameters
/// - `value`: The floating-point value to convert.
/// - `name`: The function on whose behalf the conversion runs, for error
///   reporting.
/// - `position`: Byte offset in the source expression for error reporting.
///
/// ## Returns
/// - `Ok(i64)`: The converted value if safe.
/// - `Err(EvalError::Domain | Overflow)`: If conversion is invalid.
///
/// ## Example
/// ```
/// use mathex::{error::EvalError, util::num::f64_to_i64_checked};
///
/// // Safe conversion
/// let int = f64_to_i64_checked(1000.0, "int", 0).unwrap();
/// assert_eq!(int, 1000);
///
/// // Fractional value
/// let err = f64_to_i64_checked(1.5, "int", 3).unwrap_err();
/// assert!(matches!(err, EvalError::Domain { position: 3, .. }));
///
/// // Out of range
/// let err = f64_to_i64_checked(1e20, "int", 5).unwrap_err();
/// assert!(matches!(err, EvalError::Overflow { position: 5 }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_checked(value: f64, name: &str, position: usize) -> EvalResult<i64> {
    if !value.is_finite() {
        return Err(EvalError::Domain { name: name.to_string(),
                                       details: format!("cannot convert non-finite value {value} to an integer"),
                                       position });
    }
    // `i64::MAX as f64` rounds up to exactly 2^63, which does not fit, so
    // the upper bound must be exclusive. `i64::MIN as f64` is exact.
    if value < i64::MIN as f64 || value >= -(i64::MIN as f64) {
        return Err(EvalError::Overflow { position });
    }
    if value.fract() != 0.0 {
        return Err(EvalError::Domain { name: name.to_string(),
                                       details: format!("value {value} is not integral"),
                                       position });
    }
    Ok(value as i64)
}

/// Safely converts an `i64` to `u32` if and only if it is exactly
/// representable.
///
/// Used by integer exponentiation, where the exponent must fit `u32`.
///
/// ## Errors
/// Returns `EvalError::Overflow` if the value is negative or exceeds
/// `u32::MAX`.
pub const fn i64_to_u32_checked(value: i64, position: usize) -> EvalResult<u32> {
    if value < 0 || value > u32::MAX as i64 {
        return Err(EvalError::Overflow { position });
    }
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    Ok(value as u32)
}
