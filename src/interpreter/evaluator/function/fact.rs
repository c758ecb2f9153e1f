use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::Number},
};

/// Factorial of a non-negative integral argument.
///
/// The argument must be integral in value, so `fact(5.0)` is accepted while
/// `fact(5.5)` and `fact(-1)` are domain errors. Results beyond `20!`
/// overflow the integer range and fail.
pub fn fact(name: &str, args: &[Number], position: usize) -> EvalResult<Number> {
    let n = args[0].as_integral(name, position)?;
    if n < 0 {
        return Err(EvalError::Domain { name:     name.to_string(),
                                       details:  "argument must be non-negative".to_string(),
                                       position, });
    }

    let mut result = 1i64;
    for factor in 2..=n {
        result = result.checked_mul(factor)
                       .ok_or(EvalError::Overflow { position })?;
    }
    Ok(Number::Integer(result))
}
