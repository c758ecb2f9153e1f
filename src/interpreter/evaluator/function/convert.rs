use crate::{
    interpreter::{evaluator::core::EvalResult, value::Number},
    util::num::f64_to_i64_checked,
};

/// Converts a value to an integer, truncating toward zero.
///
/// Non-finite reals and values outside the `i64` range are rejected.
pub fn int(args: &[Number], position: usize) -> EvalResult<Number> {
    match args[0] {
        Number::Integer(n) => Ok(Number::Integer(n)),
        Number::Real(r) => f64_to_i64_checked(r.trunc(), "int", position).map(Number::Integer),
    }
}

/// Converts a value to a real.
pub fn float(args: &[Number], position: usize) -> EvalResult<Number> {
    Ok(Number::Real(args[0].as_real(position)?))
}
