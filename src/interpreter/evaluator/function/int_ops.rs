use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::Number},
};

/// Reduces the arguments to integral values, erroring on any fractional or
/// non-finite one.
fn integral_args(name: &str, args: &[Number], position: usize) -> EvalResult<Vec<i64>> {
    args.iter()
        .map(|arg| arg.as_integral(name, position))
        .collect()
}

fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Greatest common divisor of two or more integral arguments.
///
/// The result is always non-negative; `gcd(0, 0)` is `0`.
pub fn gcd(args: &[Number], position: usize) -> EvalResult<Number> {
    let result = integral_args("gcd", args, position)?
        .into_iter()
        .map(i64::unsigned_abs)
        .fold(0, gcd_u64);
    i64::try_from(result).map(Number::Integer)
                         .map_err(|_| EvalError::Overflow { position })
}

/// Least common multiple of two or more integral arguments.
///
/// The result is always non-negative; it is `0` whenever any argument is.
pub fn lcm(args: &[Number], position: usize) -> EvalResult<Number> {
    let mut result = 1u64;
    for n in integral_args("lcm", args, position)? {
        let n = n.unsigned_abs();
        if n == 0 {
            return Ok(Number::Integer(0));
        }
        result = (result / gcd_u64(result, n)).checked_mul(n)
                                              .ok_or(EvalError::Overflow { position })?;
    }
    i64::try_from(result).map(Number::Integer)
                         .map_err(|_| EvalError::Overflow { position })
}

/// Bitwise exclusive or of two or more integral arguments.
pub fn xor(args: &[Number], position: usize) -> EvalResult<Number> {
    let result = integral_args("xor", args, position)?
        .into_iter()
        .fold(0, |acc, n| acc ^ n);
    Ok(Number::Integer(result))
}
