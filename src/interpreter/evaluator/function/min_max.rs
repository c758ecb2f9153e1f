use std::cmp;

use crate::interpreter::{evaluator::core::EvalResult, value::Number};

/// Variadic minimum and maximum.
///
/// If every argument is an integer the result is an integer; otherwise all
/// arguments are promoted and compared as reals. Any NaN argument makes the
/// result NaN, since an unordered value has no meaningful extreme.
pub fn min_max(name: &str, args: &[Number], position: usize) -> EvalResult<Number> {
    let all_integer = args.iter().all(|arg| arg.is_integer());

    if all_integer {
        let mut best = match args[0] {
            Number::Integer(n) => n,
            Number::Real(_) => unreachable!(),
        };
        for arg in &args[1..] {
            if let Number::Integer(n) = arg {
                best = if name == "min" {
                    cmp::min(best, *n)
                } else {
                    cmp::max(best, *n)
                };
            }
        }
        return Ok(Number::Integer(best));
    }

    let values = args.iter()
                     .map(|arg| arg.as_real(position))
                     .collect::<EvalResult<Vec<_>>>()?;
    if values.iter().any(|v| v.is_nan()) {
        return Ok(Number::Real(f64::NAN));
    }

    let fold = if name == "min" { f64::min } else { f64::max };
    let best = values.into_iter().reduce(fold);
    match best {
        Some(value) => Ok(Number::Real(value)),
        // The arity contract guarantees at least two arguments.
        None => unreachable!(),
    }
}
