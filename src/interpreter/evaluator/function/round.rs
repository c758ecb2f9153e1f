use crate::{
    interpreter::{evaluator::core::EvalResult, value::Number},
    util::num::f64_to_i64_checked,
};

/// Rounds to the nearest integer, or to a given number of decimal digits.
///
/// One-argument rounding resolves ties to the nearest even value, so
/// `round(0.5)` is `0` and `round(1.5)` is `2`, and produces an integer.
/// With a digit count the kind of the first argument is preserved:
/// `round(2.675, 2)` stays real while `round(7, 2)` stays integral.
pub fn round(args: &[Number], position: usize) -> EvalResult<Number> {
    let Some(digits) = args.get(1) else {
        return match args[0] {
            Number::Integer(n) => Ok(Number::Integer(n)),
            Number::Real(r) => {
                f64_to_i64_checked(r.round_ties_even(), "round", position).map(Number::Integer)
            },
        };
    };

    let digits = digits.as_integral("round", position)?;
    let digits = i32::try_from(digits).unwrap_or(if digits < 0 { i32::MIN } else { i32::MAX });
    let factor = 10f64.powi(digits);

    match args[0] {
        // A non-negative digit count cannot change a whole number.
        Number::Integer(n) if digits >= 0 => Ok(Number::Integer(n)),
        Number::Integer(n) => {
            #[allow(clippy::cast_precision_loss)]
            let rounded = ((n as f64) * factor).round_ties_even() / factor;
            // The quotient is whole by construction; re-rounding removes
            // floating-point noise before the conversion back.
            f64_to_i64_checked(rounded.round(), "round", position).map(Number::Integer)
        },
        Number::Real(r) => Ok(Number::Real((r * factor).round_ties_even() / factor)),
    }
}

/// Rounding toward positive or negative infinity, backing `ceil` and
/// `floor`. The result is always an integer.
pub fn ceil_floor(name: &str, args: &[Number], position: usize) -> EvalResult<Number> {
    match args[0] {
        Number::Integer(n) => Ok(Number::Integer(n)),
        Number::Real(r) => {
            let rounded = if name == "ceil" { r.ceil() } else { r.floor() };
            f64_to_i64_checked(rounded, name, position).map(Number::Integer)
        },
    }
}
