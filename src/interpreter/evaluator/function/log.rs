use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::Number},
};

fn require_positive(name: &str,
                    what: &str,
                    value: f64,
                    position: usize)
                    -> EvalResult<()> {
    if value <= 0.0 {
        return Err(EvalError::Domain { name:     name.to_string(),
                                       details:  format!("{what} must be positive"),
                                       position, });
    }
    Ok(())
}

/// Logarithm: natural with one argument, arbitrary base with two.
///
/// Both the value and the base must be positive. A base of `1` makes the
/// change-of-base denominator zero and fails accordingly.
pub fn log(args: &[Number], position: usize) -> EvalResult<Number> {
    let value = args[0].as_real(position)?;
    require_positive("log", "argument", value, position)?;

    let Some(base) = args.get(1) else {
        return Ok(Number::Real(value.ln()));
    };

    let base = base.as_real(position)?;
    require_positive("log", "base", base, position)?;
    if base.ln() == 0.0 {
        return Err(EvalError::DivisionByZero { position });
    }
    Ok(Number::Real(value.ln() / base.ln()))
}

/// Fixed-base logarithm backing `log2` and `log10`.
pub fn log_base(name: &str, base: f64, args: &[Number], position: usize) -> EvalResult<Number> {
    let value = args[0].as_real(position)?;
    require_positive(name, "argument", value, position)?;
    Ok(Number::Real(value.log(base)))
}
