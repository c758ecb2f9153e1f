use crate::{
    ast::{Expr, UnaryOperator},
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, evaluate},
        value::Number,
    },
};

/// Evaluates a unary operation.
///
/// The operand is reduced first, then negated. Integer negation is checked
/// (`-i64::MIN` does not fit), reals negate without failure.
///
/// # Parameters
/// - `op`: The unary operator.
/// - `expr`: The operand expression.
/// - `position`: Byte offset of the operator for error reporting.
///
/// # Returns
/// The negated value, preserving the operand's kind.
pub fn eval_unary_op(op: UnaryOperator, expr: &Expr, position: usize) -> EvalResult<Number> {
    let value = evaluate(expr)?;

    match op {
        UnaryOperator::Negate => match value {
            Number::Integer(n) => n.checked_neg()
                                   .map(Number::Integer)
                                   .ok_or(EvalError::Overflow { position }),
            Number::Real(r) => Ok(Number::Real(-r)),
        },
    }
}
