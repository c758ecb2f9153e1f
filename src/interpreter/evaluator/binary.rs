use std::cmp::Ordering;

use crate::{
    ast::{BinaryOperator, Expr},
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, evaluate},
        value::Number,
    },
    util::num::i64_to_u32_checked,
};

/// Evaluates a binary operation.
///
/// Both operands are reduced first, then dispatched by operator class:
/// arithmetic, one of the three division flavors, exponentiation, or a
/// comparison.
///
/// # Parameters
/// - `left`: Left operand expression.
/// - `op`: The operator.
/// - `right`: Right operand expression.
/// - `position`: Byte offset of the operator for error reporting.
///
/// # Returns
/// The computed value, with the integer/real kind determined by the
/// promotion rule.
pub fn eval_binary_op(left: &Expr,
                      op: BinaryOperator,
                      right: &Expr,
                      position: usize)
                      -> EvalResult<Number> {
    use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Pow, Sub};

    let left = evaluate(left)?;
    let right = evaluate(right)?;

    match op {
        Add | Sub | Mul => eval_arithmetic(op, left, right, position),
        Div => eval_division(left, right, position),
        FloorDiv => eval_floor_division(left, right, position),
        Mod => eval_modulo(left, right, position),
        Pow => eval_pow(left, right, position),
        _ => eval_comparison(op, left, right, position),
    }
}

/// Evaluates `+`, `-`, and `*`.
///
/// Integer operands use checked arithmetic and stay integral; mixed
/// operands are promoted and computed as reals.
fn eval_arithmetic(op: BinaryOperator,
                   left: Number,
                   right: Number,
                   position: usize)
                   -> EvalResult<Number> {
    use BinaryOperator::{Add, Mul, Sub};
    use Number::{Integer, Real};

    if let (Integer(a), Integer(b)) = (left, right) {
        let result = match op {
            Add => a.checked_add(b),
            Sub => a.checked_sub(b),
            Mul => a.checked_mul(b),
            _ => unreachable!(),
        };
        return result.map(Integer).ok_or(EvalError::Overflow { position });
    }

    let (left, right) = left.promote_to_real(right, position)?;
    let left = left.as_real(position)?;
    let right = right.as_real(position)?;

    Ok(Real(match op {
                Add => left + right,
                Sub => left - right,
                Mul => left * right,
                _ => unreachable!(),
            }))
}

/// Evaluates true division (`/`).
///
/// The result is always real, even for two integer operands: `7 / 2` is
/// `3.5`. A zero right operand of either kind fails.
fn eval_division(left: Number, right: Number, position: usize) -> EvalResult<Number> {
    if right.is_zero() {
        return Err(EvalError::DivisionByZero { position });
    }

    Ok(Number::Real(left.as_real(position)? / right.as_real(position)?))
}

/// Evaluates floor division (`//`).
///
/// Two integers produce an integer; the quotient is floored, not truncated,
/// so `-7 // 2` is `-4`. Mixed operands produce the floored real quotient.
fn eval_floor_division(left: Number, right: Number, position: usize) -> EvalResult<Number> {
    use Number::{Integer, Real};

    if right.is_zero() {
        return Err(EvalError::DivisionByZero { position });
    }

    if let (Integer(a), Integer(b)) = (left, right) {
        let quotient = a.checked_div(b).ok_or(EvalError::Overflow { position })?;
        // Floor semantics: step down when the signs differ and the division
        // was inexact.
        let floored = if a % b != 0 && (a < 0) != (b < 0) {
            quotient - 1
        } else {
            quotient
        };
        return Ok(Integer(floored));
    }

    Ok(Real((left.as_real(position)? / right.as_real(position)?).floor()))
}

/// Evaluates modulo (`%`).
///
/// The sign of the result follows the divisor, consistent with floor
/// division: `a == (a // b) * b + a % b` holds for every non-zero `b`.
fn eval_modulo(left: Number, right: Number, position: usize) -> EvalResult<Number> {
    use Number::{Integer, Real};

    if right.is_zero() {
        return Err(EvalError::DivisionByZero { position });
    }

    if let (Integer(a), Integer(b)) = (left, right) {
        let remainder = a.checked_rem(b).ok_or(EvalError::Overflow { position })?;
        let adjusted = if remainder != 0 && (remainder < 0) != (b < 0) {
            remainder + b
        } else {
            remainder
        };
        return Ok(Integer(adjusted));
    }

    let left = left.as_real(position)?;
    let right = right.as_real(position)?;
    Ok(Real(left - (left / right).floor() * right))
}

/// Evaluates exponentiation (`**`).
///
/// An integer base with a non-negative integer exponent uses checked integer
/// power and stays integral. Negative integer exponents and any real
/// operand are computed in floating-point form.
///
/// # Example
/// ```
/// use mathex::interpreter::{evaluator::binary::eval_pow, value::Number};
///
/// let result = eval_pow(Number::Integer(2), Number::Integer(10), 0).unwrap();
/// assert_eq!(result, Number::Integer(1024));
/// ```
pub fn eval_pow(base: Number, exponent: Number, position: usize) -> EvalResult<Number> {
    use Number::{Integer, Real};

    match (base, exponent) {
        (Integer(b), Integer(e)) if e >= 0 => b.checked_pow(i64_to_u32_checked(e, position)?)
                                               .map(Integer)
                                               .ok_or(EvalError::Overflow { position }),
        _ => {
            let (left, right) = base.promote_to_real(exponent, position)?;
            Ok(Real(left.as_real(position)?.powf(right.as_real(position)?)))
        },
    }
}

/// Evaluates a comparison operator.
///
/// Produces `Integer(1)` for true and `Integer(0)` for false; there is no
/// separate boolean type. Mixed kinds compare by mathematical value, so
/// `3 == 3.0` holds. Real comparisons involving NaN follow IEEE semantics
/// and are simply false (hence `NAN != NAN` is `1`).
fn eval_comparison(op: BinaryOperator,
                   left: Number,
                   right: Number,
                   position: usize)
                   -> EvalResult<Number> {
    use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};
    use Number::Integer;

    let ordering = if let (Integer(a), Integer(b)) = (left, right) {
        Some(a.cmp(&b))
    } else {
        left.as_real(position)?
            .partial_cmp(&right.as_real(position)?)
    };

    let truth = match (op, ordering) {
        // NaN is unordered: every comparison with it is false, except `!=`.
        (NotEqual, None) => true,
        (_, None) => false,
        (Equal, Some(ord)) => ord == Ordering::Equal,
        (NotEqual, Some(ord)) => ord != Ordering::Equal,
        (Less, Some(ord)) => ord == Ordering::Less,
        (Greater, Some(ord)) => ord == Ordering::Greater,
        (LessEqual, Some(ord)) => ord != Ordering::Greater,
        (GreaterEqual, Some(ord)) => ord != Ordering::Less,
        _ => unreachable!(),
    };

    Ok(Integer(i64::from(truth)))
}
