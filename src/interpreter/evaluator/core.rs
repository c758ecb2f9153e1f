use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        evaluator::{binary::eval_binary_op, function::core::eval_function_call,
                    unary::eval_unary_op},
        value::Number,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a syntax tree to a [`Number`].
///
/// Evaluation is a bottom-up reduction: each node reduces its children
/// first, then applies its own operator or function semantics to the
/// resulting values, applying the integer/real promotion rule at every
/// boundary. The tree is never mutated; independent trees can be evaluated
/// concurrently.
///
/// # Parameters
/// - `expr`: Root of the tree to reduce.
///
/// # Returns
/// The numeric result of the expression.
///
/// # Errors
/// - `DivisionByZero` for `/`, `//`, or `%` with a zero right operand.
/// - `Domain` for mathematically unsupported function operands.
/// - `Overflow` when checked integer arithmetic wraps.
/// - `ArityMismatch`/`UnknownFunction` defensively, for trees built without
///   the parser.
///
/// # Example
/// ```
/// use mathex::{
///     interpreter::{evaluator::core::evaluate, lexer::tokenize, parser::core::parse_tokens},
///     interpreter::value::Number,
/// };
///
/// let tokens = tokenize("2 + 3").unwrap();
/// let expr = parse_tokens(&tokens).unwrap();
///
/// assert_eq!(evaluate(&expr).unwrap(), Number::Integer(5));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<Number> {
    match expr {
        Expr::Literal { value, .. } | Expr::Constant { value, .. } => Ok(*value),
        Expr::UnaryOp { op, expr, position } => eval_unary_op(*op, expr, *position),
        Expr::BinaryOp { left,
                         op,
                         right,
                         position, } => eval_binary_op(left, *op, right, *position),
        Expr::FunctionCall { name,
                             arguments,
                             position, } => eval_function_call(name, arguments, *position),
    }
}
