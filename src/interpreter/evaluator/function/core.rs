use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, evaluate},
        table,
        value::Number,
    },
};

/// Evaluates a function call.
///
/// The callee is resolved in the function table, every argument is reduced
/// to a value, and the argument count is checked against the declared arity
/// before the implementation runs.
///
/// The parser already rejects unknown names and wrong arities, so the
/// checks here only trip for trees built without going through it.
///
/// # Parameters
/// - `name`: Name of the function to call.
/// - `arguments`: Unevaluated argument expressions.
/// - `position`: Byte offset of the callee for error reporting.
///
/// # Returns
/// The function's result, or the error it raised.
pub fn eval_function_call(name: &str,
                          arguments: &[Expr],
                          position: usize)
                          -> EvalResult<Number> {
    let Some(definition) = table::function(name) else {
        return Err(EvalError::UnknownFunction { name: name.to_string(),
                                                position });
    };

    let values = arguments.iter()
                          .map(evaluate)
                          .collect::<EvalResult<Vec<_>>>()?;

    if !definition.arity.check(values.len()) {
        return Err(EvalError::ArityMismatch { name: name.to_string(),
                                              position });
    }

    definition.call(&values, position)
}
