/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression. Parse errors include unrecognized characters, malformed
/// numeric literals, syntax mistakes, unknown identifiers, and arity
/// violations detected before evaluation.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while reducing the syntax
/// tree. Evaluation errors include division by zero, mathematical domain
/// violations, and integer overflow.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;

/// Any failure the evaluator pipeline can produce.
///
/// This is the error type returned by [`crate::evaluate_expression`]; it
/// wraps the
/// stage-specific error enums so that callers can match on the stage or
/// simply display the message.
#[derive(Debug)]
pub enum Error {
    /// The expression could not be tokenized or parsed.
    Parse(ParseError),
    /// The expression parsed, but evaluating it failed.
    Eval(EvalError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
