#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// Attempted division (or floor division, or modulo) by zero.
    DivisionByZero {
        /// Byte offset of the operator.
        position: usize,
    },
    /// A function received a mathematically unsupported operand, such as a
    /// negative `fact` argument or a non-positive `log` argument.
    Domain {
        /// The function or operator that rejected the operand.
        name:     String,
        /// A description of the violated constraint.
        details:  String,
        /// Byte offset of the call.
        position: usize,
    },
    /// A function call reached evaluation with a wrong argument count.
    ///
    /// The parser validates arity, so this is a second line of defense for
    /// syntax trees constructed by hand.
    ArityMismatch {
        /// The function name.
        name:     String,
        /// Byte offset of the call.
        position: usize,
    },
    /// A call reached evaluation naming a function that does not exist.
    ///
    /// Like [`EvalError::ArityMismatch`], this can only happen for trees
    /// constructed without the parser.
    UnknownFunction {
        /// The function name.
        name:     String,
        /// Byte offset of the call.
        position: usize,
    },
    /// Integer arithmetic overflowed, or an integer was too large to promote
    /// exactly to a real.
    Overflow {
        /// Byte offset of the operation.
        position: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Error at offset {position}: Division by zero.")
            },

            Self::Domain { name,
                           details,
                           position, } => {
                write!(f, "Error at offset {position}: Domain error in '{name}': {details}.")
            },

            Self::ArityMismatch { name, position } => {
                write!(f, "Error at offset {position}: Argument count mismatch for '{name}'.")
            },

            Self::UnknownFunction { name, position } => {
                write!(f, "Error at offset {position}: Unknown function '{name}'.")
            },

            Self::Overflow { position } => write!(f,
                                                  "Error at offset {position}: Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for EvalError {}
