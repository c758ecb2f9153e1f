use crate::interpreter::table::Arity;

#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a character the lexer does not recognize.
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset where the character occurred.
        position:  usize,
    },
    /// A numeric literal was malformed or out of range (e.g. a trailing
    /// exponent marker with no digits).
    MalformedNumber {
        /// The raw literal text.
        literal:  String,
        /// Byte offset where the literal started.
        position: usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset where the token occurred.
        position: usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// Byte offset where input ended.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Byte offset of the unmatched `(`.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token:    String,
        /// Byte offset where the token occurred.
        position: usize,
    },
    /// An identifier is neither a known constant nor a known function.
    UnknownIdentifier {
        /// The identifier name.
        name:     String,
        /// Byte offset where the identifier occurred.
        position: usize,
    },
    /// A function was called with a number of arguments outside its contract.
    ArityMismatch {
        /// The function name.
        name:     String,
        /// The arity the function accepts.
        expected: Arity,
        /// The number of arguments actually supplied.
        got:      usize,
        /// Byte offset of the call.
        position: usize,
    },
    /// Parenthesis nesting exceeded the supported depth.
    NestingTooDeep {
        /// Byte offset where the limit was hit.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { character, position } => {
                write!(f, "Error at offset {position}: Unrecognized character '{character}'.")
            },

            Self::MalformedNumber { literal, position } => {
                write!(f, "Error at offset {position}: Malformed numeric literal '{literal}'.")
            },

            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at offset {position}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Error at offset {position}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Error at offset {position}: Expected closing parenthesis ')' but none found."),

            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Error at offset {position}: Extra tokens after expression. Check your input: {token}"),

            Self::UnknownIdentifier { name, position } => {
                write!(f, "Error at offset {position}: Unknown identifier '{name}'.")
            },

            Self::ArityMismatch { name,
                                  expected,
                                  got,
                                  position, } => write!(f,
                                                        "Error at offset {position}: Function '{name}' takes {expected}, but got {got}."),

            Self::NestingTooDeep { position } => {
                write!(f, "Error at offset {position}: Expression is nested too deeply.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
