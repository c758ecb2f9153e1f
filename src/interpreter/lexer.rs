use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression language.
///
/// Multi-character operators are listed before their single-character
/// prefixes so that `**`, `//`, `==`, `!=`, `<=`, and `>=` are never
/// mis-split; logos resolves this through longest-match.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Real literal tokens, such as `3.14`, `.5` or `2.1e-10`.
    ///
    /// The last pattern matches a dangling exponent marker (`1e`, `2.5e+`);
    /// its slice fails to parse as `f64`, so the callback rejects it and the
    /// lexer reports a malformed literal instead of splitting the input.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_real)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_real)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_real)]
    #[regex(r"[0-9]+(\.[0-9]+)?[eE][+-]?", parse_real)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Identifier tokens; constant or function names such as `PI` or `sin`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `**`
    #[token("**")]
    StarStar,
    /// `//`
    #[token("//")]
    SlashSlash,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Whitespace.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Tokenizes a source expression into `(Token, byte offset)` pairs.
///
/// The offset of each token is the start of its span in the input, used by
/// later stages for error reporting. End of input is represented by the end
/// of the returned sequence.
///
/// # Errors
/// - `ParseError::MalformedNumber` for numeric literals that do not parse
///   (dangling exponents, integers beyond `i64`).
/// - `ParseError::UnrecognizedCharacter` for any other input the lexer
///   rejects.
///
/// # Example
/// ```
/// use mathex::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 + 2").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Integer(1), 0),
///                 (Token::Plus, 2),
///                 (Token::Integer(2), 4)]);
///
/// assert!(tokenize("1e").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        if let Ok(tok) = token {
            tokens.push((tok, position));
        } else {
            let slice = lexer.slice();
            let first = slice.chars().next().unwrap_or_default();
            // Count characters, not bytes: a lone multi-byte character is
            // still a single unrecognized character.
            return Err(if slice.chars().count() > 1 || first.is_ascii_digit() {
                           ParseError::MalformedNumber { literal: slice.to_string(),
                                                         position }
                       } else {
                           ParseError::UnrecognizedCharacter { character: first,
                                                               position }
                       });
        }
    }

    Ok(tokens)
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_real(lex: &mut logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the token slice does not fit an `i64`.
fn parse_integer(lex: &mut logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
