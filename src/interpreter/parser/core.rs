use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_binary_expr},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum recursion depth accepted while parsing.
///
/// Deeply nested parentheses would otherwise exhaust the call stack; beyond
/// this bound parsing fails with [`ParseError::NestingTooDeep`].
pub const MAX_NESTING_DEPTH: usize = 256;

/// The lowest binding power; parsing an expression starts here.
pub const MIN_BINDING_POWER: u8 = 1;

/// Parses a complete expression from a token sequence.
///
/// This is the entry point for parsing. It parses one full expression and
/// then requires the token sequence to be exhausted, so trailing garbage
/// such as `2 3` or an unbalanced `)` is rejected.
///
/// # Parameters
/// - `tokens`: The `(Token, byte offset)` pairs produced by
///   [`crate::interpreter::lexer::tokenize`].
///
/// # Returns
/// The root of the parsed syntax tree.
///
/// # Errors
/// - `UnexpectedTrailingTokens` if input remains after the expression.
/// - Any error propagated from expression parsing.
///
/// # Example
/// ```
/// use mathex::{
///     error::ParseError,
///     interpreter::{lexer::tokenize, parser::core::parse_tokens},
/// };
///
/// let tokens = tokenize("1 + 2").unwrap();
/// assert!(parse_tokens(&tokens).is_ok());
///
/// let tokens = tokenize("1 + 2 )").unwrap();
/// assert!(matches!(parse_tokens(&tokens),
///                  Err(ParseError::UnexpectedTrailingTokens { .. })));
/// ```
pub fn parse_tokens(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();

    // Inner parsing functions cannot see past the end of the iterator, so
    // the end-of-input offset is filled in here, where the whole token
    // sequence is known.
    let expr = parse_expression(&mut iter, 0).map_err(|e| match e {
                   ParseError::UnexpectedEndOfInput { .. } => {
                       let position = tokens.last().map_or(0, |(_, position)| *position);
                       ParseError::UnexpectedEndOfInput { position }
                   },
                   other => other,
               })?;

    if let Some((token, position)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:    format!("{token:?}"),
                                                          position: *position, });
    }

    Ok(expr)
}

/// Parses a full expression at the lowest binding power.
///
/// Delegates to the precedence-climbing loop in
/// [`crate::interpreter::parser::binary`]. Each nested construct (grouping,
/// call argument, right-hand side) re-enters through here or through the
/// climb with an incremented `depth`.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, byte offset)` pairs.
/// - `depth`: Current recursion depth, checked against
///   [`MAX_NESTING_DEPTH`].
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    check_depth(tokens, depth)?;
    parse_binary_expr(tokens, MIN_BINDING_POWER, depth)
}

/// Fails with [`ParseError::NestingTooDeep`] once `depth` passes the bound.
pub(crate) fn check_depth<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if depth > MAX_NESTING_DEPTH {
        let position = tokens.peek().map_or(0, |(_, position)| *position);
        return Err(ParseError::NestingTooDeep { position });
    }
    Ok(())
}
