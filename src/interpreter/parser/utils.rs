use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a comma-separated argument list terminated by `)`.
///
/// The opening parenthesis has already been consumed. Each argument is a
/// full expression parsed at the lowest binding power, so any operator may
/// appear inside an argument. An immediately following `)` yields an empty
/// list.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the `(`.
/// - `depth`: Current recursion depth.
/// - `open_position`: Byte offset of the opening parenthesis, reported when
///   the closing one is missing.
///
/// # Returns
/// The parsed arguments in source order.
///
/// # Errors
/// - [`ParseError::ExpectedClosingParen`] if input ends before `)`.
/// - [`ParseError::UnexpectedToken`] for a separator that is neither `,` nor
///   `)`.
pub(crate) fn parse_comma_separated<'a, I>(tokens: &mut Peekable<I>,
                                           depth: usize,
                                           open_position: usize)
                                           -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();

    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();
        return Ok(items);
    }

    loop {
        items.push(parse_expression(tokens, depth + 1)?);

        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::RParen, _)) => break,
            Some((token, position)) => {
                return Err(ParseError::UnexpectedToken { token:    format!("{token:?}"),
                                                         position: *position, });
            },
            None => return Err(ParseError::ExpectedClosingParen { position: open_position }),
        }
    }

    Ok(items)
}
