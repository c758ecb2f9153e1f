use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::{UNARY_MINUS_BINDING_POWER, parse_binary_expr},
            core::ParseResult,
        },
        table,
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation). The operand is
/// parsed at the binding power of the prefix minus, so exponentiation binds
/// tighter than negation: `-2 ** 2` parses as `-(2 ** 2)`, and `(-2) ** 2`
/// requires explicit parentheses. This matches the usual mathematical
/// convention and is deliberate.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := "-" unary-operand
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current recursion depth.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        let expr = parse_binary_expr(tokens, UNARY_MINUS_BINDING_POWER, depth + 1)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                           expr: Box::new(expr),
                           position })
    } else {
        parse_primary(tokens, depth)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar and include:
/// - numeric literals
/// - parenthesized expressions
/// - constant references
/// - function calls
///
/// Identifier resolution happens here, eagerly: an identifier followed by
/// `(` must name a builtin function, any other identifier must name a
/// constant, and anything else is an [`ParseError::UnknownIdentifier`].
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | "(" expression ")"
///              | identifier
///              | identifier "(" arguments ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
/// - `depth`: Current recursion depth.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    // The placeholder offset is replaced with the last token's offset by
    // `parse_tokens`, which can see the whole sequence.
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { position: 0 })?;

    match peeked {
        (Token::Integer(..) | Token::Real(..), _) => parse_literal(tokens),
        (Token::LParen, _) => parse_grouping(tokens, depth),
        (Token::Identifier(_), _) => parse_identifier_or_call(tokens, depth),
        (token, position) => Err(ParseError::UnexpectedToken { token:    format!("{token:?}"),
                                                               position: *position, }),
    }
}

/// Parses a numeric literal.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(n), position)) => Ok(Expr::Literal { value:    (*n).into(),
                                                                  position: *position, }),
        Some((Token::Real(r), position)) => Ok(Expr::Literal { value:    (*r).into(),
                                                               position: *position, }),
        _ => unreachable!(),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Failure to find the closing
/// parenthesis yields [`ParseError::ExpectedClosingParen`]. Parentheses
/// carry no AST node of their own.
///
/// Grammar: `grouping := "(" expression ")"`
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, position) = *tokens.next().unwrap();
    let expr = super::core::parse_expression(tokens, depth + 1)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { position }),
    }
}

/// Parses a constant reference or a function call.
///
/// Supported forms:
///
/// - `identifier`: must be present in the constant table; resolved to its
///   value at parse time.
/// - `identifier(arg1, arg2, ...)`: must be present in the function table;
///   the collected argument count is validated against the function's arity
///   contract.
///
/// # Errors
/// - [`ParseError::UnknownIdentifier`] if the name is in neither table.
/// - [`ParseError::ArityMismatch`] if the argument count violates the arity
///   contract.
/// - Any error from parsing the argument list.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, position) = match tokens.next() {
        Some((Token::Identifier(n), position)) => (n.clone(), *position),
        _ => unreachable!(),
    };

    match tokens.peek() {
        Some((Token::LParen, open_position)) => {
            let open_position = *open_position;
            tokens.next();

            let Some(def) = table::function(&name) else {
                return Err(ParseError::UnknownIdentifier { name, position });
            };

            let arguments = super::utils::parse_comma_separated(tokens, depth, open_position)?;

            if !def.arity.check(arguments.len()) {
                return Err(ParseError::ArityMismatch { name,
                                                       expected: def.arity,
                                                       got: arguments.len(),
                                                       position });
            }

            Ok(Expr::FunctionCall { name,
                                    arguments,
                                    position })
        },
        _ => match table::constant(&name) {
            Some(value) => Ok(Expr::Constant { name,
                                               value,
                                               position }),
            None => Err(ParseError::UnknownIdentifier { name, position }),
        },
    }
}
