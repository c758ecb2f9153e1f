use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, check_depth},
            unary::parse_unary,
        },
    },
};

/// Associativity of a binary operator.
///
/// For a chain of same-precedence operators, `Left` groups left-to-right and
/// `Right` groups right-to-left.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Assoc {
    /// Groups left-to-right: `a - b - c` is `(a - b) - c`.
    Left,
    /// Groups right-to-left: `a ** b ** c` is `a ** (b ** c)`.
    Right,
}

/// Binding power of the prefix minus.
///
/// Sits between the multiplicative operators and `**`, so `-2 ** 2` parses
/// as `-(2 ** 2)` while `-2 * 3` parses as `(-2) * 3`.
pub const UNARY_MINUS_BINDING_POWER: u8 = 4;

/// Returns the binding power and associativity of a binary operator.
///
/// This is the static precedence table driving the climb:
///
/// | operators            | power | associativity |
/// |----------------------|-------|---------------|
/// | `== != < > <= >=`    | 1     | left          |
/// | `+ -`                | 2     | left          |
/// | `* / // %`           | 3     | left          |
/// | unary `-`            | 4     | prefix        |
/// | `**`                 | 5     | right         |
///
/// # Example
/// ```
/// use mathex::{
///     ast::BinaryOperator,
///     interpreter::parser::binary::{Assoc, binding_power},
/// };
///
/// assert_eq!(binding_power(BinaryOperator::Add), (2, Assoc::Left));
/// assert_eq!(binding_power(BinaryOperator::Pow), (5, Assoc::Right));
/// ```
#[must_use]
pub const fn binding_power(op: BinaryOperator) -> (u8, Assoc) {
    use BinaryOperator::{
        Add, Div, Equal, FloorDiv, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual,
        Pow, Sub,
    };

    match op {
        Equal | NotEqual | Less | Greater | LessEqual | GreaterEqual => (1, Assoc::Left),
        Add | Sub => (2, Assoc::Left),
        Mul | Div | FloorDiv | Mod => (3, Assoc::Left),
        Pow => (5, Assoc::Right),
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary
/// operator; returns `None` for all other tokens, which ends the climbing
/// loop.
///
/// # Example
/// ```
/// use mathex::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::SlashSlash => Some(BinaryOperator::FloorDiv),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::StarStar => Some(BinaryOperator::Pow),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        _ => None,
    }
}

/// Parses a binary expression by precedence climbing.
///
/// Starting from a parsed unary/primary expression, the loop peeks the next
/// token; while it is a binary operator whose binding power is at least
/// `min_bp`, the operator is consumed and the right-hand side is parsed
/// recursively with a threshold of `power + 1` for left-associative
/// operators or `power` for right-associative ones, then folded into a
/// `BinaryOp` node. A single loop handles every precedence level, instead of
/// one production rule per level.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `min_bp`: Minimum binding power an operator must have to be consumed.
/// - `depth`: Current recursion depth.
///
/// # Returns
/// A binary expression tree respecting precedence and associativity.
pub fn parse_binary_expr<'a, I>(tokens: &mut Peekable<I>,
                                min_bp: u8,
                                depth: usize)
                                -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    check_depth(tokens, depth)?;

    let mut left = parse_unary(tokens, depth)?;

    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && binding_power(op).0 >= min_bp
        {
            let position = *position;
            tokens.next();

            let (power, assoc) = binding_power(op);
            let next_min = match assoc {
                Assoc::Left => power + 1,
                Assoc::Right => power,
            };

            let right = parse_binary_expr(tokens, next_min, depth + 1)?;

            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
            continue;
        }
        break;
    }

    Ok(left)
}
