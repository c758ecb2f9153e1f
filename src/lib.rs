//! # mathex
//!
//! mathex is a mathematical expression evaluator written in Rust.
//! It tokenizes, parses, and evaluates single-line arithmetic expressions
//! with integer and real numbers, named constants, and a table of builtin
//! functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::evaluate,
    lexer::tokenize,
    parser::core::parse_tokens,
    value::Number,
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// the syntactic structure of an expression as a tree. The AST is built by
/// the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression node types for literals, constants, operators, and
///   function calls.
/// - Attaches source byte offsets to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing, or evaluating an expression. It standardizes error reporting and
/// carries detailed information about failures, including source offsets for
/// user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches byte offsets and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, evaluation, value
/// representation, and the builtin function table to provide a complete
/// pipeline from source text to a numeric result.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides reusable conversion routines used throughout the
/// evaluator: safe conversions between integer and floating-point types
/// without silent data loss.
///
/// # Responsibilities
/// - Safely convert between `i64`, `u32`, and `f64`.
pub mod util;

/// Evaluates a single expression from source text to a numeric value.
///
/// The source is tokenized, parsed into an AST, and reduced bottom-up in one
/// call. This is the primary entry point of the crate.
///
/// # Errors
/// Returns [`error::Error::Parse`] for malformed input (unrecognized
/// characters, syntax errors, unknown identifiers, wrong argument counts)
/// and [`error::Error::Eval`] for runtime failures (division by zero,
/// domain violations, overflow).
///
/// # Examples
/// ```
/// use mathex::{evaluate_expression, interpreter::value::Number};
///
/// let value = evaluate_expression("2 + 3 * (4 - 1)").unwrap();
/// assert_eq!(value, Number::Integer(11));
///
/// let value = evaluate_expression("2 ** -1").unwrap();
/// assert_eq!(value, Number::Real(0.5));
///
/// assert!(evaluate_expression("1 / 0").is_err());
/// ```
pub fn evaluate_expression(source: &str) -> Result<Number, error::Error> {
    let tokens = tokenize(source)?;
    let expr = parse_tokens(&tokens)?;
    Ok(evaluate(&expr)?)
}
