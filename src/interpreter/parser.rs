/// Core parsing logic and entry points.
///
/// Contains the `ParseResult` alias, the top-level token-to-AST entry point
/// with its trailing-token check, and the nesting-depth bound.
pub mod core;

/// Binary expression parsing.
///
/// Implements the precedence-climbing loop over the static binding-power
/// table, covering all arithmetic and comparison operators.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix negation, literals, grouping parentheses, constants, and
/// function calls with their argument lists.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides the comma-separated list helper used for call arguments.
pub mod utils;
