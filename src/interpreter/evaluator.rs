/// Core evaluation logic.
///
/// Contains the `EvalResult` alias and the bottom-up tree reduction entry
/// point.
pub mod core;

/// Unary operator evaluation.
///
/// Handles negation with checked integer arithmetic.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements evaluation for all binary operations: arithmetic with
/// integer/real promotion, the three division flavors with zero checks,
/// exponentiation, and comparisons.
pub mod binary;

/// Builtin function evaluation.
///
/// Dispatches calls through the function table and implements every
/// builtin.
pub mod function;
