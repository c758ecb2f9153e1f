/// Function call dispatch.
///
/// Looks up the callee in the function table, evaluates the arguments, and
/// re-checks the arity before invoking the implementation.
pub mod core;

/// Simple real-valued builtins: trigonometry, `abs`, `sqrt`, `hypot`,
/// and logical `not`.
pub mod builtin;

/// Kind conversions: `int` and `float`.
pub mod convert;

/// Factorial.
pub mod fact;

/// Variadic integer builtins: `gcd`, `lcm`, and `xor`.
pub mod int_ops;

/// Logarithms: natural, arbitrary base, `log2`, and `log10`.
pub mod log;

/// Variadic `min` and `max` with NaN propagation.
pub mod min_max;

/// Rounding builtins: `round`, `ceil`, and `floor`.
pub mod round;
