/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss or rounding errors.
/// Use these helpers whenever a value has to cross the integer/real boundary
/// in a way that must be lossless.
///
/// All functions return a `Result`, which is `Ok` if the conversion is valid,
/// or an error if the value is out of range or not representable.
pub mod num;
