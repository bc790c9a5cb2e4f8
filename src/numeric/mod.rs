// ============================================================================
// Numeric Module
// Exact decimal input handling for sequence elements and operands
// ============================================================================
//
// This module provides:
// - Value: plain numeric inputs (integer, float, decimal)
// - SequenceError: error taxonomy for every sequence operation
//
// Design principles:
// - Floats cross into the decimal domain through their canonical string
//   form, never through their binary representation
// - All fallible conversions return Result (no panics)

mod errors;
mod value;

pub use errors::{SequenceError, SequenceResult};
pub use value::Value;
