// ============================================================================
// decseq Library
// Exact-decimal one-dimensional sequences with broadcasted arithmetic
// ============================================================================

//! # decseq
//!
//! A fixed-precision numeric sequence container supporting broadcasted
//! arithmetic: a minimal one-dimensional array type with exact decimal
//! semantics, for small, dynamically-sized sequences.
//!
//! ## Features
//!
//! - **Exact decimal elements** - numeric inputs cross into the decimal
//!   domain through their canonical string form, so `0.1` means `0.1`
//! - **Broadcasted arithmetic** - `+ - * /` and `pow` against a scalar, a
//!   positional collection, or another equal-length sequence, in both
//!   operand orders
//! - **Structural mutation** - `fadd`/`badd`, indexed and span-based
//!   reads, writes and deletes, with validation before any mutation
//! - **Statistics and ordering** - minimum, maximum, mean, median, and
//!   in-place ascending/descending sorting
//! - **Progression generators** - arithmetic and geometric ranges
//!
//! ## Example
//!
//! ```rust
//! use decseq::prelude::*;
//! use decseq::generators::arithmetic_range;
//!
//! let mut seq = Sequence::new([5, 3, 1, 4, 2])?;
//! seq.order(Direction::Ascending);
//! assert_eq!(seq.to_string(), "[1  2  3  4  5  ]");
//!
//! // Broadcast against a scalar, both operand orders
//! let shifted: Sequence = &seq + 10;
//! let inverted = 1 - &seq;
//!
//! // Elementwise against an equal-length sequence
//! let sum = shifted.checked_add(&inverted)?;
//! assert_eq!(sum.get(0)?, sum.get(4)?);
//!
//! // Progressions
//! let ramp = arithmetic_range(0, 3, 5)?;
//! assert_eq!(ramp.len(), 5);
//! # Ok::<(), SequenceError>(())
//! ```

pub mod generators;
pub mod numeric;
pub mod sequence;

pub use numeric::{SequenceError, SequenceResult, Value};
pub use sequence::{Direction, Operand, Sequence, Span};

// Re-exports for convenience
pub mod prelude {
    pub use crate::generators::{arithmetic_range, geometric_range};
    pub use crate::numeric::{SequenceError, SequenceResult, Value};
    pub use crate::sequence::{Direction, Operand, Sequence, Span};
}
