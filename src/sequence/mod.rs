// ============================================================================
// Sequence Module
// Exact-decimal sequence container with broadcasted arithmetic
// ============================================================================
//
// This module provides:
// - Sequence: the ordered, mutable, exact-decimal container
// - Operand: the three-way broadcast dispatch (scalar / collection / sequence)
// - Span: start/stop/step sub-ranges for slice-style mutation
// - Direction: sort direction for in-place ordering
//
// Design principles:
// - Validation always precedes mutation; a rejected operation leaves the
//   receiver unmodified
// - checked_* methods return Result; plain operators panic on failure

mod broadcast;
mod core;
mod ops;
mod span;
mod stats;

pub use self::broadcast::Operand;
pub use self::core::Sequence;
pub use self::span::Span;
pub use self::stats::Direction;
