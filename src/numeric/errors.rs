// ============================================================================
// Sequence Errors
// Error types for sequence construction, mutation and broadcast arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur when constructing or operating on a [`Sequence`].
///
/// [`Sequence`]: crate::sequence::Sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceError {
    /// A value supplied in element position has no exact decimal form
    InvalidElement,
    /// Elementwise operation or slice assignment with disagreeing lengths
    LengthMismatch { left: usize, right: usize },
    /// Arithmetic or `fadd`/`badd` operand that is not exact-decimal representable
    UnsupportedOperand,
    /// Equality comparison against a non-sequence operand
    TypeMismatch,
    /// Integer index beyond the current bounds
    IndexOutOfRange { index: usize, len: usize },
    /// Invalid sort direction, degenerate generator count, zero geometric
    /// start, or malformed span
    InvalidArgument,
    /// Statistics requested on an empty sequence
    EmptySequence,
    /// Elementwise division by a zero divisor
    DivisionByZero,
    /// Result exceeded the representable decimal range
    Overflow,
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::InvalidElement => {
                write!(f, "invalid element: value has no exact decimal form")
            },
            SequenceError::LengthMismatch { left, right } => write!(
                f,
                "cannot pair the two sequences with length {} and {}",
                left, right
            ),
            SequenceError::UnsupportedOperand => {
                write!(f, "unsupported operand: not exact-decimal representable")
            },
            SequenceError::TypeMismatch => {
                write!(f, "only sequences can be compared for equality")
            },
            SequenceError::IndexOutOfRange { index, len } => write!(
                f,
                "sequence index {} out of range for length {}",
                index, len
            ),
            SequenceError::InvalidArgument => write!(f, "invalid argument"),
            SequenceError::EmptySequence => {
                write!(f, "statistic is undefined for an empty sequence")
            },
            SequenceError::DivisionByZero => write!(f, "division by zero"),
            SequenceError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded the decimal range")
            },
        }
    }
}

impl std::error::Error for SequenceError {}

/// Result type alias for sequence operations
pub type SequenceResult<T> = Result<T, SequenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SequenceError::LengthMismatch { left: 3, right: 5 }.to_string(),
            "cannot pair the two sequences with length 3 and 5"
        );
        assert_eq!(SequenceError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            SequenceError::IndexOutOfRange { index: 7, len: 4 }.to_string(),
            "sequence index 7 out of range for length 4"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(SequenceError::Overflow, SequenceError::Overflow);
        assert_ne!(
            SequenceError::InvalidElement,
            SequenceError::UnsupportedOperand
        );
    }
}
