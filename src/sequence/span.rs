// ============================================================================
// Spans
// Start/stop/step sub-ranges used by slice-style reads, writes and deletes
// ============================================================================

use crate::numeric::{SequenceError, SequenceResult};
use std::ops::Range;

/// A `start..stop` sub-range with a positive step, `stop` exclusive.
///
/// The number of implied positions is `ceil((stop - start) / step)`, so a
/// step that does not evenly divide the range still covers the final
/// partial stride.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub stop: usize,
    pub step: usize,
}

impl Span {
    /// Create a span covering `start..stop` with the given step.
    #[inline]
    pub fn new(start: usize, stop: usize, step: usize) -> Self {
        Self { start, stop, step }
    }

    /// The number of positions the span implies (ceiling division).
    #[inline]
    pub fn len(&self) -> usize {
        if self.step == 0 || self.start >= self.stop {
            0
        } else {
            (self.stop - self.start).div_ceil(self.step)
        }
    }

    /// Whether the span implies no positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check the span against a sequence of length `len`.
    ///
    /// # Errors
    /// - `InvalidArgument` for a zero step or `start > stop`
    /// - `IndexOutOfRange` when `stop` exceeds `len`
    pub fn validate(&self, len: usize) -> SequenceResult<()> {
        if self.step == 0 || self.start > self.stop {
            return Err(SequenceError::InvalidArgument);
        }
        if self.stop > len {
            return Err(SequenceError::IndexOutOfRange {
                index: self.stop,
                len,
            });
        }
        Ok(())
    }

    /// Iterate the absolute indices the span covers, in ascending order.
    #[inline]
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        (self.start..self.stop).step_by(self.step.max(1))
    }
}

impl From<Range<usize>> for Span {
    #[inline]
    fn from(r: Range<usize>) -> Self {
        Span::new(r.start, r.end, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_exact_division() {
        assert_eq!(Span::new(0, 6, 2).len(), 3);
        assert_eq!(Span::new(1, 3, 1).len(), 2);
    }

    #[test]
    fn test_len_ceiling_division() {
        // 0, 3, 6 cover 0..7 with step 3
        assert_eq!(Span::new(0, 7, 3).len(), 3);
        assert_eq!(Span::new(0, 5, 2).len(), 3);
    }

    #[test]
    fn test_empty_span() {
        assert!(Span::new(4, 4, 1).is_empty());
        assert_eq!(Span::new(4, 4, 1).len(), 0);
    }

    #[test]
    fn test_validate() {
        assert!(Span::new(1, 3, 1).validate(5).is_ok());
        assert_eq!(
            Span::new(1, 3, 0).validate(5),
            Err(SequenceError::InvalidArgument)
        );
        assert_eq!(
            Span::new(3, 1, 1).validate(5),
            Err(SequenceError::InvalidArgument)
        );
        assert_eq!(
            Span::new(0, 6, 1).validate(5),
            Err(SequenceError::IndexOutOfRange { index: 6, len: 5 })
        );
    }

    #[test]
    fn test_indices() {
        let idx: Vec<usize> = Span::new(1, 8, 3).indices().collect();
        assert_eq!(idx, vec![1, 4, 7]);
    }

    #[test]
    fn test_from_range() {
        assert_eq!(Span::from(2..5), Span::new(2, 5, 1));
    }
}
