// ============================================================================
// Statistics & Ordering
// Value queries and in-place sorting
// ============================================================================

use super::core::Sequence;
use crate::numeric::{SequenceError, SequenceResult};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Sort direction for [`Sequence::order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Parses `"ascending"` / `"descending"`; anything else is an
/// `InvalidArgument` failure.
impl FromStr for Direction {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" => Ok(Direction::Ascending),
            "descending" => Ok(Direction::Descending),
            _ => Err(SequenceError::InvalidArgument),
        }
    }
}

impl Sequence {
    /// The smallest element. The receiver's order is never mutated.
    ///
    /// # Errors
    /// `EmptySequence` when there are no elements.
    pub fn minimum(&self) -> SequenceResult<Decimal> {
        self.iter().min().copied().ok_or(SequenceError::EmptySequence)
    }

    /// The largest element. The receiver's order is never mutated.
    ///
    /// # Errors
    /// `EmptySequence` when there are no elements.
    pub fn maximum(&self) -> SequenceResult<Decimal> {
        self.iter().max().copied().ok_or(SequenceError::EmptySequence)
    }

    /// The arithmetic mean, computed in exact decimal throughout.
    ///
    /// # Errors
    /// - `EmptySequence` when there are no elements
    /// - `Overflow` if the running sum leaves the decimal range
    pub fn mean(&self) -> SequenceResult<Decimal> {
        if self.is_empty() {
            return Err(SequenceError::EmptySequence);
        }
        let sum = self
            .iter()
            .try_fold(Decimal::ZERO, |acc, &e| acc.checked_add(e))
            .ok_or(SequenceError::Overflow)?;
        sum.checked_div(Decimal::from(self.len() as i64))
            .ok_or(SequenceError::Overflow)
    }

    /// The median of a sorted private copy.
    ///
    /// Odd counts return the exact middle element; even counts return
    /// `(low + high) / 2`, the standard formula.
    ///
    /// # Errors
    /// `EmptySequence` when there are no elements.
    pub fn median(&self) -> SequenceResult<Decimal> {
        if self.is_empty() {
            return Err(SequenceError::EmptySequence);
        }
        let mut sorted: Vec<Decimal> = self.iter().copied().collect();
        sorted.sort_unstable();

        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 1 {
            Ok(sorted[mid])
        } else {
            let low = sorted[mid - 1];
            let high = sorted[mid];
            low.checked_add(high)
                .and_then(|s| s.checked_div(Decimal::TWO))
                .ok_or(SequenceError::Overflow)
        }
    }

    /// Sort the receiver's own elements in place.
    ///
    /// Elements carry no identity beyond their value, so no stability
    /// guarantee applies.
    pub fn order(&mut self, direction: Direction) -> &mut Self {
        let elements = self.elements_mut();
        match direction {
            Direction::Ascending => elements.sort_unstable(),
            Direction::Descending => elements.sort_unstable_by(|a, b| b.cmp(a)),
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!("ascending".parse::<Direction>(), Ok(Direction::Ascending));
        assert_eq!("descending".parse::<Direction>(), Ok(Direction::Descending));
        assert_eq!(
            "sideways".parse::<Direction>(),
            Err(SequenceError::InvalidArgument)
        );
    }

    #[test]
    fn test_order_min_max_mean_scenario() {
        let mut seq = Sequence::new([5, 3, 1, 4, 2]).unwrap();

        assert_eq!(seq.minimum().unwrap(), dec("1"));
        assert_eq!(seq.maximum().unwrap(), dec("5"));
        assert_eq!(seq.mean().unwrap(), dec("3"));

        seq.order(Direction::Ascending);
        assert_eq!(
            seq.as_slice(),
            &[dec("1"), dec("2"), dec("3"), dec("4"), dec("5")]
        );
    }

    #[test]
    fn test_descending_is_reverse_of_ascending() {
        let mut a = Sequence::new([3.5, -1.0, 2.25, 0.0]).unwrap();
        let mut b = a.clone();
        a.order(Direction::Ascending);
        b.order(Direction::Descending);

        let reversed: Vec<Decimal> = a.iter().rev().copied().collect();
        assert_eq!(b.as_slice(), reversed.as_slice());
    }

    #[test]
    fn test_minimum_maximum_do_not_mutate() {
        let seq = Sequence::new([5, 1, 3]).unwrap();
        seq.minimum().unwrap();
        seq.maximum().unwrap();
        assert_eq!(seq.as_slice(), &[dec("5"), dec("1"), dec("3")]);
    }

    #[test]
    fn test_median_odd_count() {
        let seq = Sequence::new([9, 1, 5]).unwrap();
        assert_eq!(seq.median().unwrap(), dec("5"));
    }

    #[test]
    fn test_median_even_count_standard_formula() {
        let seq = Sequence::new([4, 1, 3, 2]).unwrap();
        assert_eq!(seq.median().unwrap(), dec("2.5"));
    }

    #[test]
    fn test_min_median_max_ordering() {
        let seq = Sequence::new([7.5, -2.0, 3.25, 0.5, 11.0, 4.0]).unwrap();
        let min = seq.minimum().unwrap();
        let med = seq.median().unwrap();
        let max = seq.maximum().unwrap();
        assert!(min <= med && med <= max);
    }

    #[test]
    fn test_empty_sequence_statistics() {
        let empty = Sequence::empty();
        assert_eq!(empty.minimum(), Err(SequenceError::EmptySequence));
        assert_eq!(empty.maximum(), Err(SequenceError::EmptySequence));
        assert_eq!(empty.mean(), Err(SequenceError::EmptySequence));
        assert_eq!(empty.median(), Err(SequenceError::EmptySequence));
    }

    #[test]
    fn test_mean_stays_exact() {
        let seq = Sequence::new([0.1, 0.2, 0.3]).unwrap();
        assert_eq!(seq.mean().unwrap(), dec("0.2"));
    }
}
