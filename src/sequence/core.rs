// ============================================================================
// Sequence Container
// Ordered, mutable, exact-decimal sequence with validated construction
// ============================================================================

use super::broadcast::Operand;
use super::span::Span;
use crate::numeric::{SequenceError, SequenceResult, Value};
use rust_decimal::Decimal;
use smallvec::SmallVec;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Backing store; sequences up to 8 elements stay inline.
pub(crate) type Elements = SmallVec<[Decimal; 8]>;

/// An ordered, mutable sequence of exact decimal numbers.
///
/// Every element is a [`Decimal`]; numeric inputs are converted through
/// their canonical string form on the way in (see [`Value`]), so binary
/// floating-point rounding artifacts never enter the container.
///
/// Cloning performs a deep element-wise value copy; two sequences never
/// share mutable state.
///
/// # Example
/// ```
/// use decseq::prelude::*;
///
/// let mut seq = Sequence::new([1, 2, 3])?;
/// seq.fadd(0)?.badd(vec![4, 5])?;
/// assert_eq!(seq.len(), 6);
/// # Ok::<(), SequenceError>(())
/// ```
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sequence {
    elements: Elements,
}

impl Sequence {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create an empty sequence.
    #[inline]
    pub fn empty() -> Self {
        Self {
            elements: Elements::new(),
        }
    }

    /// Create a sequence from an ordered collection of numeric values.
    ///
    /// Each value is validated and converted to exact decimal form through
    /// its canonical string representation.
    ///
    /// # Errors
    /// - `InvalidElement` if a value has no exact decimal form (`NaN`, `±inf`)
    /// - `Overflow` if a value exceeds the decimal range
    pub fn new<I, T>(values: I) -> SequenceResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let elements = values
            .into_iter()
            .map(|v| v.into().to_decimal())
            .collect::<SequenceResult<Elements>>()?;
        Ok(Self { elements })
    }

    /// Build directly from already-converted decimals.
    #[inline]
    pub(crate) fn from_elements(elements: Elements) -> Self {
        Self { elements }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The element count.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the sequence holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Borrow the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Decimal] {
        &self.elements
    }

    /// Iterate the elements in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Decimal> {
        self.elements.iter()
    }

    #[inline]
    pub(crate) fn elements_mut(&mut self) -> &mut Elements {
        &mut self.elements
    }

    /// Read the element at `index`.
    ///
    /// # Errors
    /// `IndexOutOfRange` unless `index < len`.
    pub fn get(&self, index: usize) -> SequenceResult<Decimal> {
        self.elements
            .get(index)
            .copied()
            .ok_or(SequenceError::IndexOutOfRange {
                index,
                len: self.elements.len(),
            })
    }

    /// Elementwise value equality.
    ///
    /// This is the comparison `==` does *not* perform; see the
    /// [`PartialEq`] note on this type.
    pub fn eq_elements(&self, other: &Sequence) -> bool {
        self.elements == other.elements
    }

    /// Equality against an arbitrary operand.
    ///
    /// Mirrors the container's `==` contract: two sequences compare equal
    /// when their element counts match.
    ///
    /// # Errors
    /// `TypeMismatch` when the operand is not a sequence.
    pub fn compare(&self, operand: &Operand) -> SequenceResult<bool> {
        match operand {
            Operand::Sequence(other) => Ok(self.len() == other.len()),
            _ => Err(SequenceError::TypeMismatch),
        }
    }

    // ========================================================================
    // Structural Mutation
    // ========================================================================

    /// Add forward: prepend a scalar or a run of collection/sequence elements.
    ///
    /// All new values are validated and converted before the first insertion,
    /// so a rejected operand leaves the sequence unmodified.
    ///
    /// # Errors
    /// - `UnsupportedOperand` for a scalar with no exact decimal form
    /// - `InvalidElement` for an invalid value inside a collection operand
    pub fn fadd(&mut self, operand: impl Into<Operand>) -> SequenceResult<&mut Self> {
        let run = operand.into().into_run()?;
        self.elements.insert_from_slice(0, &run);
        Ok(self)
    }

    /// Add backward: append a scalar or a run of collection/sequence elements.
    ///
    /// Same validation and atomicity contract as [`fadd`](Self::fadd).
    pub fn badd(&mut self, operand: impl Into<Operand>) -> SequenceResult<&mut Self> {
        let run = operand.into().into_run()?;
        self.elements.extend_from_slice(&run);
        Ok(self)
    }

    /// Overwrite the element at `index` with a validated scalar value.
    ///
    /// # Errors
    /// - `IndexOutOfRange` unless `index < len`
    /// - `InvalidElement` if the value has no exact decimal form
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> SequenceResult<&mut Self> {
        let len = self.elements.len();
        if index >= len {
            return Err(SequenceError::IndexOutOfRange { index, len });
        }
        self.elements[index] = value.into().to_decimal()?;
        Ok(self)
    }

    /// Overwrite every position a span implies, pairing positionally.
    ///
    /// The operand must be a collection or sequence whose length equals the
    /// span's implied position count exactly. All values are converted and
    /// validated before the first write.
    ///
    /// # Errors
    /// - `UnsupportedOperand` for a scalar operand
    /// - `LengthMismatch` when the operand length disagrees with the span
    pub fn set_span(
        &mut self,
        span: Span,
        operand: impl Into<Operand>,
    ) -> SequenceResult<&mut Self> {
        span.validate(self.elements.len())?;
        let run = match operand.into() {
            Operand::Scalar(_) => return Err(SequenceError::UnsupportedOperand),
            other => other.into_run()?,
        };
        if run.len() != span.len() {
            return Err(SequenceError::LengthMismatch {
                left: span.len(),
                right: run.len(),
            });
        }
        for (i, value) in span.indices().zip(run) {
            self.elements[i] = value;
        }
        Ok(self)
    }

    /// Remove the element at `index`.
    ///
    /// # Errors
    /// `IndexOutOfRange` unless `index < len`.
    pub fn delete(&mut self, index: usize) -> SequenceResult<&mut Self> {
        let len = self.elements.len();
        if index >= len {
            return Err(SequenceError::IndexOutOfRange { index, len });
        }
        self.elements.remove(index);
        Ok(self)
    }

    /// Remove every position a span implies.
    ///
    /// Absolute target indices are computed up front and removed from
    /// highest to lowest, so earlier removals never shift later targets.
    pub fn delete_span(&mut self, span: Span) -> SequenceResult<&mut Self> {
        span.validate(self.elements.len())?;
        let targets: Vec<usize> = span.indices().collect();
        tracing::debug!("deleting {} positions from span {:?}", targets.len(), span);
        for &i in targets.iter().rev() {
            self.elements.remove(i);
        }
        Ok(self)
    }

    /// Extract the span's positions as a new sequence, leaving the receiver
    /// untouched.
    pub fn extract(&self, span: Span) -> SequenceResult<Sequence> {
        span.validate(self.elements.len())?;
        let elements = span.indices().map(|i| self.elements[i]).collect();
        Ok(Sequence { elements })
    }

    /// Truncate the receiver to the span's positions in place.
    ///
    /// This is the explicit mutation counterpart of [`extract`](Self::extract).
    pub fn collapse(&mut self, span: Span) -> SequenceResult<&mut Self> {
        let collapsed = self.extract(span)?;
        self.elements = collapsed.elements;
        Ok(self)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

/// Count-only equality.
///
/// Two sequences compare equal when their element *counts* match — a length
/// check disguised as equality, preserved as the container's documented
/// contract. Use [`Sequence::eq_elements`] for value equality.
impl PartialEq for Sequence {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Decimal;
    type IntoIter = std::slice::Iter<'a, Decimal>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Display
// ============================================================================

/// Space-separated elements inside brackets, with a line break after the
/// element at index 5.
impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.elements.iter().enumerate() {
            write!(f, "{}  ", element)?;
            if i == 5 {
                writeln!(f)?;
            }
        }
        write!(f, "]")
    }
}

// ============================================================================
// Tests
// ============================================================================
