// ============================================================================
// Broadcast Arithmetic
// Tagged operand dispatch and checked elementwise operations
// ============================================================================
//
// Every binary operation follows one dispatch policy on the operand:
// - Scalar: replicated across all positions
// - Values (positional collection): paired by index, lengths must match
// - Sequence: paired by index, lengths must match
//
// The checked_* methods have value semantics: they validate the whole
// operand (conversion + length) before computing, produce a new sequence
// and leave both operands untouched. In-place mutation is available through
// the std::ops assign operators in `ops.rs`, which replace the receiver only
// after the checked computation succeeds.

use super::core::{Elements, Sequence};
use crate::numeric::{SequenceError, SequenceResult, Value};
use rust_decimal::{Decimal, MathematicalOps};

// ============================================================================
// Operand
// ============================================================================

/// A broadcast operand: a scalar, a positional collection, or a sequence.
#[derive(Debug, Clone)]
pub enum Operand {
    /// A single number, replicated across every position
    Scalar(Value),
    /// A plain ordered collection of numbers, paired by index
    Values(Vec<Value>),
    /// Another sequence, paired by index
    Sequence(Sequence),
}

impl Operand {
    /// Convert into a run of validated decimals for insertion.
    ///
    /// A scalar becomes a run of one. Collection elements validate
    /// individually as element values.
    pub(crate) fn into_run(self) -> SequenceResult<Vec<Decimal>> {
        match self {
            Operand::Scalar(v) => Ok(vec![v.to_operand_decimal()?]),
            Operand::Values(vs) => vs.into_iter().map(Value::to_decimal).collect(),
            Operand::Sequence(s) => Ok(s.as_slice().to_vec()),
        }
    }

    /// Resolve against a receiver of `len` elements for elementwise pairing.
    fn resolve(&self, len: usize) -> SequenceResult<Resolved> {
        match self {
            Operand::Scalar(v) => Ok(Resolved::Scalar(v.to_operand_decimal()?)),
            Operand::Values(vs) => {
                if vs.len() != len {
                    return Err(SequenceError::LengthMismatch {
                        left: len,
                        right: vs.len(),
                    });
                }
                let paired = vs
                    .iter()
                    .map(|v| v.to_operand_decimal())
                    .collect::<SequenceResult<Vec<Decimal>>>()?;
                Ok(Resolved::Paired(paired))
            },
            Operand::Sequence(s) => {
                if s.len() != len {
                    return Err(SequenceError::LengthMismatch {
                        left: len,
                        right: s.len(),
                    });
                }
                Ok(Resolved::Paired(s.as_slice().to_vec()))
            },
        }
    }
}

/// An operand after conversion and length validation.
enum Resolved {
    Scalar(Decimal),
    Paired(Vec<Decimal>),
}

impl Resolved {
    #[inline]
    fn value_at(&self, i: usize) -> Decimal {
        match self {
            Resolved::Scalar(d) => *d,
            Resolved::Paired(vs) => vs[i],
        }
    }
}

// ============================================================================
// Operand Conversions
// ============================================================================

impl From<i64> for Operand {
    fn from(v: i64) -> Self {
        Operand::Scalar(v.into())
    }
}

impl From<i32> for Operand {
    fn from(v: i32) -> Self {
        Operand::Scalar(v.into())
    }
}

impl From<u32> for Operand {
    fn from(v: u32) -> Self {
        Operand::Scalar(v.into())
    }
}

impl From<f64> for Operand {
    fn from(v: f64) -> Self {
        Operand::Scalar(v.into())
    }
}

impl From<Decimal> for Operand {
    fn from(v: Decimal) -> Self {
        Operand::Scalar(v.into())
    }
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        Operand::Scalar(v)
    }
}

impl<T: Into<Value> + Copy> From<Vec<T>> for Operand {
    fn from(vs: Vec<T>) -> Self {
        Operand::Values(vs.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Copy> From<&[T]> for Operand {
    fn from(vs: &[T]) -> Self {
        Operand::Values(vs.iter().map(|v| (*v).into()).collect())
    }
}

impl From<Sequence> for Operand {
    fn from(s: Sequence) -> Self {
        Operand::Sequence(s)
    }
}

impl From<&Sequence> for Operand {
    fn from(s: &Sequence) -> Self {
        Operand::Sequence(s.clone())
    }
}

// ============================================================================
// Elementwise Primitives
// ============================================================================

#[inline]
fn add(a: Decimal, b: Decimal) -> SequenceResult<Decimal> {
    a.checked_add(b).ok_or(SequenceError::Overflow)
}

#[inline]
fn sub(a: Decimal, b: Decimal) -> SequenceResult<Decimal> {
    a.checked_sub(b).ok_or(SequenceError::Overflow)
}

#[inline]
fn mul(a: Decimal, b: Decimal) -> SequenceResult<Decimal> {
    a.checked_mul(b).ok_or(SequenceError::Overflow)
}

#[inline]
fn div(a: Decimal, b: Decimal) -> SequenceResult<Decimal> {
    if b.is_zero() {
        return Err(SequenceError::DivisionByZero);
    }
    a.checked_div(b).ok_or(SequenceError::Overflow)
}

#[inline]
fn pow(a: Decimal, b: Decimal) -> SequenceResult<Decimal> {
    a.checked_powd(b).ok_or(SequenceError::Overflow)
}

// ============================================================================
// Checked Broadcast Operations
// ============================================================================

impl Sequence {
    /// Validate the operand, then compute `op(element, operand)` for every
    /// position. Nothing is written before validation completes.
    fn broadcast<F>(&self, rhs: &Operand, op: F) -> SequenceResult<Sequence>
    where
        F: Fn(Decimal, Decimal) -> SequenceResult<Decimal>,
    {
        let resolved = rhs.resolve(self.len())?;
        let elements = self
            .iter()
            .enumerate()
            .map(|(i, &e)| op(e, resolved.value_at(i)))
            .collect::<SequenceResult<Elements>>()?;
        Ok(Sequence::from_elements(elements))
    }

    /// Elementwise addition: `element + operand`.
    ///
    /// # Errors
    /// - `LengthMismatch` for a collection/sequence operand of another length
    /// - `UnsupportedOperand` for a scalar with no exact decimal form
    /// - `Overflow` when a result leaves the decimal range
    pub fn checked_add(&self, rhs: impl Into<Operand>) -> SequenceResult<Sequence> {
        self.broadcast(&rhs.into(), add)
    }

    /// Elementwise subtraction: `element - operand`.
    pub fn checked_sub(&self, rhs: impl Into<Operand>) -> SequenceResult<Sequence> {
        self.broadcast(&rhs.into(), sub)
    }

    /// Elementwise multiplication: `element * operand`.
    pub fn checked_mul(&self, rhs: impl Into<Operand>) -> SequenceResult<Sequence> {
        self.broadcast(&rhs.into(), mul)
    }

    /// Elementwise division: `element / operand`.
    ///
    /// # Errors
    /// `DivisionByZero` when any operand value is zero, plus the usual
    /// dispatch errors.
    pub fn checked_div(&self, rhs: impl Into<Operand>) -> SequenceResult<Sequence> {
        self.broadcast(&rhs.into(), div)
    }

    /// Elementwise exponentiation: `element ^ operand`.
    pub fn checked_pow(&self, rhs: impl Into<Operand>) -> SequenceResult<Sequence> {
        self.broadcast(&rhs.into(), pow)
    }

    /// Reflected addition: `operand + element`. Commutes with
    /// [`checked_add`](Self::checked_add).
    pub fn checked_radd(&self, lhs: impl Into<Operand>) -> SequenceResult<Sequence> {
        self.broadcast(&lhs.into(), |e, o| add(o, e))
    }

    /// Reflected subtraction: `operand - element`, the distinct
    /// non-commuted formula.
    pub fn checked_rsub(&self, lhs: impl Into<Operand>) -> SequenceResult<Sequence> {
        self.broadcast(&lhs.into(), |e, o| sub(o, e))
    }

    /// Reflected multiplication: `operand * element`. Commutes with
    /// [`checked_mul`](Self::checked_mul).
    pub fn checked_rmul(&self, lhs: impl Into<Operand>) -> SequenceResult<Sequence> {
        self.broadcast(&lhs.into(), |e, o| mul(o, e))
    }

    /// Reflected division: `operand / element`, the distinct non-commuted
    /// formula.
    pub fn checked_rdiv(&self, lhs: impl Into<Operand>) -> SequenceResult<Sequence> {
        self.broadcast(&lhs.into(), |e, o| div(o, e))
    }

    /// Reflected exponentiation: `operand ^ element`.
    pub fn checked_rpow(&self, lhs: impl Into<Operand>) -> SequenceResult<Sequence> {
        self.broadcast(&lhs.into(), |e, o| pow(o, e))
    }

    /// Infallible exponentiation, the operator Rust cannot spell as `**`.
    ///
    /// # Panics
    /// On any dispatch or computation failure — use
    /// [`checked_pow`](Self::checked_pow) to handle errors.
    pub fn pow(&self, rhs: impl Into<Operand>) -> Sequence {
        self.checked_pow(rhs).expect("sequence exponentiation failed")
    }
}

// ============================================================================
// Tests
// ============================================================================
