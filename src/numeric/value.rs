// ============================================================================
// Numeric Input Values
// Conversion of plain numbers into exact decimal form via their string form
// ============================================================================

use super::errors::{SequenceError, SequenceResult};
use rust_decimal::Decimal;
use std::str::FromStr;

/// A plain numeric input value, prior to exact-decimal conversion.
///
/// Covers the scalar input types a sequence accepts in element or operand
/// position. Conversion to [`Decimal`] goes through the value's canonical
/// string form, so binary floating-point representation artifacts never
/// enter the exact-decimal domain: `0.1_f64` becomes exactly `0.1`, not
/// `0.1000000000000000055511151231257827`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Decimal(Decimal),
}

impl Value {
    /// Convert to an exact decimal.
    ///
    /// Integers and decimals convert losslessly. Floats are rendered through
    /// their shortest round-trip string representation and re-parsed as a
    /// decimal literal.
    ///
    /// # Errors
    /// - `InvalidElement` for non-finite floats (`NaN`, `±inf`)
    /// - `Overflow` for finite values beyond the decimal range
    pub fn to_decimal(self) -> SequenceResult<Decimal> {
        match self {
            Value::Int(i) => Ok(Decimal::from(i)),
            Value::Decimal(d) => Ok(d),
            Value::Float(f) => {
                if !f.is_finite() {
                    return Err(SequenceError::InvalidElement);
                }
                Decimal::from_str(&f.to_string()).map_err(|_| SequenceError::Overflow)
            },
        }
    }

    /// Convert to an exact decimal in operand position.
    ///
    /// Same conversion as [`to_decimal`](Self::to_decimal), but a value that
    /// cannot be recognized as exact decimal reports `UnsupportedOperand`
    /// rather than `InvalidElement`.
    pub fn to_operand_decimal(self) -> SequenceResult<Decimal> {
        self.to_decimal().map_err(|e| match e {
            SequenceError::InvalidElement => SequenceError::UnsupportedOperand,
            other => other,
        })
    }
}

impl From<i64> for Value {
    #[inline]
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    #[inline]
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<u32> for Value {
    #[inline]
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Decimal> for Value {
    #[inline]
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}
