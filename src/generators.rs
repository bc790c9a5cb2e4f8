// ============================================================================
// Progression Generators
// Arithmetic and geometric sequence construction
// ============================================================================

use crate::numeric::{SequenceError, SequenceResult, Value};
use crate::sequence::Sequence;
use rust_decimal::{Decimal, MathematicalOps};

/// Build an arithmetic progression of `count` values from `start` to `end`
/// inclusive.
///
/// The common difference is `(end - start) / (count - 1)`, computed in exact
/// decimal; element `i` is `start + difference * i`.
///
/// # Errors
/// - `InvalidArgument` when `count < 2` (a single-value progression has no
///   defined difference)
/// - `InvalidElement` / `Overflow` for endpoints with no exact decimal form
///
/// # Example
/// ```
/// use decseq::generators::arithmetic_range;
///
/// let seq = arithmetic_range(0, 3, 5)?;
/// assert_eq!(seq.to_string(), "[0.00  0.75  1.50  2.25  3.00  ]");
/// # Ok::<(), decseq::SequenceError>(())
/// ```
pub fn arithmetic_range(
    start: impl Into<Value>,
    end: impl Into<Value>,
    count: usize,
) -> SequenceResult<Sequence> {
    if count < 2 {
        return Err(SequenceError::InvalidArgument);
    }
    let start = start.into().to_decimal()?;
    let end = end.into().to_decimal()?;

    let difference = end
        .checked_sub(start)
        .and_then(|span| span.checked_div(Decimal::from(count as i64 - 1)))
        .ok_or(SequenceError::Overflow)?;
    tracing::debug!("arithmetic progression difference: {}", difference);

    let mut seq = Sequence::empty();
    for i in 0..count {
        let value = difference
            .checked_mul(Decimal::from(i as i64))
            .and_then(|offset| start.checked_add(offset))
            .ok_or(SequenceError::Overflow)?;
        seq.badd(value)?;
    }
    Ok(seq)
}

/// Build a geometric progression of `count` values from `start` to `end`
/// inclusive.
///
/// The common ratio is `(end / start) ^ (1 / (count - 1))`. The fractional
/// exponent is evaluated through a floating-point approximation - the one
/// place approximate arithmetic enters the otherwise exact-decimal pipeline.
/// Element `i` is `start * ratio^i`.
///
/// # Errors
/// - `InvalidArgument` when `start` is zero, when `count < 2`, or when the
///   ratio is undefined (negative `end / start` under a fractional exponent)
/// - `InvalidElement` / `Overflow` for endpoints with no exact decimal form
pub fn geometric_range(
    start: impl Into<Value>,
    end: impl Into<Value>,
    count: usize,
) -> SequenceResult<Sequence> {
    if count < 2 {
        return Err(SequenceError::InvalidArgument);
    }
    let start = start.into().to_decimal()?;
    let end = end.into().to_decimal()?;
    if start.is_zero() {
        return Err(SequenceError::InvalidArgument);
    }

    let quotient = end.checked_div(start).ok_or(SequenceError::Overflow)?;
    let ratio = quotient
        .checked_powf(1.0 / (count as f64 - 1.0))
        .ok_or(SequenceError::InvalidArgument)?;
    tracing::debug!("geometric progression ratio: {}", ratio);

    let mut seq = Sequence::empty();
    let mut value = start;
    for i in 0..count {
        if i > 0 {
            value = value.checked_mul(ratio).ok_or(SequenceError::Overflow)?;
        }
        seq.badd(value)?;
    }
    Ok(seq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_arithmetic_range_scenario() {
        let seq = arithmetic_range(0, 3, 5).unwrap();
        assert_eq!(seq.len(), 5);
        assert_eq!(
            seq.as_slice(),
            &[dec("0"), dec("0.75"), dec("1.50"), dec("2.25"), dec("3.00")]
        );
    }

    #[test]
    fn test_arithmetic_range_descending() {
        let seq = arithmetic_range(3, 0, 4).unwrap();
        assert_eq!(
            seq.as_slice(),
            &[dec("3"), dec("2"), dec("1"), dec("0")]
        );
    }

    #[test]
    fn test_arithmetic_range_exact_float_endpoints() {
        let seq = arithmetic_range(0.1, 0.3, 3).unwrap();
        assert_eq!(seq.as_slice(), &[dec("0.1"), dec("0.2"), dec("0.3")]);
    }

    #[test]
    fn test_arithmetic_range_degenerate_count() {
        assert_eq!(
            arithmetic_range(0, 3, 1),
            Err(SequenceError::InvalidArgument)
        );
        assert_eq!(
            arithmetic_range(0, 3, 0),
            Err(SequenceError::InvalidArgument)
        );
    }

    #[test]
    fn test_geometric_range_scenario() {
        // ratio = 3^(1/4) ~= 1.31607
        let seq = geometric_range(1, 3, 5).unwrap();
        assert_eq!(seq.len(), 5);

        let expected = [1.0_f64, 1.316074, 1.732051, 2.279507, 3.0];
        for (value, want) in seq.iter().zip(expected) {
            let got: f64 = value.to_string().parse().unwrap();
            assert!(
                (got - want).abs() < 1e-5,
                "got {} expected ~{}",
                got,
                want
            );
        }
    }

    #[test]
    fn test_geometric_range_zero_start_rejected() {
        assert_eq!(
            geometric_range(0, 3, 5),
            Err(SequenceError::InvalidArgument)
        );
    }

    #[test]
    fn test_geometric_range_degenerate_count() {
        assert_eq!(
            geometric_range(1, 3, 1),
            Err(SequenceError::InvalidArgument)
        );
    }

    #[test]
    fn test_geometric_range_powers_of_two() {
        let seq = geometric_range(1, 16, 5).unwrap();
        for (value, want) in seq.iter().zip([1, 2, 4, 8, 16]) {
            let got: f64 = value.to_string().parse().unwrap();
            assert!((got - want as f64).abs() < 1e-6);
        }
    }
}
