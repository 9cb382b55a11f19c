// ============================================================================
// Unit Scale
// Precision bounds, multipliers and cardinality limits
// ============================================================================

use super::errors::{DistributionError, DistributionResult};

/// Highest supported number of decimal places of a percentage.
pub const MAX_PRECISION: u32 = 12;

/// Hard cap on the number of elements, whatever the precision.
pub const MAX_ELEMENTS: usize = 1 << 24;

/// Float noise cutoff for negativity checks and for a zero weight sum.
pub const EPSILON: f64 = 1e-8;

/// Remainder below which a zero-unit element is left at zero.
pub const DEFAULT_THRESHOLD: f64 = 1e-3;

/// Coarser cutoff of the simple variant.
pub const SIMPLE_THRESHOLD: f64 = 1e-2;

/// Elements up to this count live on the stack.
pub const INLINE_ELEMENTS: usize = 128;

/// Compute 10^n at compile time
const fn pow10(n: u32) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// Reject precisions outside `0..=MAX_PRECISION`.
#[inline]
pub fn check_precision(precision: u32) -> DistributionResult<()> {
    if precision > MAX_PRECISION {
        Err(DistributionError::InvalidPrecision { precision })
    } else {
        Ok(())
    }
}

/// Total number of units that make up 100% at `precision` (`100 × 10^precision`).
///
/// Callers check the precision first; larger values saturate at `MAX_PRECISION`.
#[inline]
pub const fn multiplier(precision: u32) -> i64 {
    100 * unit_divisor(precision)
}

/// Units per whole percent (`10^precision`).
#[inline]
pub const fn unit_divisor(precision: u32) -> i64 {
    let precision = if precision > MAX_PRECISION {
        MAX_PRECISION
    } else {
        precision
    };
    pow10(precision)
}

/// Largest cardinality the unit space of `precision` supports.
///
/// `min(MAX_ELEMENTS, 10^(precision + 1) / 2)`: five elements at precision 0,
/// fifty at precision 1, and so on.
#[inline]
pub fn element_limit(precision: u32) -> usize {
    let limit = unit_divisor(precision) * 10 / 2;
    usize::try_from(limit).map_or(MAX_ELEMENTS, |limit| limit.min(MAX_ELEMENTS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier() {
        assert_eq!(multiplier(0), 100);
        assert_eq!(multiplier(2), 10_000);
        assert_eq!(multiplier(MAX_PRECISION), 100_000_000_000_000);
    }

    #[test]
    fn test_check_precision() {
        assert!(check_precision(0).is_ok());
        assert!(check_precision(MAX_PRECISION).is_ok());
        assert_eq!(
            check_precision(13),
            Err(DistributionError::InvalidPrecision { precision: 13 })
        );
    }

    #[test]
    fn test_element_limit() {
        assert_eq!(element_limit(0), 5);
        assert_eq!(element_limit(1), 50);
        assert_eq!(element_limit(3), 5_000);
        assert_eq!(element_limit(MAX_PRECISION), MAX_ELEMENTS);
    }
}
