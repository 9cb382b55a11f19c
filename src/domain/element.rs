// ============================================================================
// Distribution Element
// One working entry per input key
// ============================================================================

use crate::numeric::INLINE_ELEMENTS;
use smallvec::SmallVec;
use std::cmp::Ordering;

/// Working state for one key during a single allocation.
///
/// `units` starts at `trunc(fraction)` and `remainder` holds the lost
/// fraction, so `0 <= remainder < 1` and `units >= 0` at all times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element<K> {
    /// Caller's key, never mutated
    pub key: K,
    /// Position in the source's iteration order, the final tie-break
    pub index: usize,
    /// Whole units currently assigned
    pub units: i64,
    /// Fraction lost to truncation
    pub remainder: f64,
}

/// Working set of one allocation: inline up to `INLINE_ELEMENTS`, heap above.
pub type WorkingSet<K> = SmallVec<[Element<K>; INLINE_ELEMENTS]>;

impl<K> Element<K> {
    /// Split a scaled share into whole units and remainder.
    #[inline]
    pub fn new(key: K, index: usize, fraction: f64) -> Self {
        let whole = fraction.trunc();
        Self {
            key,
            index,
            units: whole as i64,
            remainder: fraction - whole,
        }
    }

    /// Order in which leftover units are handed out.
    ///
    /// Largest remainder first, then fewer units, then earlier position.
    #[inline]
    pub fn leftover_order(a: &Self, b: &Self) -> Ordering {
        b.remainder
            .total_cmp(&a.remainder)
            .then_with(|| a.units.cmp(&b.units))
            .then_with(|| a.index.cmp(&b.index))
    }

    /// Ascending order used by the zero-share rebalancer.
    ///
    /// Fewer units first, then smaller remainder, then later position, so
    /// that scanning from either end meets earlier positions first among ties.
    #[inline]
    pub fn rebalance_order(a: &Self, b: &Self) -> Ordering {
        a.units
            .cmp(&b.units)
            .then_with(|| a.remainder.total_cmp(&b.remainder))
            .then_with(|| b.index.cmp(&a.index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split() {
        let element = Element::new('a', 0, 7.25);
        assert_eq!(element.units, 7);
        assert_eq!(element.remainder, 0.25);

        let zero = Element::new('b', 1, 0.0);
        assert_eq!(zero.units, 0);
        assert_eq!(zero.remainder, 0.0);
    }

    #[test]
    fn test_leftover_order() {
        let mut elements = vec![
            Element::new(0, 0, 1.25),
            Element::new(1, 1, 3.75),
            Element::new(2, 2, 0.75),
            Element::new(3, 3, 0.75),
        ];
        elements.sort_unstable_by(Element::leftover_order);

        let keys: Vec<_> = elements.iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![2, 3, 1, 0]);
    }

    #[test]
    fn test_rebalance_order() {
        let mut elements = vec![
            Element::new(0, 0, 5.0),
            Element::new(1, 1, 0.5),
            Element::new(2, 2, 5.0),
            Element::new(3, 3, 0.25),
        ];
        elements.sort_unstable_by(Element::rebalance_order);

        let keys: Vec<_> = elements.iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![3, 1, 2, 0]);
    }
}
