// ============================================================================
// Fraction Initializer
// Scales weights into unit space and splits whole units from remainders
// ============================================================================

use crate::domain::{Element, WorkingSet};
use crate::numeric::Weight;

/// Fill `elements` with one entry per weight and return the leftover units.
///
/// Each weight becomes `fraction = weight * multiplier / sum`, computed in
/// `f64` whatever the weight type. The leftover is counted in integers as
/// `multiplier - Σ units`: with many weights the `f64` fractions no longer
/// add up to `multiplier` exactly, so it may exceed the element count or be
/// negative.
pub(crate) fn init_elements<K, W: Weight>(
    weights: impl Iterator<Item = (K, W)>,
    multiplier: i64,
    sum: f64,
    elements: &mut WorkingSet<K>,
) -> i64 {
    let scale = multiplier as f64;
    let mut truncated: i64 = 0;

    for (index, (key, weight)) in weights.enumerate() {
        let fraction = weight.into_value().as_f64() * scale / sum;
        let element = Element::new(key, index, fraction);
        truncated += element.units;
        elements.push(element);
    }

    multiplier - truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::WeightSource;

    #[test]
    fn test_truncation_and_leftover() {
        let weights = [146i64, 123, 323, 982, 457];
        let mut elements = WorkingSet::new();

        let leftover = init_elements(weights.weights(), 100, 2031.0, &mut elements);

        let units: Vec<_> = elements.iter().map(|e| e.units).collect();
        assert_eq!(units, vec![7, 6, 15, 48, 22]);
        assert_eq!(leftover, 2);
        assert!(elements.iter().all(|e| (0.0..1.0).contains(&e.remainder)));
    }

    #[test]
    fn test_positions_follow_source_order() {
        let weights = vec![('x', 1i32), ('y', 1), ('z', 2)];
        let mut elements = WorkingSet::new();

        let leftover = init_elements(weights.weights(), 100, 4.0, &mut elements);

        assert_eq!(leftover, 0);
        let placed: Vec<_> = elements.iter().map(|e| (e.key, e.index, e.units)).collect();
        assert_eq!(placed, vec![('x', 0, 25), ('y', 1, 25), ('z', 2, 50)]);
    }

    #[test]
    fn test_large_integer_weights_do_not_overflow() {
        let weights = [i64::MAX / 2, i64::MAX / 2];
        let mut elements = WorkingSet::new();
        let sum = weights.iter().map(|w| *w as f64).sum();

        let leftover = init_elements(weights.weights(), 10_000, sum, &mut elements);

        let total: i64 = elements.iter().map(|e| e.units).sum::<i64>() + leftover;
        assert_eq!(total, 10_000);
    }

    #[test]
    fn test_leftover_counted_in_integers() {
        // An understated sum scales every share past the multiplier.
        let weights = [1i64, 1];
        let mut elements = WorkingSet::new();

        let leftover = init_elements(weights.weights(), 100, 1.0, &mut elements);

        assert_eq!(leftover, -100);
        assert_eq!(elements.iter().map(|e| e.units).sum::<i64>() + leftover, 100);
    }
}
