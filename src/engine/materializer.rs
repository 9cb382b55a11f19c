// ============================================================================
// Materializer
// Turns final units into a distribution and writes it out
// ============================================================================

use crate::domain::{Distribution, WorkingSet};
use crate::interfaces::DistributionSink;

/// Consume the working set, restoring source order.
pub(crate) fn collect<K: Copy>(mut elements: WorkingSet<K>, precision: u32) -> Distribution<K> {
    elements.sort_unstable_by_key(|e| e.index);
    Distribution::from_units(
        elements.iter().map(|e| (e.key, e.units)).collect(),
        precision,
    )
}

/// Write `mapper(units / effective_multiplier)` for every key.
///
/// The sink must already have been prepared with `reserve_for`.
pub(crate) fn write<K, R, O, F>(
    distribution: &Distribution<K>,
    as_percent: bool,
    sink: &mut O,
    mut mapper: F,
) where
    K: Copy,
    O: DistributionSink<K, R> + ?Sized,
    F: FnMut(f64) -> R,
{
    for (key, value) in distribution.values(as_percent) {
        sink.put(key, mapper(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Element;
    use std::collections::BTreeMap;

    #[test]
    fn test_collect_restores_order() {
        let elements: WorkingSet<char> = [
            Element { key: 'c', index: 2, units: 50, remainder: 0.0 },
            Element { key: 'a', index: 0, units: 20, remainder: 0.0 },
            Element { key: 'b', index: 1, units: 30, remainder: 0.0 },
        ]
        .into_iter()
        .collect();

        let distribution = collect(elements, 0);

        assert_eq!(
            distribution.iter_units().collect::<Vec<_>>(),
            vec![('a', 20), ('b', 30), ('c', 50)]
        );
    }

    #[test]
    fn test_write_with_mapper() {
        let distribution = Distribution::from_units(vec![('a', 125), ('b', 875)], 1);
        let mut output: BTreeMap<char, i64> = BTreeMap::new();

        write(&distribution, true, &mut output, |value| value.floor() as i64);

        assert_eq!(output.get(&'a'), Some(&12));
        assert_eq!(output.get(&'b'), Some(&87));
    }

    #[test]
    fn test_write_fractions() {
        let distribution = Distribution::from_units(vec![(0usize, 25), (1, 75)], 0);
        let mut output = vec![0.0; 2];

        write(&distribution, false, output.as_mut_slice(), |value| value);

        assert_eq!(output, vec![0.25, 0.75]);
    }
}
