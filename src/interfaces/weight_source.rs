// ============================================================================
// Weight Source Interface
// Defines the contract for containers that can be distributed
// ============================================================================

use crate::numeric::Weight;
use std::collections::{btree_map, hash_map, BTreeMap, HashMap};
use std::iter::{Copied, Enumerate, Map};
use std::slice;

/// A keyed collection of weights that can be iterated more than once.
///
/// The iteration order defines each key's position, and positions break
/// ties deterministically: earlier positions win leftover units and are
/// rescued first. Slices, `Vec`s and `BTreeMap`s have a fixed order;
/// a `HashMap` orders by its own iteration, which is stable per instance.
///
/// Implementations: `[W]`, `Vec<W>`, `[W; N]` (keys are positions),
/// `[(K, W)]`, `Vec<(K, W)>`, `HashMap<K, W, S>`, `BTreeMap<K, W>`.
pub trait WeightSource {
    type Key: Copy;
    type Weight: Weight;
    type Iter<'a>: Iterator<Item = (Self::Key, Self::Weight)>
    where
        Self: 'a;

    /// Number of weights, known before iterating
    fn weight_count(&self) -> usize;

    /// `(key, weight)` pairs in source order
    fn weights(&self) -> Self::Iter<'_>;
}

fn copy_entry<K: Copy, W: Copy>((key, weight): (&K, &W)) -> (K, W) {
    (*key, *weight)
}

impl<W: Weight> WeightSource for [W] {
    type Key = usize;
    type Weight = W;
    type Iter<'a>
        = Enumerate<Copied<slice::Iter<'a, W>>>
    where
        Self: 'a;

    fn weight_count(&self) -> usize {
        self.len()
    }

    fn weights(&self) -> Self::Iter<'_> {
        self.iter().copied().enumerate()
    }
}

impl<W: Weight> WeightSource for Vec<W> {
    type Key = usize;
    type Weight = W;
    type Iter<'a>
        = Enumerate<Copied<slice::Iter<'a, W>>>
    where
        Self: 'a;

    fn weight_count(&self) -> usize {
        self.len()
    }

    fn weights(&self) -> Self::Iter<'_> {
        self.as_slice().weights()
    }
}

impl<W: Weight, const N: usize> WeightSource for [W; N] {
    type Key = usize;
    type Weight = W;
    type Iter<'a>
        = Enumerate<Copied<slice::Iter<'a, W>>>
    where
        Self: 'a;

    fn weight_count(&self) -> usize {
        N
    }

    fn weights(&self) -> Self::Iter<'_> {
        self.as_slice().weights()
    }
}

impl<K: Copy, W: Weight> WeightSource for [(K, W)] {
    type Key = K;
    type Weight = W;
    type Iter<'a>
        = Copied<slice::Iter<'a, (K, W)>>
    where
        Self: 'a;

    fn weight_count(&self) -> usize {
        self.len()
    }

    fn weights(&self) -> Self::Iter<'_> {
        self.iter().copied()
    }
}

impl<K: Copy, W: Weight> WeightSource for Vec<(K, W)> {
    type Key = K;
    type Weight = W;
    type Iter<'a>
        = Copied<slice::Iter<'a, (K, W)>>
    where
        Self: 'a;

    fn weight_count(&self) -> usize {
        self.len()
    }

    fn weights(&self) -> Self::Iter<'_> {
        self.iter().copied()
    }
}

impl<K: Copy, W: Weight, S> WeightSource for HashMap<K, W, S> {
    type Key = K;
    type Weight = W;
    type Iter<'a>
        = Map<hash_map::Iter<'a, K, W>, fn((&'a K, &'a W)) -> (K, W)>
    where
        Self: 'a;

    fn weight_count(&self) -> usize {
        self.len()
    }

    fn weights(&self) -> Self::Iter<'_> {
        self.iter().map(copy_entry as fn(_) -> _)
    }
}

impl<K: Copy, W: Weight> WeightSource for BTreeMap<K, W> {
    type Key = K;
    type Weight = W;
    type Iter<'a>
        = Map<btree_map::Iter<'a, K, W>, fn((&'a K, &'a W)) -> (K, W)>
    where
        Self: 'a;

    fn weight_count(&self) -> usize {
        self.len()
    }

    fn weights(&self) -> Self::Iter<'_> {
        self.iter().map(copy_entry as fn(_) -> _)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_sources() {
        let weights = vec![3i32, 0, 7];
        assert_eq!(weights.weight_count(), 3);
        assert_eq!(weights.weights().collect::<Vec<_>>(), vec![(0, 3), (1, 0), (2, 7)]);

        let array = [1.5f64, 2.5];
        assert_eq!(array.weight_count(), 2);
        assert_eq!(array.weights().collect::<Vec<_>>(), vec![(0, 1.5), (1, 2.5)]);
    }

    #[test]
    fn test_keyed_sources() {
        let pairs = [('a', 10i64), ('b', 20)];
        assert_eq!(pairs[..].weights().collect::<Vec<_>>(), pairs.to_vec());

        let tree: BTreeMap<u8, i64> = [(2, 5), (1, 4)].into_iter().collect();
        assert_eq!(tree.weights().collect::<Vec<_>>(), vec![(1, 4), (2, 5)]);

        let map: HashMap<u8, i32> = [(1, 4), (2, 5)].into_iter().collect();
        let mut entries: Vec<_> = map.weights().collect();
        entries.sort_unstable();
        assert_eq!(entries, vec![(1, 4), (2, 5)]);
        assert_eq!(map.weight_count(), 2);
    }
}
