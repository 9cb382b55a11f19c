// ============================================================================
// Distribution Sink Interface
// Defines the contract for containers that receive materialized values
// ============================================================================

use crate::domain::Distribution;
use crate::numeric::{DistributionError, DistributionResult};
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Output container for a materialized distribution.
///
/// `reserve_for` runs before the first `put` and is the only place a sink may
/// fail, so a rejected call never leaves a partially written buffer.
pub trait DistributionSink<K: Copy, R> {
    /// Prepare room for every key of `distribution`.
    fn reserve_for(&mut self, distribution: &Distribution<K>) -> DistributionResult<()>;

    /// Store the value of one key.
    fn put(&mut self, key: K, value: R);
}

impl<K: Copy + Eq + Hash, R, S: BuildHasher> DistributionSink<K, R> for HashMap<K, R, S> {
    fn reserve_for(&mut self, distribution: &Distribution<K>) -> DistributionResult<()> {
        self.reserve(distribution.len());
        Ok(())
    }

    fn put(&mut self, key: K, value: R) {
        self.insert(key, value);
    }
}

impl<K: Copy + Ord, R> DistributionSink<K, R> for BTreeMap<K, R> {
    fn reserve_for(&mut self, _distribution: &Distribution<K>) -> DistributionResult<()> {
        Ok(())
    }

    fn put(&mut self, key: K, value: R) {
        self.insert(key, value);
    }
}

/// Highest positional key plus one, `None` if that does not fit a `usize`.
fn required_slots(distribution: &Distribution<usize>) -> Option<usize> {
    distribution
        .iter_units()
        .try_fold(0usize, |required, (key, _)| Some(required.max(key.checked_add(1)?)))
}

/// Pre-sized buffer indexed by position.
impl<R> DistributionSink<usize, R> for [R] {
    fn reserve_for(&mut self, distribution: &Distribution<usize>) -> DistributionResult<()> {
        match required_slots(distribution) {
            Some(required) if required <= self.len() => Ok(()),
            required => Err(DistributionError::BufferTooSmall {
                required: required.unwrap_or(usize::MAX),
                available: self.len(),
            }),
        }
    }

    fn put(&mut self, key: usize, value: R) {
        self[key] = value;
    }
}

/// Growable buffer indexed by position; missing slots are filled with defaults.
impl<R: Default> DistributionSink<usize, R> for Vec<R> {
    fn reserve_for(&mut self, distribution: &Distribution<usize>) -> DistributionResult<()> {
        let required = required_slots(distribution).ok_or(DistributionError::BufferTooSmall {
            required: usize::MAX,
            available: self.len(),
        })?;
        if self.len() < required {
            self.resize_with(required, R::default);
        }
        Ok(())
    }

    fn put(&mut self, key: usize, value: R) {
        self[key] = value;
    }
}
