// ============================================================================
// Distribution
// Finished allocation: whole units per key at a fixed precision
// ============================================================================

use crate::numeric::scale::{multiplier, unit_divisor};
use crate::numeric::{DistributionError, DistributionResult};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rounded distribution of a set of weights.
///
/// Entries keep the source's iteration order. Unless every weight was zero,
/// the units sum to exactly `multiplier()`.
///
/// # Example
/// ```
/// use rounded_distribution::prelude::*;
///
/// let distributor = RoundedDistributor::new(DistributionConfig::percent(1));
/// let distribution = distributor.allocate(&[146i64, 123, 323, 982, 457][..]).unwrap();
///
/// assert_eq!(distribution.total_units(), 1000);
/// let percents: Vec<f64> = distribution.percents().map(|(_, p)| p).collect();
/// assert_eq!(percents, vec![7.2, 6.1, 15.9, 48.3, 22.5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Distribution<K> {
    entries: Vec<(K, i64)>,
    precision: u32,
}

impl<K: Copy> Distribution<K> {
    pub(crate) fn from_units(entries: Vec<(K, i64)>, precision: u32) -> Self {
        Self { entries, precision }
    }

    /// Every key at zero units (all weights were zero).
    pub(crate) fn zeroed(keys: impl Iterator<Item = K>, precision: u32) -> Self {
        Self {
            entries: keys.map(|key| (key, 0)).collect(),
            precision,
        }
    }

    /// Decimal places of a percentage.
    #[inline]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Units that make up 100%.
    #[inline]
    pub fn multiplier(&self) -> i64 {
        multiplier(self.precision)
    }

    /// Divisor turning units into the requested representation.
    #[inline]
    pub fn effective_multiplier(&self, as_percent: bool) -> f64 {
        if as_percent {
            unit_divisor(self.precision) as f64
        } else {
            self.multiplier() as f64
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_units(&self) -> i64 {
        self.entries.iter().map(|(_, units)| units).sum()
    }

    /// Units assigned to `key`, if present.
    pub fn units_of(&self, key: &K) -> Option<i64>
    where
        K: PartialEq,
    {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, units)| *units)
    }

    /// `(key, units)` pairs in source order.
    pub fn iter_units(&self) -> impl Iterator<Item = (K, i64)> + '_ {
        self.entries.iter().copied()
    }

    /// Shares in `[0, 1]`.
    pub fn fractions(&self) -> impl Iterator<Item = (K, f64)> + '_ {
        self.values(false)
    }

    /// Shares in `[0, 100]`.
    pub fn percents(&self) -> impl Iterator<Item = (K, f64)> + '_ {
        self.values(true)
    }

    /// Shares as fractions or percents.
    pub fn values(&self, as_percent: bool) -> impl Iterator<Item = (K, f64)> + '_ {
        let divisor = self.effective_multiplier(as_percent);
        self.entries
            .iter()
            .map(move |&(key, units)| (key, units as f64 / divisor))
    }

    /// Whole percents.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` unless the distribution was built at
    /// precision 0, where units and percents coincide.
    pub fn integer_percents(&self) -> DistributionResult<Vec<(K, i64)>> {
        if self.precision != 0 {
            return Err(DistributionError::InvalidPrecision {
                precision: self.precision,
            });
        }
        Ok(self.entries.clone())
    }

    /// Exact fixed-point values, free of binary rounding.
    ///
    /// Percents carry `precision` decimal places, fractions two more.
    pub fn decimals(&self, as_percent: bool) -> Vec<(K, Decimal)> {
        let scale = if as_percent {
            self.precision
        } else {
            self.precision + 2
        };
        self.entries
            .iter()
            .map(|&(key, units)| (key, Decimal::new(units, scale)))
            .collect()
    }
}

impl<K: Copy> IntoIterator for Distribution<K> {
    type Item = (K, i64);
    type IntoIter = std::vec::IntoIter<(K, i64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
