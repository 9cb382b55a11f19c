// ============================================================================
// Rounded Distributor
// Core pipeline: validate, split, allocate, rebalance, materialize
// ============================================================================

use crate::domain::{Distribution, DistributionConfig, WorkingSet};
use crate::engine::{fraction, largest_remainder, materializer, rebalancer, validator};
use crate::interfaces::{DistributionSink, WeightSource};
use crate::numeric::scale::multiplier;
use crate::numeric::{DistributionResult, EPSILON};
use std::collections::HashMap;
use std::hash::Hash;

/// Rounded distribution engine.
///
/// Holds only its configuration; every call owns a private working set, so
/// one distributor can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RoundedDistributor {
    config: DistributionConfig,
}

impl RoundedDistributor {
    /// Create a new distributor
    pub fn new(config: DistributionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DistributionConfig {
        &self.config
    }

    /// Allocate whole units to every key of `source`.
    ///
    /// # Errors
    /// Any validation error, or `AllocationInvariantViolated` if the units do
    /// not add up (an internal defect).
    pub fn allocate<S>(&self, source: &S) -> DistributionResult<Distribution<S::Key>>
    where
        S: WeightSource + ?Sized,
    {
        self.config.validate()?;

        let precision = self.config.precision;
        let count = source.weight_count();
        let sum = validator::validate_and_sum(
            source.weights(),
            count,
            precision,
            self.config.element_limit(),
        )?;

        if sum < EPSILON {
            tracing::debug!(count, precision, "zero total weight, every share is zero");
            return Ok(Distribution::zeroed(source.weights().map(|(key, _)| key), precision));
        }

        let multiplier = multiplier(precision);
        let mut elements: WorkingSet<S::Key> = WorkingSet::with_capacity(count);
        let leftover = fraction::init_elements(source.weights(), multiplier, sum, &mut elements);
        tracing::debug!(count, precision, sum, leftover, "scaled weights to units");

        largest_remainder::assign_leftover(&mut elements, leftover);

        let outcome = rebalancer::rescue_zero_shares(&mut elements, self.config.threshold);
        if outcome.unresolved > 0 {
            tracing::warn!(
                unresolved = outcome.unresolved,
                count,
                multiplier,
                "not enough units to give every non-negligible share one unit"
            );
        } else if outcome.rescued > 0 {
            tracing::debug!(rescued = outcome.rescued, "rescued zero shares");
        }

        rebalancer::verify_total(&elements, multiplier)?;

        Ok(materializer::collect(elements, precision))
    }

    /// Allocate and materialize into a new `HashMap`.
    pub fn distribute<S>(&self, source: &S) -> DistributionResult<HashMap<S::Key, f64>>
    where
        S: WeightSource + ?Sized,
        S::Key: Eq + Hash,
    {
        let mut output = HashMap::new();
        self.distribute_into(source, &mut output, |value| value)?;
        Ok(output)
    }

    /// Allocate and write `mapper(value)` for every key into `sink`.
    ///
    /// Nothing is written unless allocation succeeds and the sink can hold
    /// every key.
    pub fn distribute_into<S, O, R, F>(
        &self,
        source: &S,
        sink: &mut O,
        mapper: F,
    ) -> DistributionResult<()>
    where
        S: WeightSource + ?Sized,
        O: DistributionSink<S::Key, R> + ?Sized,
        F: FnMut(f64) -> R,
    {
        let distribution = self.allocate(source)?;
        sink.reserve_for(&distribution)?;
        materializer::write(&distribution, self.config.as_percent, sink, mapper);
        Ok(())
    }
}
