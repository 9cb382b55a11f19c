// ============================================================================
// Validator
// Rejects unusable input and streams the weight sum
// ============================================================================

use crate::numeric::scale::check_precision;
use crate::numeric::{DistributionError, DistributionResult, Weight};

/// Validate the input and return the sum of all weights.
///
/// Checks run cheapest first: precision, then cardinality against `limit`,
/// then one streaming pass over the weights for negativity and finiteness.
/// Nothing is buffered.
///
/// # Errors
/// - `InvalidPrecision` when `precision > MAX_PRECISION`
/// - `TooManyElements` when `cardinality > limit`
/// - `NegativeWeight` for the first weight below zero
/// - `InvalidInput` for a NaN or infinite weight, or an infinite sum
pub(crate) fn validate_and_sum<K, W: Weight>(
    weights: impl Iterator<Item = (K, W)>,
    cardinality: usize,
    precision: u32,
    limit: usize,
) -> DistributionResult<f64> {
    check_precision(precision)?;

    if cardinality > limit {
        return Err(DistributionError::TooManyElements {
            count: cardinality,
            limit,
        });
    }

    let mut sum = 0.0;
    for (position, (_, weight)) in weights.enumerate() {
        let value = weight.into_value();
        if !value.is_finite() {
            return Err(DistributionError::InvalidInput);
        }
        if value.is_negative() {
            return Err(DistributionError::NegativeWeight { position });
        }
        sum += value.as_f64();
    }

    if !sum.is_finite() {
        return Err(DistributionError::InvalidInput);
    }

    Ok(sum)
}
