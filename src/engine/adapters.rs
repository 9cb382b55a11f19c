// ============================================================================
// Adapters
// Thin wrappers over the distributor for common input and output shapes
// ============================================================================

use crate::domain::DistributionConfig;
use crate::engine::RoundedDistributor;
use crate::interfaces::WeightSource;
use crate::numeric::{DistributionResult, Weight, WeightValue};
use std::any::Any;
use std::collections::HashMap;
use std::hash::Hash;

// ============================================================================
// Keyed Sources
// ============================================================================

/// Percent values per key at `precision`.
///
/// # Example
/// ```
/// use rounded_distribution::engine::adapters::distribute;
/// use std::collections::BTreeMap;
///
/// let weights: BTreeMap<&str, i64> = [("a", 1), ("b", 1), ("c", 1)].into_iter().collect();
/// let percents = distribute(&weights, 0).unwrap();
///
/// assert_eq!(percents["a"] + percents["b"] + percents["c"], 100.0);
/// assert_eq!(percents["a"], 34.0);
/// ```
pub fn distribute<S>(source: &S, precision: u32) -> DistributionResult<HashMap<S::Key, f64>>
where
    S: WeightSource + ?Sized,
    S::Key: Eq + Hash,
{
    RoundedDistributor::new(DistributionConfig::percent(precision)).distribute(source)
}

/// Values per key under `config`, each passed through `mapper`.
pub fn distribute_with<S, R, F>(
    source: &S,
    config: &DistributionConfig,
    mapper: F,
) -> DistributionResult<HashMap<S::Key, R>>
where
    S: WeightSource + ?Sized,
    S::Key: Eq + Hash,
    F: FnMut(f64) -> R,
{
    let mut output = HashMap::new();
    RoundedDistributor::new(*config).distribute_into(source, &mut output, mapper)?;
    Ok(output)
}

/// Whole percents per key (precision 0, truncated).
pub fn integer_percents<S>(source: &S) -> DistributionResult<HashMap<S::Key, i64>>
where
    S: WeightSource + ?Sized,
    S::Key: Eq + Hash,
{
    distribute_with(source, &DistributionConfig::percent(0), |value| value as i64)
}

// ============================================================================
// Positional Sources
// ============================================================================

/// Values in input order.
pub fn distribute_list<W: Weight>(
    weights: &[W],
    precision: u32,
    as_percent: bool,
) -> DistributionResult<Vec<f64>> {
    let mut output = vec![0.0; weights.len()];
    distribute_into_slice(weights, &mut output, precision, as_percent)?;
    Ok(output)
}

/// Values written into a caller-supplied buffer at each weight's position.
///
/// # Errors
/// `BufferTooSmall` when `output` is shorter than `weights`; the buffer is
/// then left untouched.
pub fn distribute_into_slice<W: Weight>(
    weights: &[W],
    output: &mut [f64],
    precision: u32,
    as_percent: bool,
) -> DistributionResult<()> {
    RoundedDistributor::new(DistributionConfig::new(precision, as_percent)).distribute_into(
        weights,
        output,
        |value| value,
    )
}

/// Whole percents in input order (precision 0, truncated).
pub fn integer_percents_list<W: Weight>(weights: &[W]) -> DistributionResult<Vec<i64>> {
    let mut output = vec![0; weights.len()];
    RoundedDistributor::new(DistributionConfig::percent(0)).distribute_into(
        weights,
        output.as_mut_slice(),
        |value| value as i64,
    )?;
    Ok(output)
}

/// Values in input order for type-erased weights.
///
/// # Errors
/// `UnsupportedValueType` if any weight is not an `i32`, `i64`, `f64` or
/// `WeightValue`; checked before anything else.
pub fn distribute_erased(
    weights: &[&dyn Any],
    precision: u32,
    as_percent: bool,
) -> DistributionResult<Vec<f64>> {
    let values = weights
        .iter()
        .map(|weight| WeightValue::from_any(*weight))
        .collect::<DistributionResult<Vec<_>>>()?;
    distribute_list(&values, precision, as_percent)
}
