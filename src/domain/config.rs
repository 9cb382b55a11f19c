// ============================================================================
// Distribution Configuration
// Precision, output representation and rebalancing cutoffs
// ============================================================================

use crate::numeric::scale::{check_precision, element_limit};
use crate::numeric::{
    DistributionError, DistributionResult, DEFAULT_THRESHOLD, MAX_ELEMENTS, SIMPLE_THRESHOLD,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a rounded distribution
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DistributionConfig {
    /// Decimal places of a percentage (0..=12)
    pub precision: u32,

    /// Materialize values in [0, 100] instead of [0, 1]
    pub as_percent: bool,

    /// Remainder above which a zero-unit element is owed one unit
    pub threshold: f64,

    /// Optional: cardinality cap overriding the precision-derived one
    /// None means `min(MAX_ELEMENTS, 10^(precision + 1) / 2)`
    pub max_elements: Option<usize>,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self::percent(0)
    }
}

impl DistributionConfig {
    /// Create a new configuration with required parameters
    pub fn new(precision: u32, as_percent: bool) -> Self {
        Self {
            precision,
            as_percent,
            threshold: DEFAULT_THRESHOLD,
            max_elements: None,
        }
    }

    /// Builder method: Set precision
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method: Set the rescue threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Builder method: Override the cardinality cap
    ///
    /// Values above `MAX_ELEMENTS` are clamped. Past `multiplier` elements not
    /// every non-negligible share can receive a unit.
    pub fn with_max_elements(mut self, max_elements: usize) -> Self {
        self.max_elements = Some(max_elements);
        self
    }

    /// Builder method: Materialize as percents
    pub fn as_percents(mut self) -> Self {
        self.as_percent = true;
        self
    }

    /// Builder method: Materialize as fractions
    pub fn as_fractions(mut self) -> Self {
        self.as_percent = false;
        self
    }

    /// Effective cardinality cap
    pub fn element_limit(&self) -> usize {
        match self.max_elements {
            Some(limit) => limit.min(MAX_ELEMENTS),
            None => element_limit(self.precision),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> DistributionResult<()> {
        check_precision(self.precision)?;

        if !(0.0..1.0).contains(&self.threshold) {
            return Err(DistributionError::InvalidInput);
        }

        if self.max_elements == Some(0) {
            return Err(DistributionError::InvalidInput);
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl DistributionConfig {
    /// Percent values with `precision` decimal places
    pub fn percent(precision: u32) -> Self {
        Self::new(precision, true)
    }

    /// Fractions in [0, 1] with `precision + 2` decimal places
    pub fn fraction(precision: u32) -> Self {
        Self::new(precision, false)
    }

    /// Coarser rescue cutoff: only remainders above 1e-2 are owed a unit
    pub fn simple(precision: u32) -> Self {
        Self::percent(precision).with_threshold(SIMPLE_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = DistributionConfig::new(2, true);

        assert_eq!(config.precision, 2);
        assert!(config.as_percent);
        assert_eq!(config.threshold, DEFAULT_THRESHOLD);
        assert_eq!(config.element_limit(), 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = DistributionConfig::default()
            .with_precision(1)
            .with_max_elements(10)
            .as_fractions();

        assert_eq!(config.precision, 1);
        assert!(!config.as_percent);
        assert_eq!(config.element_limit(), 10);

        let clamped = DistributionConfig::default().with_max_elements(usize::MAX);
        assert_eq!(clamped.element_limit(), MAX_ELEMENTS);
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            DistributionConfig::percent(13).validate(),
            Err(DistributionError::InvalidPrecision { precision: 13 })
        );
        assert_eq!(
            DistributionConfig::percent(0).with_threshold(1.0).validate(),
            Err(DistributionError::InvalidInput)
        );
        assert_eq!(
            DistributionConfig::percent(0).with_threshold(f64::NAN).validate(),
            Err(DistributionError::InvalidInput)
        );
        assert_eq!(
            DistributionConfig::percent(0).with_max_elements(0).validate(),
            Err(DistributionError::InvalidInput)
        );
    }

    #[test]
    fn test_preset_configs() {
        assert!(DistributionConfig::percent(0).as_percent);
        assert!(!DistributionConfig::fraction(0).as_percent);
        assert_eq!(DistributionConfig::simple(0).threshold, SIMPLE_THRESHOLD);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_round_trip() {
        let config = DistributionConfig::fraction(3)
            .with_threshold(0.25)
            .with_max_elements(64);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: DistributionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
