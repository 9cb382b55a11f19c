// ============================================================================
// Distribution Errors
// Error types for validation and allocation failures
// ============================================================================

use std::fmt;

/// Errors that can occur while building a rounded distribution.
///
/// Everything except [`DistributionError::AllocationInvariantViolated`] is a
/// caller error and is reported before any output is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistributionError {
    /// Non-finite weight, non-finite weight sum or invalid configuration value
    InvalidInput,
    /// Precision outside `0..=MAX_PRECISION`
    InvalidPrecision { precision: u32 },
    /// Weight below zero at the given source position
    NegativeWeight { position: usize },
    /// More elements than the precision's unit space supports
    TooManyElements { count: usize, limit: usize },
    /// Type-erased weight that is not `i32`, `i64` or `f64`
    UnsupportedValueType,
    /// Caller-supplied buffer cannot hold every key
    BufferTooSmall { required: usize, available: usize },
    /// Units did not sum to the multiplier after rebalancing.
    ///
    /// This is a defect in the allocator, never a user error.
    AllocationInvariantViolated { expected: i64, actual: i64 },
}

impl fmt::Display for DistributionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistributionError::InvalidInput => {
                write!(f, "invalid input: weights and configuration must be finite")
            },
            DistributionError::InvalidPrecision { precision } => {
                write!(f, "invalid precision: {}", precision)
            },
            DistributionError::NegativeWeight { position } => {
                write!(f, "negative weight at position {}", position)
            },
            DistributionError::TooManyElements { count, limit } => write!(
                f,
                "collection too big for specified precision: {} elements, limit {}",
                count, limit
            ),
            DistributionError::UnsupportedValueType => {
                write!(f, "unsupported weight type: expected i32, i64 or f64")
            },
            DistributionError::BufferTooSmall {
                required,
                available,
            } => write!(
                f,
                "output buffer too small: {} slots required, {} available",
                required, available
            ),
            DistributionError::AllocationInvariantViolated { expected, actual } => write!(
                f,
                "allocation invariant violated: units sum to {}, expected {}",
                actual, expected
            ),
        }
    }
}

impl std::error::Error for DistributionError {}

/// Result type alias for distribution operations
pub type DistributionResult<T> = Result<T, DistributionError>;
