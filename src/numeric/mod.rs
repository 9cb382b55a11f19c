// ============================================================================
// Numeric Module
// Weight kinds, unit scale and error types
// ============================================================================
//
// This module provides:
// - Weight / WeightValue: the closed set of supported weight types
// - Scale helpers: precision bounds, multiplier, cardinality limit
// - DistributionError: error types for validation and allocation
//
// Design principles:
// - Integer weights are promoted to f64 before any scaling
// - Allocation itself is integer-only (units are i64)
// - All fallible operations return Result (no panics)

mod errors;
pub mod scale;
mod weight;

pub use errors::{DistributionError, DistributionResult};
pub use scale::{
    DEFAULT_THRESHOLD, EPSILON, INLINE_ELEMENTS, MAX_ELEMENTS, MAX_PRECISION, SIMPLE_THRESHOLD,
};
pub use weight::{Weight, WeightKind, WeightValue};
