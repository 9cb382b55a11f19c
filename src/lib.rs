// ============================================================================
// Rounded Distribution Library
// Largest-remainder percentage distribution with exact totals
// ============================================================================

//! # Rounded Distribution
//!
//! Splits a set of non-negative weights into percentages rounded to a fixed
//! number of decimal places, such that the rounded values add up to exactly
//! 100 (or exactly 1 as fractions).
//!
//! ## Features
//!
//! - **Largest-remainder (Hamilton) apportionment** over integer units
//! - **Zero-share rescue**: every non-negligible share gets at least one unit
//! - **Precision 0 to 12** decimal places of a percentage
//! - **`i32`, `i64` and `f64` weights**, keyed or positional
//! - **Deterministic tie-breaking** by source position
//! - **Caller-supplied outputs** (maps, vectors, pre-sized slices) with an
//!   optional per-value mapper
//!
//! ## Example
//!
//! ```rust
//! use rounded_distribution::prelude::*;
//!
//! let weights = vec![("A", 146i64), ("B", 123), ("C", 323), ("D", 982), ("E", 457)];
//!
//! let distributor = RoundedDistributor::new(DistributionConfig::percent(0));
//! let distribution = distributor.allocate(&weights).unwrap();
//!
//! assert_eq!(distribution.units_of(&"C"), Some(16));
//! assert_eq!(distribution.units_of(&"E"), Some(23));
//! assert_eq!(distribution.total_units(), 100);
//!
//! // Exact decimals, no binary rounding
//! let decimals = distribution.decimals(true);
//! println!("{:?}", decimals);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Distribution, DistributionConfig};
    pub use crate::engine::{
        distribute, distribute_erased, distribute_into_slice, distribute_list, distribute_with,
        integer_percents, integer_percents_list, RoundedDistributor,
    };
    pub use crate::interfaces::{DistributionSink, WeightSource};
    pub use crate::numeric::{
        DistributionError, DistributionResult, Weight, WeightKind, WeightValue,
    };
}
