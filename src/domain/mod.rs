// ============================================================================
// Domain Models Module
// Working elements, finished distributions and configuration
// ============================================================================

pub mod config;
pub mod distribution;
pub mod element;

pub use config::DistributionConfig;
pub use distribution::Distribution;
pub use element::{Element, WorkingSet};
