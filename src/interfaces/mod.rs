// ============================================================================
// Interfaces Module
// Contains trait definitions for input sources and output sinks
// ============================================================================

pub mod sink;
pub mod weight_source;

pub use sink::DistributionSink;
pub use weight_source::WeightSource;
