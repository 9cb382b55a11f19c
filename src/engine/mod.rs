// ============================================================================
// Engine Module
// Contains the rounded distribution pipeline
// ============================================================================

mod distributor;
mod fraction;
mod largest_remainder;
mod materializer;
mod rebalancer;
mod validator;

pub mod adapters;

pub use adapters::{
    distribute, distribute_erased, distribute_into_slice, distribute_list, distribute_with,
    integer_percents, integer_percents_list,
};
pub use distributor::RoundedDistributor;
