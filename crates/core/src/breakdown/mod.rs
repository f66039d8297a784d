//! Bill breakdown (change-making) under selectable denomination policies.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod props;

pub use error::BreakdownError;
pub use service::{BreakdownService, compute_breakdown};
pub use types::{BreakdownResult, Policy, total_of};
