//! Breakdown error types.

use billfold_shared::AppError;
use thiserror::Error;

/// Breakdown-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreakdownError {
    /// Amount cannot be negative.
    #[error("Invalid amount: {0} (amount cannot be negative)")]
    InvalidAmount(i64),

    /// Policy tag is not one of the known tags.
    #[error("Unknown denomination policy: {0}")]
    UnknownPolicy(String),
}

impl From<BreakdownError> for AppError {
    fn from(err: BreakdownError) -> Self {
        Self::Validation(err.to_string())
    }
}
