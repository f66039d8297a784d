//! Wallet error types.

use billfold_shared::{AppError, Bill};
use thiserror::Error;

/// Wallet-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// Not enough bills of one denomination to remove.
    #[error("Insufficient {bill} bills: holding {held}, requested {requested}")]
    InsufficientBills {
        /// Denomination that ran short.
        bill: Bill,
        /// Bills currently held.
        held: u64,
        /// Bills requested for removal.
        requested: u64,
    },

    /// The wallet total would exceed the largest representable amount.
    #[error("Wallet total would overflow")]
    Overflow,

    /// The person is not carrying a wallet.
    #[error("No wallet is being carried")]
    NoWallet,
}

impl From<WalletError> for AppError {
    fn from(err: WalletError) -> Self {
        match err {
            WalletError::NoWallet => Self::NotFound(err.to_string()),
            WalletError::InsufficientBills { .. } | WalletError::Overflow => {
                Self::BusinessRule(err.to_string())
            }
        }
    }
}
