//! Wallet ledger: bills held per denomination.

pub mod error;
pub mod ledger;

#[cfg(test)]
mod props;

pub use error::WalletError;
pub use ledger::Wallet;
