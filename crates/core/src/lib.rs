//! Core wallet logic for Billfold.
//!
//! This crate contains pure computation with no I/O.
//!
//! # Modules
//!
//! - `breakdown` - Change-making under denomination policies
//! - `wallet` - Bills held per denomination
//! - `person` - A wallet owner with a denomination preference
//! - `flight` - Flight capability shared by unrelated types

pub mod breakdown;
pub mod flight;
pub mod person;
pub mod wallet;

pub use breakdown::{BreakdownError, BreakdownResult, BreakdownService, Policy, compute_breakdown};
pub use person::Person;
pub use wallet::{Wallet, WalletError};
