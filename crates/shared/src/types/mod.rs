//! Common types used across the application.

pub mod bill;

pub use bill::{Bill, DENOMINATION_COUNT};
