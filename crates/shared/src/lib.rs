//! Shared types, errors, and configuration for Billfold.
//!
//! This crate provides common types used across all other crates:
//! - Bill denominations in a fixed, ordered set
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, BreakdownConfig, PersonConfig};
pub use error::{AppError, AppResult};
pub use types::{Bill, DENOMINATION_COUNT};
