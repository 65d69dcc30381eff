//! # Waylog Domain
//!
//! Business domain types and models for Waylog.
//!
//! This crate contains:
//! - Duty-status timeline types (`DutyStatusChange`, `DailyTotals`)
//! - Compliance finding and trip planning types
//! - Domain error types and Result definitions
//! - Configuration structures
//! - FMCSA threshold constants
//!
//! ## Architecture
//! - No dependencies on other Waylog crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
