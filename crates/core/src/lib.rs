//! # Waylog Core
//!
//! The HOS compliance engine - no infrastructure dependencies.
//!
//! This crate contains:
//! - Duty-log aggregation and violation classification
//! - Trip break scheduling
//! - Port interfaces (traits) for duty-log sources
//! - The live monitor that re-evaluates against the wall clock
//!
//! ## Architecture Principles
//! - Only depends on `waylog-domain`
//! - No database, HTTP, or platform code
//! - All external data arrives via traits or plain arguments
//! - Evaluation is pure and repeatable for identical inputs

pub mod hos;
pub mod planner;

// Re-export the engine surface
pub use hos::ports::DutyStatusSource;
pub use hos::{active_change, aggregate, classify, current_status, evaluate, LogMonitor};
pub use planner::BreakScheduler;
