//! Port interfaces for duty-log access
//!
//! These traits define the boundary between the evaluation engine and
//! whatever system of record holds the driver's log.

use async_trait::async_trait;
use waylog_domain::{DutyStatusChange, Result};

/// Trait for fetching the current day's duty-status changes
///
/// The engine treats the log as a pull-based snapshot, not a stream: each
/// fetch returns the full day and the engine recomputes from scratch.
#[async_trait]
pub trait DutyStatusSource: Send + Sync {
    /// Get every duty-status change recorded for the current log day
    async fn fetch_changes(&self) -> Result<Vec<DutyStatusChange>>;
}
