//! Hours-of-Service evaluation domain
//!
//! One canonical pipeline turns a day's duty log into everything a
//! compliance surface needs: totals, findings, and the active status.
//! Every consumer goes through [`evaluate`] so the FMCSA thresholds live
//! in exactly one place.

pub mod aggregator;
pub mod classifier;
pub mod monitor;
pub mod ports;

pub use aggregator::{active_change, aggregate, current_status};
pub use classifier::classify;
pub use monitor::{LogMonitor, MonitorError, MonitorResult};
pub use ports::DutyStatusSource;

use chrono::NaiveDateTime;
use waylog_domain::{DutyStatusChange, HosSnapshot};

/// Run the full aggregate-then-classify pass for one instant.
///
/// `now` closes any still-open interval and anchors the rest-break search;
/// calling again with the same log and the same `now` yields an identical
/// snapshot.
pub fn evaluate(changes: &[DutyStatusChange], now: NaiveDateTime) -> HosSnapshot {
    let totals = aggregate(changes, now);
    let findings = classify(&totals, changes, now);

    HosSnapshot { totals, findings, current_status: current_status(changes), as_of: now }
}
