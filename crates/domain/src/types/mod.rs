//! Domain types and models
//!
//! Duty-log records come in over the wire exactly as the upstream log
//! service emits them; everything else here is derived on demand and never
//! persisted.

pub mod hos;
pub mod trip;

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

// Re-export evaluation and planning types for convenience
pub use hos::{ComplianceFinding, DailyTotals, HosSnapshot, Severity};
pub use trip::{
    BreakEvent, BreakKind, BreakStatus, TripCompliance, TripComplianceStatus, TripParameters,
    MAX_TRIP_DISTANCE_MILES, MAX_TRIP_DURATION_HOURS,
};

/// Duty status a driver occupies at any instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DutyStatus {
    /// Released from all work obligations
    OffDuty,
    /// Resting in the sleeper berth
    SleeperBerth,
    /// At the wheel
    Driving,
    /// Working but not driving (loading, fueling, paperwork)
    OnDuty,
    /// Status value this engine does not recognize. Newer log sources may
    /// emit statuses we cannot classify yet; they deserialize here and the
    /// aggregator skips them instead of failing the whole pass.
    #[serde(other)]
    Unknown,
}

impl DutyStatus {
    /// Whether time in this status counts as rest for break purposes
    pub fn is_rest(&self) -> bool {
        matches!(self, Self::OffDuty | Self::SleeperBerth)
    }
}

impl Default for DutyStatus {
    fn default() -> Self {
        Self::OffDuty
    }
}

/// One duty-status interval from a driver's daily log
///
/// Timestamps are local wall-clock values; the log format carries no
/// timezone. An absent `end_time` marks the interval still in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DutyStatusChange {
    pub status: DutyStatus,

    pub start_time: NaiveDateTime,

    /// None while the interval is still active
    pub end_time: Option<NaiveDateTime>,

    /// Free text, as entered by the driver
    pub location: String,

    /// Activity description; intake forms require it for on-duty entries,
    /// the engine itself does not
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DutyStatusChange {
    /// Whether this interval is still in progress
    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    /// Elapsed span of this interval, measured against `now` when open.
    /// Clock skew can put `end` before `start`; such spans clamp to zero.
    pub fn duration_until(&self, now: NaiveDateTime) -> Duration {
        let end = self.end_time.unwrap_or(now);
        (end - self.start_time).max(Duration::zero())
    }
}
