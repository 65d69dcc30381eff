//! HOS evaluation output types
//!
//! Everything in this module is derived on demand from the duty log and a
//! reference instant. Nothing carries identity across evaluation passes.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::{DRIVING_LIMIT_HOURS, DUTY_WINDOW_LIMIT_HOURS};
use crate::types::DutyStatus;

/// Cumulative hours per duty status for one log day
///
/// Recomputed from scratch on every pass; accumulating incrementally would
/// drift as open intervals advance with the clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyTotals {
    pub off_duty: f64,
    pub sleeper_berth: f64,
    pub driving: f64,
    pub on_duty: f64,
    /// driving + on_duty, derived once after the interval pass
    pub work_hours: f64,
}

impl DailyTotals {
    /// Driving hours left before the 11-hour limit, clamped at zero
    pub fn remaining_driving_hours(&self) -> f64 {
        (DRIVING_LIMIT_HOURS - self.driving).max(0.0)
    }

    /// Work hours left in the 14-hour duty window, clamped at zero
    pub fn remaining_duty_window_hours(&self) -> f64 {
        (DUTY_WINDOW_LIMIT_HOURS - self.work_hours).max(0.0)
    }
}

/// How urgently a finding demands action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Warning,
    Info,
}

/// One rule evaluation result
///
/// Findings are regenerated wholesale on each pass and carry no identity
/// from one pass to the next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceFinding {
    /// Human-readable rule label, e.g. "11-Hour Driving Limit Exceeded"
    pub rule: String,

    /// Message templated with the current numbers
    pub message: String,

    pub severity: Severity,
}

/// Everything a compliance surface renders on one refresh tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HosSnapshot {
    pub totals: DailyTotals,
    pub findings: Vec<ComplianceFinding>,
    pub current_status: DutyStatus,
    pub as_of: NaiveDateTime,
}

impl HosSnapshot {
    /// True when no rule produced a finding
    pub fn is_compliant(&self) -> bool {
        self.findings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_hours_count_down_from_limits() {
        let totals = DailyTotals { driving: 9.5, on_duty: 2.0, work_hours: 11.5, ..Default::default() };

        assert!((totals.remaining_driving_hours() - 1.5).abs() < 1e-9);
        assert!((totals.remaining_duty_window_hours() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn remaining_hours_clamp_at_zero_past_the_limit() {
        let totals = DailyTotals { driving: 12.0, on_duty: 3.0, work_hours: 15.0, ..Default::default() };

        assert_eq!(totals.remaining_driving_hours(), 0.0);
        assert_eq!(totals.remaining_duty_window_hours(), 0.0);
    }

    #[test]
    fn severity_uses_snake_case_wire_values() {
        assert_eq!(serde_json::to_string(&Severity::Critical).unwrap(), "\"critical\"");
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"high\"");
        assert_eq!(serde_json::to_string(&Severity::Warning).unwrap(), "\"warning\"");
        assert_eq!(serde_json::to_string(&Severity::Info).unwrap(), "\"info\"");
    }
}
