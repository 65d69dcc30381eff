//! Shared test helpers for `waylog-core` integration tests.
//!
//! Small fixtures for building duty logs and trip parameters so the
//! scenario tests can focus on behaviour instead of boilerplate.

// Each integration test binary compiles its own copy and uses a subset
#![allow(dead_code)]

use chrono::NaiveDateTime;
use waylog_domain::{DutyStatus, DutyStatusChange, TripParameters};

/// Parse a `YYYY-MM-DDTHH:MM:SS` local timestamp.
pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").expect("valid test timestamp")
}

/// Build one duty-status change; `end` of `None` leaves it open.
pub fn change(status: DutyStatus, start: &str, end: Option<&str>) -> DutyStatusChange {
    DutyStatusChange {
        status,
        start_time: ts(start),
        end_time: end.map(ts),
        location: "I-40 E, mile 212".to_string(),
        notes: None,
    }
}

/// Trip parameters in the order the intake form collects them.
pub fn trip(distance_miles: f64, duration_hours: f64, cycle_hours_used: f64) -> TripParameters {
    TripParameters { distance_miles, duration_hours, cycle_hours_used }
}
