//! Duty-log interval aggregation
//!
//! Turns a day's duty-status changes into cumulative hours per status.
//! Totals are rebuilt from scratch on every call; nothing here mutates the
//! input or carries state between passes, so the aggregator is safe to run
//! every few seconds against a live, growing log.

use chrono::NaiveDateTime;
use waylog_domain::{DailyTotals, DutyStatus, DutyStatusChange};

/// Accumulate per-status hours for one log day.
///
/// The upstream log service does not guarantee record order, so a working
/// copy is sorted by start time before the pass. An open interval is
/// measured to `now`; negative spans clamp to zero inside
/// [`DutyStatusChange::duration_until`] so a single skewed record cannot
/// corrupt the day. [`DutyStatus::Unknown`] records contribute nothing.
pub fn aggregate(changes: &[DutyStatusChange], now: NaiveDateTime) -> DailyTotals {
    let mut ordered: Vec<&DutyStatusChange> = changes.iter().collect();
    ordered.sort_by_key(|change| change.start_time);

    let mut totals = DailyTotals::default();
    for change in ordered {
        let hours = change.duration_until(now).num_seconds() as f64 / 3600.0;
        match change.status {
            DutyStatus::OffDuty => totals.off_duty += hours,
            DutyStatus::SleeperBerth => totals.sleeper_berth += hours,
            DutyStatus::Driving => totals.driving += hours,
            DutyStatus::OnDuty => totals.on_duty += hours,
            DutyStatus::Unknown => {}
        }
    }

    // Derived once after the pass, never accumulated on its own
    totals.work_hours = totals.driving + totals.on_duty;
    totals
}

/// The status the driver is in right now: the most recently started open
/// change, or off duty when the log has none.
pub fn current_status(changes: &[DutyStatusChange]) -> DutyStatus {
    active_change(changes).map(|change| change.status).unwrap_or_default()
}

/// The open change the driver is currently logging, if any.
///
/// A well-formed day has at most one; if a malformed log carries several,
/// the most recently started one wins.
pub fn active_change(changes: &[DutyStatusChange]) -> Option<&DutyStatusChange> {
    changes.iter().filter(|change| change.is_open()).max_by_key(|change| change.start_time)
}
