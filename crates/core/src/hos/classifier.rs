//! FMCSA violation classification
//!
//! Applies the daily HOS rules to aggregated totals and, for the rest-break
//! rule, to the raw interval list. Findings come back in a fixed rule order
//! so repeated passes over unchanged input are snapshot-stable.

use chrono::NaiveDateTime;
use waylog_domain::constants::{
    BREAK_TRIGGER_DRIVING_HOURS, DRIVING_LIMIT_HOURS, DRIVING_WARNING_HOURS,
    DUTY_WINDOW_LIMIT_HOURS, DUTY_WINDOW_WARNING_HOURS, MIN_OFF_DUTY_HOURS,
    QUALIFYING_REST_MINUTES,
};
use waylog_domain::{ComplianceFinding, DailyTotals, DutyStatusChange, Severity};

/// Evaluate the daily rules against one totals snapshot.
///
/// `changes` feeds the rest-break search only; `now` closes any open rest
/// interval in that search. Reaching a limit exactly counts as violating
/// it: 11.0 h of driving is already over the line, not approaching it.
pub fn classify(
    totals: &DailyTotals,
    changes: &[DutyStatusChange],
    now: NaiveDateTime,
) -> Vec<ComplianceFinding> {
    let mut findings = Vec::new();

    // 1. 11-hour driving limit
    if totals.driving >= DRIVING_LIMIT_HOURS {
        findings.push(ComplianceFinding {
            rule: "11-Hour Driving Limit Exceeded".to_string(),
            message: format!(
                "You have driven {:.1}h today (max 11h). Stop driving immediately!",
                totals.driving
            ),
            severity: Severity::Critical,
        });
    } else if totals.driving > DRIVING_WARNING_HOURS {
        findings.push(ComplianceFinding {
            rule: "Approaching 11-Hour Driving Limit".to_string(),
            message: format!(
                "You have driven {:.1}h today. Only {:.1}h remaining.",
                totals.driving,
                DRIVING_LIMIT_HOURS - totals.driving
            ),
            severity: Severity::Warning,
        });
    }

    // 2. 14-hour duty window (driving + on duty)
    let work_hours = totals.driving + totals.on_duty;
    if work_hours >= DUTY_WINDOW_LIMIT_HOURS {
        findings.push(ComplianceFinding {
            rule: "14-Hour Work Limit Exceeded".to_string(),
            message: format!(
                "Total work hours {work_hours:.1}h exceeds 14h limit. \
                 You must take 10 consecutive hours off-duty."
            ),
            severity: Severity::Critical,
        });
    } else if work_hours > DUTY_WINDOW_WARNING_HOURS {
        findings.push(ComplianceFinding {
            rule: "Approaching 14-Hour Work Limit".to_string(),
            message: format!(
                "Total work hours {work_hours:.1}h. Only {:.1}h remaining.",
                DUTY_WINDOW_LIMIT_HOURS - work_hours
            ),
            severity: Severity::Warning,
        });
    }

    // 3. 30-minute rest break after 8 hours of driving
    if totals.driving >= BREAK_TRIGGER_DRIVING_HOURS && !has_qualifying_rest(changes, now) {
        findings.push(ComplianceFinding {
            rule: "30-Minute Break Required".to_string(),
            message: format!(
                "You have driven {:.1}h today. A 30-minute break is required \
                 after 8 hours of driving.",
                totals.driving
            ),
            severity: Severity::Critical,
        });
    }

    // 4. 10 hours off duty before the next shift
    if totals.off_duty < MIN_OFF_DUTY_HOURS && (totals.driving > 0.0 || totals.on_duty > 0.0) {
        findings.push(ComplianceFinding {
            rule: "10-Hour Off-Duty Requirement".to_string(),
            message: format!(
                "Only {:.1}h off-duty. You need {:.1}h more before starting work.",
                totals.off_duty,
                MIN_OFF_DUTY_HOURS - totals.off_duty
            ),
            severity: Severity::High,
        });
    }

    findings
}

/// Whether any rest interval in the day lasted at least 30 continuous
/// minutes. Open intervals are measured to `now`. Position relative to the
/// 8-hour driving mark is deliberately not considered; a qualifying rest
/// anywhere in the day satisfies the rule.
fn has_qualifying_rest(changes: &[DutyStatusChange], now: NaiveDateTime) -> bool {
    changes.iter().any(|change| {
        change.status.is_rest() && change.duration_until(now).num_minutes() >= QUALIFYING_REST_MINUTES
    })
}
