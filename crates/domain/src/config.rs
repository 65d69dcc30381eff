//! Engine configuration structs
//!
//! Tunable knobs for the break scheduler and the live monitor. Defaults
//! reproduce the planning heuristics of the original dispatch workflow.

use serde::{Deserialize, Serialize};

/// Configuration for break scheduling behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Clock hour the trip is assumed to depart (default: 6 = 06:00)
    pub trip_start_hour: u32,

    /// Average speed used to estimate duration when the caller supplies
    /// none (default: 55.0 mph)
    pub average_speed_mph: f64,

    /// Length of one driving segment between recommended breaks
    /// (default: 4.0 hours)
    pub segment_hours: f64,

    /// Driving hours that trigger the mandatory 30-minute break
    /// (default: 8.0)
    pub mandatory_break_after_hours: f64,

    /// Distance between fuel stops (default: 500.0 miles)
    pub fuel_interval_miles: f64,

    /// Trip duration that forces an overnight rest (default: 14.0 hours)
    pub overnight_threshold_hours: f64,

    /// Wall-clock (hour, minute) of the overnight rest, wrapped into
    /// 00:00-23:59 (default: (22, 0) = 22:00)
    pub overnight_clock_time: (u32, u32),

    /// Fraction of the route at which the overnight rest falls
    /// (default: 0.6)
    pub overnight_route_fraction: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            trip_start_hour: 6,                // 06:00 departure
            average_speed_mph: 55.0,           // highway average
            segment_hours: 4.0,                // break boundary every 4 h
            mandatory_break_after_hours: 8.0,  // FMCSA 395.3(a)(3)(ii)
            fuel_interval_miles: 500.0,        // typical tank range
            overnight_threshold_hours: 14.0,   // duty window
            overnight_clock_time: (22, 0),     // 22:00
            overnight_route_fraction: 0.6,     // 60% of route
        }
    }
}

/// Configuration for the live HOS monitor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Seconds between refresh ticks (default: 5)
    pub refresh_interval_secs: u64,

    /// Timeout applied to a single duty-log fetch (default: 10 seconds)
    pub fetch_timeout_secs: u64,

    /// Timeout for awaiting the refresh task on stop (default: 5 seconds)
    pub join_timeout_secs: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: 5, // matches the dashboard refresh cadence
            fetch_timeout_secs: 10,
            join_timeout_secs: 5,
        }
    }
}
