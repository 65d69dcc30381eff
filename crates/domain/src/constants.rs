//! FMCSA Hours-of-Service constants
//!
//! Centralized location for the regulatory thresholds used throughout the
//! engine. Rule evaluation must reference these names, never bare numbers.

/// Maximum daily driving time (49 CFR 395.3(a)(3)).
pub const DRIVING_LIMIT_HOURS: f64 = 11.0;
/// Driving hours at which the approaching-limit warning starts.
pub const DRIVING_WARNING_HOURS: f64 = 10.0;

/// Maximum duty window: driving plus on-duty time.
pub const DUTY_WINDOW_LIMIT_HOURS: f64 = 14.0;
/// Work hours at which the approaching-window warning starts.
pub const DUTY_WINDOW_WARNING_HOURS: f64 = 13.0;

/// Driving hours after which a 30-minute rest break is mandatory.
pub const BREAK_TRIGGER_DRIVING_HOURS: f64 = 8.0;
/// Minimum continuous rest that satisfies the break requirement.
pub const QUALIFYING_REST_MINUTES: i64 = 30;

/// Off-duty time required before the next shift.
pub const MIN_OFF_DUTY_HOURS: f64 = 10.0;

/// Rolling 8-day on-duty cycle limit.
pub const CYCLE_LIMIT_HOURS: f64 = 70.0;
