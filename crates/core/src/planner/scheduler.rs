//! HOS break schedule synthesis
//!
//! Positions mandatory breaks, recommended breaks, fuel stops, and an
//! overnight rest along a planned trip. Clock times count from the
//! configured departure hour; locations are proportional mile markers.
//! Every numeric guard degrades to an empty schedule instead of failing,
//! so half-entered trip forms never produce an error.

use waylog_domain::constants::{CYCLE_LIMIT_HOURS, DRIVING_LIMIT_HOURS};
use waylog_domain::{
    BreakEvent, BreakKind, BreakStatus, PlannerConfig, TripCompliance, TripComplianceStatus,
    TripParameters,
};

/// Break scheduler with configurable planning heuristics
#[derive(Debug, Clone)]
pub struct BreakScheduler {
    config: PlannerConfig,
}

impl BreakScheduler {
    /// Create a scheduler with the default planning heuristics.
    pub fn new() -> Self {
        Self::with_config(PlannerConfig::default())
    }

    /// Create a scheduler with a custom configuration.
    pub fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// The active planning configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Synthesize the stop schedule for one trip.
    ///
    /// Events come back sorted by clock time; the sort is stable, so stops
    /// sharing a clock minute keep their emission order (mandatory break,
    /// recommended breaks, fuel stops, overnight rest).
    pub fn schedule(&self, params: &TripParameters) -> Vec<BreakEvent> {
        let distance = params.distance_miles;
        let Some(duration) = self.effective_duration(params) else {
            return Vec::new();
        };

        let mut events = Vec::new();

        // One potential break boundary per driving segment
        let segments = (duration / self.config.segment_hours).ceil() as i64;

        if duration >= self.config.mandatory_break_after_hours {
            events.push(BreakEvent {
                clock_time: self.clock_time(self.config.mandatory_break_after_hours),
                duration_label: "30 min".to_string(),
                kind: BreakKind::MandatoryBreak,
                location_label: proportional_location(distance, 1, segments),
                status: BreakStatus::Mandatory,
                reason: "FMCSA 30-minute break required after 8 hours of driving".to_string(),
            });
        }

        // Segment 1 is already covered by the mandatory break when it applies
        for segment in 2..=segments {
            let hours = (duration / segments as f64) * segment as f64;
            events.push(BreakEvent {
                clock_time: self.clock_time(hours),
                duration_label: "15 min".to_string(),
                kind: BreakKind::RecommendedBreak,
                location_label: proportional_location(distance, segment, segments),
                status: BreakStatus::Recommended,
                reason: "Short break for safety and alertness".to_string(),
            });
        }

        let fuel_stops = (distance / self.config.fuel_interval_miles).floor() as i64;
        for stop in 1..=fuel_stops {
            let fuel_distance = stop as f64 * self.config.fuel_interval_miles;
            let hours = (fuel_distance / distance) * duration;
            events.push(BreakEvent {
                clock_time: self.clock_time(hours),
                duration_label: "45 min".to_string(),
                kind: BreakKind::FuelStop,
                location_label: format!("Approx. {} miles", fuel_distance.round() as i64),
                status: BreakStatus::Required,
                reason: "Refueling and vehicle inspection".to_string(),
            });
        }

        if duration >= self.config.overnight_threshold_hours {
            let (hour, minute) = self.config.overnight_clock_time;
            events.push(BreakEvent {
                clock_time: format!("{:02}:{:02}", hour % 24, minute % 60),
                duration_label: "10 hours".to_string(),
                kind: BreakKind::OvernightRest,
                location_label: format!(
                    "Approx. {} miles",
                    (distance * self.config.overnight_route_fraction).round() as i64
                ),
                status: BreakStatus::Mandatory,
                reason: "10-hour off-duty period required by FMCSA".to_string(),
            });
        }

        // Zero-padded HH:MM, so lexicographic order is chronological order
        events.sort_by(|a, b| a.clock_time.cmp(&b.clock_time));
        events
    }

    /// Derive the trip-level compliance verdict.
    pub fn compliance_summary(&self, params: &TripParameters) -> TripCompliance {
        // The intake form feeds this through parseFloat-style coercion;
        // a non-finite cycle value means "nothing entered yet"
        let cycle_used =
            if params.cycle_hours_used.is_finite() { params.cycle_hours_used } else { 0.0 };

        let Some(duration) = self.effective_duration(params) else {
            return TripCompliance {
                status: TripComplianceStatus::AwaitingData,
                total_trip_hours: 0.0,
                projected_cycle_hours: cycle_used,
            };
        };

        let projected = cycle_used + duration;
        let status = if projected <= CYCLE_LIMIT_HOURS && duration <= DRIVING_LIMIT_HOURS {
            TripComplianceStatus::FullyCompliant
        } else if projected <= CYCLE_LIMIT_HOURS {
            TripComplianceStatus::CompliantWithBreaks
        } else {
            TripComplianceStatus::Violation
        };

        TripCompliance { status, total_trip_hours: duration, projected_cycle_hours: projected }
    }

    /// The duration the plan is built against: the caller's estimate when
    /// usable, otherwise distance at the configured average speed. `None`
    /// means the trip is too underspecified to plan at all.
    fn effective_duration(&self, params: &TripParameters) -> Option<f64> {
        let distance = params.distance_miles;
        if !distance.is_finite() || distance <= 0.0 {
            return None;
        }

        let duration = params.duration_hours;
        if duration.is_finite() && duration > 0.0 {
            return Some(duration);
        }

        let fallback = distance / self.config.average_speed_mph;
        (fallback.is_finite() && fallback > 0.0).then_some(fallback)
    }

    /// Wall-clock HH:MM reached `hours_from_start` into the trip, wrapping
    /// past midnight.
    fn clock_time(&self, hours_from_start: f64) -> String {
        let total_minutes = (hours_from_start * 60.0).round() as i64;
        let start_minutes = i64::from(self.config.trip_start_hour) * 60;
        let hours = ((start_minutes + total_minutes) / 60) % 24;
        let minutes = (start_minutes + total_minutes) % 60;
        format!("{hours:02}:{minutes:02}")
    }
}

impl Default for BreakScheduler {
    fn default() -> Self {
        Self::new()
    }
}

fn proportional_location(distance: f64, segment: i64, total_segments: i64) -> String {
    let point = ((segment as f64 / total_segments as f64) * distance).round() as i64;
    format!("Approx. {point} miles")
}
