//! Trip planning types
//!
//! Inputs and outputs of the break scheduler. Break events are a planning
//! aid with distance-proportional location estimates, not routed stops.

use serde::{Deserialize, Serialize};

use crate::constants::CYCLE_LIMIT_HOURS;
use crate::errors::{Result, WaylogError};

/// Longest route distance the trip intake accepts. The scheduler emits
/// one fuel stop per 500-mile interval, so this also bounds the schedule
/// length.
pub const MAX_TRIP_DISTANCE_MILES: f64 = 20_000.0;

/// Longest caller-supplied trip duration the intake accepts (two weeks).
pub const MAX_TRIP_DURATION_HOURS: f64 = 336.0;

/// Scheduler input for one planned trip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripParameters {
    /// Total route distance in miles
    pub distance_miles: f64,

    /// Estimated driving time in hours. Zero, negative, or non-finite
    /// values fall back to distance at the configured average speed.
    pub duration_hours: f64,

    /// Hours already used in the rolling 70-hour/8-day cycle
    pub cycle_hours_used: f64,
}

impl TripParameters {
    /// Range checks mirroring the trip intake form
    pub fn validate(&self) -> Result<()> {
        if !self.distance_miles.is_finite()
            || self.distance_miles < 0.0
            || self.distance_miles > MAX_TRIP_DISTANCE_MILES
        {
            return Err(WaylogError::InvalidInput(format!(
                "distance_miles must be between 0 and {MAX_TRIP_DISTANCE_MILES}, got {}",
                self.distance_miles
            )));
        }
        if !self.duration_hours.is_finite()
            || self.duration_hours < 0.0
            || self.duration_hours > MAX_TRIP_DURATION_HOURS
        {
            return Err(WaylogError::InvalidInput(format!(
                "duration_hours must be between 0 and {MAX_TRIP_DURATION_HOURS}, got {}",
                self.duration_hours
            )));
        }
        if !self.cycle_hours_used.is_finite()
            || self.cycle_hours_used < 0.0
            || self.cycle_hours_used > CYCLE_LIMIT_HOURS
        {
            return Err(WaylogError::InvalidInput(format!(
                "cycle_hours_used must be between 0 and {CYCLE_LIMIT_HOURS}, got {}",
                self.cycle_hours_used
            )));
        }
        Ok(())
    }
}

/// Category of a planned stop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakKind {
    MandatoryBreak,
    RecommendedBreak,
    FuelStop,
    OvernightRest,
}

impl BreakKind {
    /// Display label used by itinerary surfaces
    pub fn label(&self) -> &'static str {
        match self {
            Self::MandatoryBreak => "HOS Mandatory Break",
            Self::RecommendedBreak => "Recommended Break",
            Self::FuelStop => "Fuel Stop",
            Self::OvernightRest => "Overnight Rest",
        }
    }
}

/// Obligation level of a planned stop
///
/// Serialized with the capitalized strings dispatch screens render
/// verbatim, so no rename attribute here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakStatus {
    Mandatory,
    Required,
    Recommended,
}

/// One prescriptive stop on the trip itinerary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakEvent {
    /// Zero-padded HH:MM wall clock, counted from the configured departure
    pub clock_time: String,

    /// Human duration label, e.g. "30 min" or "10 hours"
    pub duration_label: String,

    pub kind: BreakKind,

    /// Distance-proportional approximation, "Approx. N miles"
    pub location_label: String,

    pub status: BreakStatus,

    pub reason: String,
}

/// Trip-level verdict, serialized as the literal banner strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripComplianceStatus {
    #[serde(rename = "Fully Compliant")]
    FullyCompliant,
    #[serde(rename = "Compliant with Required Breaks")]
    CompliantWithBreaks,
    #[serde(rename = "HOS Violation - Adjust Trip")]
    Violation,
    #[serde(rename = "Waiting for trip data")]
    AwaitingData,
}

impl TripComplianceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullyCompliant => "Fully Compliant",
            Self::CompliantWithBreaks => "Compliant with Required Breaks",
            Self::Violation => "HOS Violation - Adjust Trip",
            Self::AwaitingData => "Waiting for trip data",
        }
    }
}

/// Summary returned alongside a break schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripCompliance {
    pub status: TripComplianceStatus,

    /// Trip duration the verdict was computed from, after any fallback
    pub total_trip_hours: f64,

    /// cycle_hours_used plus the effective trip duration
    pub projected_cycle_hours: f64,
}
