//! Trip planning routes
//!
//! The only routes with a client error path: parameters outside the
//! intake bounds (cycle hours over 70, negative or oversized distance or
//! duration) are rejected before planning.

use axum::extract::State;
use axum::Json;
use tracing::debug;
use waylog_domain::{BreakEvent, TripCompliance, TripParameters};

use crate::context::AppContext;
use crate::error::ApiError;

/// `POST /trip/breaks` - the stop schedule for a trip.
pub async fn breaks(
    State(context): State<AppContext>,
    Json(params): Json<TripParameters>,
) -> Result<Json<Vec<BreakEvent>>, ApiError> {
    params.validate()?;
    let events = context.scheduler.schedule(&params);
    debug!(
        distance_miles = params.distance_miles,
        duration_hours = params.duration_hours,
        stops = events.len(),
        "planned break schedule"
    );
    Ok(Json(events))
}

/// `POST /trip/summary` - the trip-level compliance verdict.
pub async fn summary(
    State(context): State<AppContext>,
    Json(params): Json<TripParameters>,
) -> Result<Json<TripCompliance>, ApiError> {
    params.validate()?;
    Ok(Json(context.scheduler.compliance_summary(&params)))
}
