//! HTTP routes
//!
//! Handlers grouped by surface, plus the router assembly and the
//! request-id / request-logging middleware every route shares.

pub mod compliance;
pub mod health;
pub mod trips;

use std::time::Instant;

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use tracing::info;
use uuid::Uuid;

use crate::context::AppContext;

/// Header carrying the request correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Assemble the service router.
pub fn build_router(context: AppContext) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/compliance/totals", post(compliance::totals))
        .route("/compliance/findings", post(compliance::findings))
        .route("/compliance/snapshot", post(compliance::snapshot))
        .route("/trip/breaks", post(trips::breaks))
        .route("/trip/summary", post(trips::summary))
        .layer(middleware::from_fn(trace_request))
        .with_state(context)
}

/// Attach a correlation id and log one line per request.
///
/// An incoming `x-request-id` is propagated; otherwise a fresh uuid is
/// generated. The id always lands on the response so callers can
/// correlate logs across services.
async fn trace_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let started = Instant::now();
    let mut response = next.run(request).await;
    let duration_ms = started.elapsed().as_millis() as u64;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    info!(
        %method,
        path,
        status = response.status().as_u16(),
        duration_ms,
        request_id,
        "request_completed"
    );

    response
}
