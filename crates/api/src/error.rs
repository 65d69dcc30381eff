//! HTTP error mapping
//!
//! Engine errors cross the wire as a JSON envelope with a stable type
//! label and the human-readable message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::warn;
use waylog_domain::WaylogError;

/// Errors surfaced by request handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// The engine rejected the request
    #[error(transparent)]
    Domain(#[from] WaylogError),
}

/// Stable label for an engine error, used in wire envelopes and logs.
fn error_label(error: &WaylogError) -> &'static str {
    match error {
        WaylogError::InvalidInput(_) => "invalid_input",
        WaylogError::Source(_) => "source",
        WaylogError::Config(_) => "config",
        WaylogError::NotFound(_) => "not_found",
        WaylogError::Internal(_) => "internal",
    }
}

fn status_for(error: &WaylogError) -> StatusCode {
    match error {
        WaylogError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        WaylogError::NotFound(_) => StatusCode::NOT_FOUND,
        WaylogError::Source(_) | WaylogError::Config(_) | WaylogError::Internal(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, label, message) = match &self {
            Self::Domain(error) => (status_for(error), error_label(error), error.to_string()),
        };
        warn!(error_type = label, status = status.as_u16(), %message, "request rejected");

        let body = json!({
            "error": { "type": label, "message": message }
        });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_maps_to_bad_request() {
        let error = ApiError::from(WaylogError::InvalidInput("cycle_hours_used".to_string()));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn source_failures_map_to_server_errors() {
        let error = ApiError::from(WaylogError::Source("upstream log service".to_string()));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(error_label(&WaylogError::InvalidInput(String::new())), "invalid_input");
        assert_eq!(error_label(&WaylogError::NotFound(String::new())), "not_found");
        assert_eq!(error_label(&WaylogError::Internal(String::new())), "internal");
    }
}
