//! Endpoint tests for the compliance surface
//!
//! Wire-level scenarios for totals, findings, and snapshot, including
//! the failure shape for mistyped payloads.

mod support;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn totals_returns_bucket_hours() {
    let body = json!({
        "changes": [
            {
                "status": "driving",
                "start_time": "2025-03-10T06:00:00",
                "end_time": "2025-03-10T14:00:00",
                "location": "I-40 E"
            },
            {
                "status": "off_duty",
                "start_time": "2025-03-10T14:00:00",
                "end_time": null,
                "location": "Rest area MM 212"
            }
        ],
        "now": "2025-03-10T15:00:00"
    });

    let response = support::test_router()
        .oneshot(support::post_json("/compliance/totals", &body))
        .await
        .expect("request runs");
    assert_eq!(response.status(), StatusCode::OK);

    let totals = support::read_json(response).await;
    assert_eq!(totals["driving"], json!(8.0));
    assert_eq!(totals["off_duty"], json!(1.0));
    assert_eq!(totals["work_hours"], json!(8.0));
}

#[tokio::test]
async fn findings_flags_the_break_rule() {
    // Nine hours of driving, no rest anywhere in the day
    let body = json!({
        "changes": [
            {
                "status": "driving",
                "start_time": "2025-03-10T06:00:00",
                "end_time": null,
                "location": "I-40 E"
            }
        ],
        "now": "2025-03-10T15:00:00"
    });

    let response = support::test_router()
        .oneshot(support::post_json("/compliance/findings", &body))
        .await
        .expect("request runs");
    assert_eq!(response.status(), StatusCode::OK);

    let findings = support::read_json(response).await;
    let findings = findings.as_array().expect("findings array");
    assert!(findings
        .iter()
        .any(|f| f["rule"] == "30-Minute Break Required" && f["severity"] == "critical"));
}

#[tokio::test]
async fn snapshot_defaults_now_to_server_time() {
    // No "now" in the body; an open driving interval keeps growing up to
    // whatever instant the server picks
    let body = json!({
        "changes": [
            {
                "status": "driving",
                "start_time": "2025-03-10T06:00:00",
                "end_time": null,
                "location": "I-40 E"
            }
        ]
    });

    let response = support::test_router()
        .oneshot(support::post_json("/compliance/snapshot", &body))
        .await
        .expect("request runs");
    assert_eq!(response.status(), StatusCode::OK);

    let snapshot = support::read_json(response).await;
    assert_eq!(snapshot["current_status"], "driving");
    assert!(snapshot["totals"]["driving"].as_f64().expect("driving hours") > 0.0);
    assert!(snapshot["as_of"].is_string());
}

#[tokio::test]
async fn mistyped_payload_is_unprocessable() {
    let body = json!({ "changes": "not an array" });

    let response = support::test_router()
        .oneshot(support::post_json("/compliance/snapshot", &body))
        .await
        .expect("request runs");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
