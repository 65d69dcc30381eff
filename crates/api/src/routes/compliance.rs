//! Compliance evaluation routes
//!
//! Stateless wire surface over the evaluation pipeline: the caller posts
//! a day log and the engine answers from exactly that log. Dirty data
//! follows the engine's clamping rules instead of failing, so these
//! handlers have no error path of their own.

use axum::Json;
use chrono::{Local, NaiveDateTime};
use serde::Deserialize;
use tracing::debug;
use waylog_core::{aggregate, classify, evaluate};
use waylog_domain::{ComplianceFinding, DailyTotals, DutyStatusChange, HosSnapshot};

/// Day log plus an optional evaluation instant
#[derive(Debug, Deserialize)]
pub struct EvaluationRequest {
    /// Duty-status changes for the day, in any order
    pub changes: Vec<DutyStatusChange>,

    /// Evaluation instant; the server's local time when omitted
    #[serde(default)]
    pub now: Option<NaiveDateTime>,
}

impl EvaluationRequest {
    fn evaluation_instant(&self) -> NaiveDateTime {
        self.now.unwrap_or_else(|| Local::now().naive_local())
    }
}

/// `POST /compliance/totals` - hour totals per duty status.
pub async fn totals(Json(request): Json<EvaluationRequest>) -> Json<DailyTotals> {
    let now = request.evaluation_instant();
    debug!(changes = request.changes.len(), %now, "computing daily totals");
    Json(aggregate(&request.changes, now))
}

/// `POST /compliance/findings` - violation findings for the day.
pub async fn findings(Json(request): Json<EvaluationRequest>) -> Json<Vec<ComplianceFinding>> {
    let now = request.evaluation_instant();
    let totals = aggregate(&request.changes, now);
    let findings = classify(&totals, &request.changes, now);
    debug!(changes = request.changes.len(), findings = findings.len(), "classified day log");
    Json(findings)
}

/// `POST /compliance/snapshot` - the full dashboard snapshot.
pub async fn snapshot(Json(request): Json<EvaluationRequest>) -> Json<HosSnapshot> {
    let now = request.evaluation_instant();
    Json(evaluate(&request.changes, now))
}
