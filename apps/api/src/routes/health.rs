use axum::{extract::State, Json};
use serde::Serialize;

use crate::llm_client::MODEL;
use crate::report::ReportStyle;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub model: &'static str,
    pub report_style: &'static str,
}

/// GET /health
/// Liveness plus the model and report style this instance was started with.
/// Does not call the upstream API.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthStatus> {
    let report_style = match state.config.report_style {
        ReportStyle::Structured => "structured",
        ReportStyle::Narrative => "narrative",
    };

    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        model: MODEL,
        report_style,
    })
}
