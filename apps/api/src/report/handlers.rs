//! Axum route handlers for the report API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::user::UserInfo;
use crate::report::generator::generate_report;
use crate::report::{ApiResponse, Report};
use crate::state::AppState;

/// GET /
pub async fn handle_welcome() -> Json<Value> {
    Json(json!({ "message": "Welcome to Light of Destiny API" }))
}

/// POST /api/user-info
///
/// Takes the submitted birth details and returns the generated report.
pub async fn handle_user_info(
    State(state): State<AppState>,
    payload: Result<Json<UserInfo>, JsonRejection>,
) -> Result<Json<ApiResponse<Report>>, AppError> {
    let report = run_pipeline(&state, payload).await?;
    Ok(Json(ApiResponse::ok("User info processed successfully", report)))
}

/// POST /api/fortune-analysis
///
/// Same pipeline as /api/user-info, exposed under a second path.
pub async fn handle_fortune_analysis(
    State(state): State<AppState>,
    payload: Result<Json<UserInfo>, JsonRejection>,
) -> Result<Json<ApiResponse<Report>>, AppError> {
    let report = run_pipeline(&state, payload).await?;
    Ok(Json(ApiResponse::ok("Fortune analysis completed", report)))
}

async fn run_pipeline(
    state: &AppState,
    payload: Result<Json<UserInfo>, JsonRejection>,
) -> Result<Report, AppError> {
    // Missing or mistyped fields are rejected here, before any model call.
    let Json(user) = payload?;

    generate_report(state.llm.as_ref(), state.config.report_style, &user).await
}
