use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::models::catalog;
use crate::models::roi::{
    AdviceReport, CalculationRecord, ClearResponse, EstimateRequest, HealthStatus, RoiInputs,
};
use crate::services::{advice_service, roi_algorithm};
use crate::shared_state::AppState;

/// POST /api/estimate
/// Run the ROI calculation for one form submission
///
/// Validates the submission, runs the weather-adjusted estimate, stores the
/// resulting record as the current calculation and returns it. A later
/// submission replaces the stored record.
#[utoipa::path(
    post,
    path = "/api/estimate",
    request_body = EstimateRequest,
    responses(
        (status = 200, description = "Calculation stored and returned", body = CalculationRecord),
        (status = 422, description = "Submission failed validation"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn calculate(
    State(state): State<AppState>,
    Json(request): Json<EstimateRequest>,
) -> impl IntoResponse {
    if let Err(e) = request.validate() {
        tracing::warn!(error = %e, "rejected estimate request");
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response();
    }

    let inputs = RoiInputs::from_request(&request);
    let results = roi_algorithm::estimate(&inputs);
    tracing::info!(
        location = %request.location,
        system_size_kw = results.system_size_kw,
        payback_years = results.payback_years,
        suitability = results.suitability.label(),
        "estimate computed"
    );

    let record = CalculationRecord {
        submitted_at: chrono::Utc::now(),
        request,
        inputs,
        results,
    };
    state.set_record(record.clone());
    (StatusCode::OK, Json(record)).into_response()
}

/// GET /api/estimate/last
/// Fetch the stored calculation
///
/// Returns the record from the most recent successful estimate, or 404 when
/// nothing has been calculated yet (or the slot was cleared).
#[utoipa::path(
    get,
    path = "/api/estimate/last",
    responses(
        (status = 200, description = "Most recent calculation", body = CalculationRecord),
        (status = 404, description = "No calculation stored"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_last_estimate(State(state): State<AppState>) -> impl IntoResponse {
    if let Some(record) = state.get_record() {
        (StatusCode::OK, Json(record)).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "No calculation yet"})),
        )
            .into_response()
    }
}

/// DELETE /api/estimate/last
/// Clear the stored calculation
///
/// Drops the current record so a fresh session starts clean. Always succeeds;
/// the response says whether anything was actually stored.
#[utoipa::path(
    delete,
    path = "/api/estimate/last",
    responses(
        (status = 200, description = "Slot cleared", body = ClearResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn clear_estimate(State(state): State<AppState>) -> impl IntoResponse {
    let cleared = state.clear_record();
    if cleared {
        tracing::info!("cleared stored calculation");
    }
    Json(ClearResponse { cleared }).into_response()
}

/// GET /api/recommendations
/// Installation advice for the stored calculation
///
/// Builds the advice report (weather rating, site notes, next steps) from the
/// current record. 404 until an estimate has been calculated.
#[utoipa::path(
    get,
    path = "/api/recommendations",
    responses(
        (status = 200, description = "Advice for the stored calculation", body = AdviceReport),
        (status = 404, description = "No calculation stored"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_recommendations(State(state): State<AppState>) -> impl IntoResponse {
    if let Some(record) = state.get_record() {
        Json(advice_service::build_report(&record)).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "Calculate an estimate first to get recommendations"})),
        )
            .into_response()
    }
}

/// GET /api/cities
/// Supported location names
///
/// The full sorted list of Indian cities and union territories the form's
/// location picker offers. Purely informational; estimates accept any
/// non-empty location string.
#[utoipa::path(
    get,
    path = "/api/cities",
    responses(
        (status = 200, description = "Sorted location names", body = Vec<String>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_cities() -> impl IntoResponse {
    Json(catalog::LOCATIONS).into_response()
}

/// GET /api/health
/// Service liveness and session state
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthStatus),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        calculation_stored: state.has_record(),
    })
    .into_response()
}
