//! HTTP request handlers for the Assembly Cost Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::{Duration, Instant};

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::build_estimate;
use crate::models::Estimate;
use crate::report::{export_xlsx, EXPORT_FILE_NAME, XLSX_CONTENT_TYPE};

use super::request::EstimateRequest;
use super::response::{ApiError, ApiErrorResponse, EstimateResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/estimate", post(estimate_handler))
        .route("/estimate/xlsx", post(estimate_xlsx_handler))
        .route("/holidays/:region/:year", get(holidays_handler))
        .with_state(state)
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
    .into_response()
}

/// Validates the request and calculates the estimate.
fn run_estimate(
    state: &AppState,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<(Estimate, Duration), Response> {
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return Err(rejection_response(rejection, correlation_id)),
    };

    let start_time = Instant::now();
    let planned = request
        .plan(state.config(), state.calendar())
        .map_err(|err| {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Estimate request rejected"
            );
            ApiErrorResponse::from(err).into_response()
        })?;

    let estimate = build_estimate(planned.project, &planned.region, &planned.days, &planned.rates);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        region = %estimate.region,
        days_count = estimate.summary.days.len(),
        grand_total = %estimate.summary.total(),
        duration_us = duration.as_micros(),
        "Estimate completed successfully"
    );

    Ok((estimate, duration))
}

/// Handler for POST /estimate endpoint.
///
/// Returns the day-by-day results and totals as JSON.
async fn estimate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing estimate request");

    let (estimate, duration) = match run_estimate(&state, payload, correlation_id) {
        Ok(result) => result,
        Err(response) => return response,
    };

    let response = EstimateResponse {
        estimate_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        estimate,
        duration_us: duration.as_micros() as u64,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for POST /estimate/xlsx endpoint.
///
/// Returns the day-by-day results as a spreadsheet download.
async fn estimate_xlsx_handler(
    State(state): State<AppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing spreadsheet request");

    let (estimate, _) = match run_estimate(&state, payload, correlation_id) {
        Ok(result) => result,
        Err(response) => return response,
    };

    match export_xlsx(&estimate) {
        Ok(bytes) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Spreadsheet export failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /holidays/:region/:year endpoint.
async fn holidays_handler(
    State(state): State<AppState>,
    Path((region, year)): Path<(String, i32)>,
) -> impl IntoResponse {
    match state.calendar().holidays_in_year(year, &region) {
        Ok(holidays) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(holidays),
        )
            .into_response(),
        Err(err) => {
            warn!(region = %region, year, error = %err, "Holiday lookup failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}
