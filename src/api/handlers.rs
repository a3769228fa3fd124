//! HTTP request handlers for the OB Interpretation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Datelike;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    holidays_for_year, is_within_storhelg, ob_category, partial_storhelg_day,
};
use crate::models::DateKey;

use super::request::ClassifyRequest;
use super::response::{ApiError, ClassifyResponse, DayClassification, HolidaysResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/holidays/:year", get(holidays_handler))
        .route("/classify", post(classify_handler))
        .with_state(state)
}

/// Handler for the `GET /holidays/{year}` endpoint.
///
/// Returns the merged holiday table for the year under the configured
/// visibility settings.
async fn holidays_handler(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Json<HolidaysResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, year, "Listing holidays");

    let settings = state.config().holidays();
    let holidays = holidays_for_year(year, &settings)
        .into_iter()
        .collect();

    Json(HolidaysResponse { year, holidays })
}

/// Handler for the `POST /classify` endpoint.
///
/// Accepts a batch of date keys and returns the holiday name, OB category,
/// storhelg window and partial boundary mark for each.
async fn classify_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = classify_rejection(&rejection);
            warn!(
                correlation_id = %correlation_id,
                code = %error.code,
                "Rejected classify request"
            );
            return error.into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        days = request.dates.len(),
        "Classifying days"
    );

    let settings = state.config().holidays();
    let days = request
        .dates
        .iter()
        .map(|&key| {
            let date = key.to_date();
            let holidays = holidays_for_year(date.year(), &settings);
            let holiday = holidays.get(&DateKey::from_date(date)).cloned();
            let ob = ob_category(holiday.as_deref(), date);

            DayClassification {
                date: key,
                holiday,
                ob,
                storhelg_period: is_within_storhelg(date),
                partial: partial_storhelg_day(date),
            }
        })
        .collect();

    Json(ClassifyResponse { days }).into_response()
}

/// Maps a JSON extraction rejection to a structured API error.
fn classify_rejection(rejection: &JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed serde error, including
            // malformed date keys rejected by the DateKey parser.
            let body_text = err.body_text();
            if body_text.contains("missing field") || body_text.contains("Invalid date key") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            ApiError::malformed_json(format!("Invalid JSON syntax: {err}"))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::malformed_json("Expected `Content-Type: application/json`")
        }
        other => ApiError::malformed_json(other.to_string()),
    }
}
