//! Response types for the OB Interpretation Engine API.
//!
//! This module defines the success payloads for the query endpoints and the
//! error response structures shared by all handlers.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::models::{DateKey, ObCategory, PartialBoundaryMark, StorhelgPeriod};

/// Response body for `GET /holidays/{year}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidaysResponse {
    /// The queried year.
    pub year: i32,
    /// Date key → holiday name, under the configured visibility settings.
    pub holidays: BTreeMap<DateKey, String>,
}

/// Response body for `POST /classify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    /// One entry per requested date, in request order.
    pub days: Vec<DayClassification>,
}

/// The full classification of one requested day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayClassification {
    /// The date key as requested.
    pub date: DateKey,
    /// The holiday name under the configured visibility settings, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday: Option<String>,
    /// The resolved OB category.
    pub ob: ObCategory,
    /// The storhelg window containing the day, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storhelg_period: Option<StorhelgPeriod>,
    /// The partial boundary mark for the day, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial: Option<PartialBoundaryMark>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// The JSON envelope error responses are wrapped in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// The error payload.
    pub error: ApiError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(details: impl Into<String>) -> Self {
        Self {
            code: "MALFORMED_JSON".to_string(),
            message: "Request body is not valid JSON".to_string(),
            details: Some(details.into()),
        }
    }

    fn status(&self) -> StatusCode {
        match self.code.as_str() {
            "VALIDATION_ERROR" | "MALFORMED_JSON" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ApiErrorResponse { error: self })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_maps_to_bad_request() {
        let error = ApiError::validation_error("missing field `dates`");
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_malformed_json_carries_details() {
        let error = ApiError::malformed_json("expected value at line 1");
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.details.as_deref(), Some("expected value at line 1"));
    }

    #[test]
    fn test_unknown_code_maps_to_internal_error() {
        let error = ApiError::new("SOMETHING_ELSE", "boom");
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_envelope_shape() {
        let error = ApiError::validation_error("bad");
        let json = serde_json::to_value(ApiErrorResponse { error }).unwrap();
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert!(json["error"].get("details").is_none());
    }
}
