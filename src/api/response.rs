//! Response types for the Availability & Filtering Engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

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

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidRange { from, to } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RANGE",
                    format!("Invalid date range: from {} is after to {}", from, to),
                    "Check-in must be on or before checkout",
                ),
            },
            EngineError::RoomNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "ROOM_NOT_FOUND",
                    format!("Room not found: {}", id),
                    format!("No room with id '{}' exists in the catalog", id),
                ),
            },
            EngineError::CatalogNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CATALOG_ERROR",
                    "Catalog error",
                    format!("Catalog file not found: {}", path),
                ),
            },
            EngineError::CatalogParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CATALOG_ERROR",
                    "Catalog parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidRoom { room_id, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "INVALID_ROOM",
                    format!("Invalid room '{}': {}", room_id, message),
                    "The catalog contains invalid room data",
                ),
            },
            EngineError::InvalidReservation {
                reservation_id,
                message,
            } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "INVALID_RESERVATION",
                    format!("Invalid reservation '{}': {}", reservation_id, message),
                    "The reservation snapshot contains invalid data",
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_range_maps_to_bad_request() {
        let response: ApiErrorResponse = EngineError::InvalidRange {
            from: NaiveDate::from_ymd_opt(2026, 1, 20).unwrap(),
            to: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
        }
        .into();

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "INVALID_RANGE");
    }

    #[test]
    fn test_room_not_found_maps_to_404() {
        let response: ApiErrorResponse = EngineError::RoomNotFound {
            id: "room_404".to_string(),
        }
        .into();

        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.code, "ROOM_NOT_FOUND");
    }

    #[test]
    fn test_catalog_errors_map_to_500() {
        let response: ApiErrorResponse = EngineError::CatalogNotFound {
            path: "/missing".to_string(),
        }
        .into();

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "CATALOG_ERROR");
    }
}
