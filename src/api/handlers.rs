//! HTTP request handlers for the Availability & Filtering Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::availability::{ReservationIndex, search_indexed};
use crate::models::SearchFilter;

use super::request::SearchRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/search", post(search_handler))
        .route("/rooms", get(list_rooms_handler))
        .route("/rooms/:room_id", get(get_room_handler))
        .with_state(state)
}

/// Handler for POST /search endpoint.
///
/// Accepts a search request and returns the ordered availability results.
async fn search_handler(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation id for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing search request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
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
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Validate the requested range before any filtering runs
    let filter: SearchFilter = match request.try_into() {
        Ok(filter) => filter,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid search request");
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    // One consistent snapshot for the whole evaluation
    let catalog = state.snapshot();

    let start_time = Instant::now();
    let index = ReservationIndex::build(&catalog.reservations);

    let dangling = index.dangling(&catalog.rooms);
    if !dangling.is_empty() {
        warn!(
            correlation_id = %correlation_id,
            dangling_room_ids = ?dangling,
            "Reservation snapshot references rooms missing from the catalog"
        );
    }

    let results = search_indexed(&catalog.rooms, &index, &filter);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        rooms_considered = catalog.rooms.len(),
        results_count = results.len(),
        duration_us = duration.as_micros(),
        "Search completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(results),
    )
        .into_response()
}

/// Handler for GET /rooms endpoint. Returns the full room catalog.
async fn list_rooms_handler(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.snapshot();
    Json(catalog.rooms.clone()).into_response()
}

/// Handler for GET /rooms/{room_id} endpoint. Returns one room or 404.
async fn get_room_handler(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> impl IntoResponse {
    let catalog = state.snapshot();
    match catalog.room(&room_id) {
        Some(room) => Json(room.clone()).into_response(),
        None => {
            warn!(room_id = %room_id, "Room lookup missed");
            let api_error: ApiErrorResponse =
                crate::error::EngineError::RoomNotFound { id: room_id }.into();
            api_error.into_response()
        }
    }
}
