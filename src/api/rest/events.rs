//! Event endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::warn;

use super::{error_reply, ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::types::{EventUpdate, NewEvent};

/// GET /api/events - All events in insertion order
pub async fn list_events(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let events = state.store.get_all_events();
    let total = events.len();
    Json(ApiResponse::with_total(events, state.current_sequence_id(), total))
}

/// POST /api/events - Create an event
pub async fn create_event(
    State(state): State<Arc<AppState>>,
    Json(data): Json<NewEvent>,
) -> impl IntoResponse {
    match state.store.create_event(data) {
        Ok(event) => {
            let sequence_id = state.bump_sequence();
            (StatusCode::CREATED, Json(ApiResponse::new(event, sequence_id))).into_response()
        }
        Err(e) => {
            warn!(error = %e, "rejected event creation");
            error_reply(e)
        }
    }
}

/// GET /api/events/:id - Get single event
pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.store.get_event_by_id(&id) {
        Some(event) => (
            StatusCode::OK,
            Json(ApiResponse::new(event, state.current_sequence_id())),
        )
            .into_response(),
        None => not_found(&id),
    }
}

/// PATCH /api/events/:id - Merge the given fields
pub async fn update_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(update): Json<EventUpdate>,
) -> impl IntoResponse {
    match state.store.update_event(&id, update) {
        Ok(Some(event)) => {
            let sequence_id = state.bump_sequence();
            (StatusCode::OK, Json(ApiResponse::new(event, sequence_id))).into_response()
        }
        Ok(None) => not_found(&id),
        Err(e) => {
            warn!(id = %id, error = %e, "rejected event update");
            error_reply(e)
        }
    }
}

/// DELETE /api/events/:id - Delete an event
pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    if state.store.delete_event(&id) {
        state.bump_sequence();
        StatusCode::NO_CONTENT.into_response()
    } else {
        not_found(&id)
    }
}

fn not_found(id: &str) -> axum::response::Response {
    let error = ApiError::not_found(format!("Event '{}' not found", id));
    (StatusCode::NOT_FOUND, Json(error)).into_response()
}
