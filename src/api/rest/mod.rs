//! REST API module for HTTP endpoints
//!
//! - `GET /api/events` - All events in insertion order
//! - `POST /api/events` - Create an event
//! - `GET /api/events/:id` - Get single event
//! - `PATCH /api/events/:id` - Merge field updates
//! - `DELETE /api/events/:id` - Delete an event
//! - `POST /api/events/search` - Filter and sort
//! - `GET /api/categories` - Event count per category

pub mod events;
pub mod search;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::types::ExplorerError;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Current sequence ID for cache invalidation
    pub sequence_id: u64,
    /// Total count (for list responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, sequence_id: u64) -> Self {
        Self {
            data,
            sequence_id,
            total: None,
        }
    }

    pub fn with_total(data: T, sequence_id: u64, total: usize) -> Self {
        Self {
            data,
            sequence_id,
            total: Some(total),
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}

/// Map a store error onto a status code and error body
pub fn error_reply(err: ExplorerError) -> axum::response::Response {
    match err {
        ExplorerError::Validation(_)
        | ExplorerError::InvalidPrice(_)
        | ExplorerError::UnknownCategory(_)
        | ExplorerError::UnknownOption { .. }
        | ExplorerError::InvalidParams(_) => {
            (StatusCode::BAD_REQUEST, Json(ApiError::bad_request(err.to_string()))).into_response()
        }
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::internal(err.to_string())),
        )
            .into_response(),
    }
}
