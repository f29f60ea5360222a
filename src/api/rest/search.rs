//! Search and category endpoints

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};

use super::ApiResponse;
use crate::api::state::AppState;
use crate::types::{Category, FilterCriteria};

/// POST /api/events/search - Filter and sort the catalogue
///
/// The body is a criteria object; every field is optional.
pub async fn search_events(
    State(state): State<Arc<AppState>>,
    Json(criteria): Json<FilterCriteria>,
) -> impl IntoResponse {
    let results = state.store.search_events(&criteria);
    let total = results.len();
    Json(ApiResponse::with_total(results, state.current_sequence_id(), total))
}

/// GET /api/categories - Event count for every category
pub async fn category_counts(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let counts = state.store.category_counts();
    let data: BTreeMap<Category, usize> = Category::ALL
        .iter()
        .map(|c| (*c, counts.get(c).copied().unwrap_or(0)))
        .collect();
    Json(ApiResponse::new(data, state.current_sequence_id()))
}
