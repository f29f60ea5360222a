//! HTTP server setup with Axum

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use super::rest::{events, search};
use super::state::AppState;
use crate::types::ExplorerResult;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // REST API endpoints
        .route("/api/events", get(events::list_events).post(events::create_event))
        .route("/api/events/search", post(search::search_events))
        .route(
            "/api/events/:id",
            get(events::get_event)
                .patch(events::update_event)
                .delete(events::delete_event),
        )
        .route("/api/categories", get(search::category_counts))
        .layer(cors)
        .with_state(state)
}

/// Bind `addr` and serve the API until the task is dropped
pub async fn serve(addr: SocketAddr, state: Arc<AppState>) -> ExplorerResult<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "HTTP API listening");
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
