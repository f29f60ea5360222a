//! API module for HTTP endpoints
//!
//! This module provides the REST API over the event store.

pub mod http;
pub mod rest;
pub mod state;

pub use http::{create_router, serve};
pub use state::AppState;
