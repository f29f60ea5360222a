//! Error type shared by the store, the tool server and the HTTP API

use thiserror::Error;

/// Errors raised by write paths and the outer surfaces.
///
/// Lookups never fail: an unknown id is `None`/`false`. Queries never fail
/// either; malformed criteria simply match nothing.
#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("invalid price '{0}': expected \"Free\" or a non-negative amount")]
    InvalidPrice(String),

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("unknown {kind} '{value}'")]
    UnknownOption { kind: &'static str, value: String },

    #[error("invalid params: {0}")]
    InvalidParams(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("signal handler: {0}")]
    Signal(#[from] ctrlc::Error),
}

/// Result type for explorer operations
pub type ExplorerResult<T> = Result<T, ExplorerError>;
