//! Runtime configuration read from environment variables
//!
//! | Variable              | Default              |
//! |-----------------------|----------------------|
//! | `EXPLORER_SEED_SAMPLE`| `true`               |
//! | `EXPLORER_HTTP_ADDR`  | unset (REST off)     |
//! | `EXPLORER_SYNC_MODE`  | `live`               |
//! | `EXPLORER_LOG`        | `event_explorer=info`|

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use crate::filter_state::SyncMode;
use crate::types::{ExplorerError, ExplorerResult};

pub const SEED_SAMPLE_VAR: &str = "EXPLORER_SEED_SAMPLE";
pub const HTTP_ADDR_VAR: &str = "EXPLORER_HTTP_ADDR";
pub const SYNC_MODE_VAR: &str = "EXPLORER_SYNC_MODE";
pub const LOG_VAR: &str = "EXPLORER_LOG";

pub const DEFAULT_LOG_FILTER: &str = "event_explorer=info";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Load the built-in sample catalogue on startup
    pub seed_sample: bool,
    /// Serve the REST API on this address when set
    pub http_addr: Option<SocketAddr>,
    /// Re-evaluation mode for filter sessions
    pub sync_mode: SyncMode,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_sample: true,
            http_addr: None,
            sync_mode: SyncMode::Live,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> ExplorerResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> ExplorerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Config::default();

        if let Some(raw) = get(SEED_SAMPLE_VAR) {
            config.seed_sample = parse_flag(&raw).ok_or_else(|| {
                ExplorerError::Config(format!(
                    "{} must be true or false, got '{}'",
                    SEED_SAMPLE_VAR, raw
                ))
            })?;
        }

        if let Some(raw) = get(HTTP_ADDR_VAR) {
            let addr = raw.parse::<SocketAddr>().map_err(|e| {
                ExplorerError::Config(format!(
                    "{} '{}' is not a socket address: {}",
                    HTTP_ADDR_VAR, raw, e
                ))
            })?;
            config.http_addr = Some(addr);
        }

        if let Some(raw) = get(SYNC_MODE_VAR) {
            config.sync_mode = raw
                .parse()
                .map_err(|e| ExplorerError::Config(format!("{}: {}", SYNC_MODE_VAR, e)))?;
        }

        if let Some(raw) = get(LOG_VAR) {
            config.log_filter = raw;
            config.env_filter()?;
        }

        Ok(config)
    }

    /// Parse `log_filter` into a subscriber filter
    pub fn env_filter(&self) -> ExplorerResult<EnvFilter> {
        EnvFilter::try_new(&self.log_filter).map_err(|e| {
            ExplorerError::Config(format!("{} '{}': {}", LOG_VAR, self.log_filter, e))
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
