//! Event Explorer
//!
//! An in-memory event catalogue with a search, filter and sort pipeline,
//! exposed over a line-delimited JSON-RPC tool protocol on stdio and an
//! optional REST API.
//!
//! # Features
//!
//! - **Event store**: CRUD with monotonically assigned ids that are never reused
//! - **Query engine**: free-text, category, date, price, location and
//!   availability filters followed by a stable sort
//! - **Filter sessions**: live or submit-on-demand re-evaluation
//! - **Views**: grid, list and map renderings of a result set
//!
//! # Modules
//!
//! - `types`: Core data structures (Event, Category, Price, FilterCriteria)
//! - `event_store`: Thread-safe catalogue with CRUD and search
//! - `query`: Filter predicate, sort comparator and the evaluation entry point
//! - `filter_state`: Criteria held between edits and the cached result set
//! - `view`: Text rendering of result sets
//! - `validation`: Event validation rules
//! - `protocol`: JSON-RPC and tool protocol types
//! - `server`: Stdio tool server
//! - `tools`: 9 tool implementations
//! - `api`: REST endpoints (axum)
//! - `config`: Environment configuration
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use event_explorer::{EventStore, ServerInfo, SyncMode, ToolServer};
//! use event_explorer::tools::register_all_tools;
//!
//! fn main() {
//!     let store = Arc::new(EventStore::with_sample_data());
//!     let mut server = ToolServer::with_info(ServerInfo::default());
//!     register_all_tools(&mut server, store, SyncMode::Live);
//!     server.run().unwrap();
//! }
//! ```

pub mod api;
pub mod config;
pub mod event_store;
pub mod filter_state;
pub mod protocol;
pub mod query;
pub mod server;
pub mod tools;
pub mod types;
pub mod validation;
pub mod view;

// Re-export commonly used items at crate root
pub use config::Config;
pub use event_store::{EventStore, SnapshotSource};
pub use filter_state::{FilterState, SyncMode};
pub use protocol::{ServerInfo, Tool};
pub use query::QueryEngine;
pub use server::ToolServer;
pub use types::{
    Availability, Category, DateRange, Event, EventUpdate, ExplorerError, ExplorerResult,
    FilterCriteria, NewEvent, Price, PriceRange, SortKey,
};
pub use view::{render, ViewMode};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
