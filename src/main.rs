//! Event Explorer - Binary Entry Point
//!
//! Serves the tool protocol on stdio. When `EXPLORER_HTTP_ADDR` is set the
//! REST API runs alongside it on a background runtime.

use std::sync::Arc;
use std::thread;

use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use event_explorer::api::{self, AppState};
use event_explorer::config::Config;
use event_explorer::event_store::EventStore;
use event_explorer::protocol::ServerInfo;
use event_explorer::server::ToolServer;
use event_explorer::tools::register_all_tools;
use event_explorer::types::ExplorerResult;

fn main() -> ExplorerResult<()> {
    let config = Config::from_env()?;

    // stdout carries protocol frames, so logs go to stderr
    tracing_subscriber::registry()
        .with(config.env_filter()?)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    ctrlc::set_handler(|| {
        info!("Received shutdown signal");
        std::process::exit(0);
    })?;

    let store = Arc::new(if config.seed_sample {
        EventStore::with_sample_data()
    } else {
        EventStore::new()
    });
    info!(
        events = store.len(),
        sync_mode = %config.sync_mode,
        "Starting {} v{}",
        event_explorer::NAME,
        event_explorer::VERSION
    );

    if let Some(addr) = config.http_addr {
        let state = Arc::new(AppState::new(store.clone()));
        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    error!(error = %e, "failed to start HTTP runtime");
                    return;
                }
            };
            if let Err(e) = runtime.block_on(api::serve(addr, state)) {
                error!(error = %e, "HTTP API stopped");
            }
        });
    }

    let mut server = ToolServer::with_info(ServerInfo::default());

    // Register all 9 tools
    register_all_tools(&mut server, store, config.sync_mode);

    server.run()
}
