//! huddle-server binary — bind the HTTP API and serve until interrupted.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use huddle_engine::RecommendOptions;
use huddle_server::config::ServerConfig;
use huddle_server::routes;
use huddle_server::store::{AvailabilityStore, EventStore, MemoryStore};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    let options = RecommendOptions {
        dedupe_users_per_slot: config.dedupe_users_per_slot,
    };

    let store = Arc::new(MemoryStore::new());
    let events: Arc<dyn EventStore> = store.clone();
    let availabilities: Arc<dyn AvailabilityStore> = store;
    let api = routes::api(events, availabilities, options);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(%addr, dedupe = config.dedupe_users_per_slot, "huddle server listening");

    let (_, serving) = warp::serve(api).bind_with_graceful_shutdown(addr, async {
        let _ = tokio::signal::ctrl_c().await;
        tracing::info!("shutdown signal received");
    });
    serving.await;

    Ok(())
}
