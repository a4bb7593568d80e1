use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use casting_api::config::AppConfig;
use casting_api::store::{CastingStore, MemoryStore, PgStore};
use casting_api::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    if config.security.jwt_secret.is_empty() {
        warn!("JWT_SECRET is not set; every resource request will be rejected");
    }

    let store: Arc<dyn CastingStore> = match config.database.url.as_deref() {
        Some(url) => {
            let store = PgStore::connect(url, config.database.max_connections)
                .await
                .context("failed to connect to postgres")?;
            store
                .init_schema()
                .await
                .context("failed to initialize database schema")?;
            Arc::new(store)
        }
        None => {
            warn!("DATABASE_URL is not set; falling back to the in-memory store");
            Arc::new(MemoryStore::new())
        }
    };

    let port = config.server.port;
    let state = AppState::new(config, store);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!("casting api listening on http://{}", bind_addr);

    axum::serve(listener, app(state)).await.context("server")?;
    Ok(())
}
