use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use inventory::shared::infrastructure::item_store::in_memory::InMemoryItemStore;
use inventory::shell::config::AppConfig;
use inventory::shell::http::app;
use inventory::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    // Process-lifetime store, starts empty
    let store = Arc::new(InMemoryItemStore::new());
    let state = AppState::new(store);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("HTTP endpoint: http://{}", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    axum::serve(listener, app(state, &config)).await?;
    Ok(())
}
