use std::path::Path;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use streamguide_api::api::{create_router, AppState};
use streamguide_api::config::Config;
use streamguide_api::store::FeatureStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let store = FeatureStore::load(
        Path::new(&config.catalog_path),
        Path::new(&config.matrix_path),
    )
    .context("failed to load feature artifacts")?;
    tracing::info!(items = store.catalog.len(), "catalog ready");

    let state = AppState::new(store, config.default_top_k);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("server running on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
