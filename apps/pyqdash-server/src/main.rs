use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use pyqdash_core::config::Config;
use pyqdash_core::dataset::DatasetCache;
use pyqdash_server::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pyqdash_server=info".parse()?)
                .add_directive("pyqdash_core=info".parse()?),
        )
        .init();

    let config = Config::load()?;
    let port = config.server_port();

    let cache = DatasetCache::new(config.chapters_file());
    info!("Chapter dataset: {}", cache.path().display());

    let state = Arc::new(AppState::new(cache));
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Dashboard API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
