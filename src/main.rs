use tracing_subscriber::{fmt, EnvFilter};

use wardrobe_api::api::{create_router, AppState};
use wardrobe_api::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    fmt().with_env_filter(filter).with_target(true).init();

    let state = AppState::new();
    let provider = state.wardrobe.name();
    let app = create_router(state);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, provider, "Server running");

    axum::serve(listener, app).await?;
    Ok(())
}
