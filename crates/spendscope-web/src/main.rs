//! Spendscope Web Server
//!
//! Run with: cargo run -p spendscope-web

use anyhow::Context;
use spendscope_config::Config;
use spendscope_web::{assets::verify_startup, router::build_router, state::AppState};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("spendscope=debug,info")),
        )
        .init();

    let config = Config::load().context("failed to load configuration")?;

    info!("Verifying files...");
    if !verify_startup(&config.assets) {
        error!("Some required files are missing. Please check the file paths.");
        return Ok(());
    }

    info!("Starting web server...");
    let addr = config.bind_addr();
    let app = build_router(AppState::new(config.assets)?);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
