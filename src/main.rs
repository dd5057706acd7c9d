//! schoolgear-server — standalone entrypoint.
//!
//! Reads config from env vars:
//!   PORT — listen port (default: 8080)

use anyhow::Context;
use tracing::info;

use schoolgear_server::router::build_router;
use schoolgear_server::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,schoolgear_server=debug,tower_http=debug".into()),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Build the static dataset and application state
    let state = AppState::new();
    info!(
        schools = state.dataset.schools().len(),
        "dataset initialized"
    );

    let app = build_router(state);

    // Determine port
    let port = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(8080);

    let addr = format!("0.0.0.0:{}", port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app)
        .await
        .context("server terminated unexpectedly")?;

    Ok(())
}
