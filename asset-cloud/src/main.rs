//! asset-cloud — AssetVerse backend
//!
//! Long-running service that:
//! - Tracks company assets and their available stock
//! - Runs the asset-request lifecycle (pending -> approved/rejected -> returned)
//! - Records assignments and employee-company affiliations
//! - Reconciles Stripe checkout sessions into package/payment state

mod api;
mod auth;
mod config;
mod db;
mod error;
mod state;
mod stripe;

use config::Config;
use state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "asset_cloud=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting asset-cloud (env: {})", config.environment);

    // Initialize application state (pool + migrations)
    let state = AppState::new(&config).await?;

    let app = api::create_router(state);

    let http_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&http_addr).await?;
    tracing::info!("asset-cloud HTTP listening on {http_addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
