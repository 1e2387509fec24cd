//! Customer Insights - synthetic customer-behavior profile server.
//!
//! # API Endpoints
//!
//! - `GET /api/user_behavior?timeRange=7d|30d|90d` - Generate customer profiles
//! - `GET /health` - Health check

use std::env;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use customer_insights::api::{AppState, router};

/// Default port if not specified via environment variable.
const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive("customer_insights=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    // Load configuration from environment
    let port: u16 = env::var("INSIGHTS_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    info!(port, "Starting Customer Insights server");

    let app = router(AppState::default());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;

    info!(%addr, "Customer Insights is listening");

    axum::serve(listener, app).await?;

    Ok(())
}
