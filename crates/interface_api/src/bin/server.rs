//! Catalog API server binary
//!
//! Wires the process together: configuration, logging, the connection pool,
//! schema migrations, and the HTTP listener with graceful shutdown.
//!
//! # Environment Variables
//!
//! * `API_HOST` - bind host (default: 0.0.0.0)
//! * `API_PORT` - bind port (default: 8080)
//! * `DATABASE_URL` / `API_DATABASE_URL` - PostgreSQL connection string
//! * `API_LOG_LEVEL` - log filter: trace, debug, info, warn, error (default: info)

use anyhow::Context;
use infra_db::DatabaseConfig;
use interface_api::{config::ApiConfig, create_router};
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::load().context("loading configuration")?;
    init_tracing(&config.log_level);

    let pool = DatabaseConfig::new(&config.database_url)
        .connect()
        .await
        .context("connecting to the database")?;

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .context("applying migrations")?;

    let addr = config.listen_addr().context("parsing listen address")?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    tracing::info!(%addr, "catalog API listening");

    axum::serve(listener, create_router(pool))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving")?;

    tracing::info!("shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging. `RUST_LOG`
/// overrides the configured level when set.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Resolves when the process receives Ctrl+C or SIGTERM, letting the server
/// drain in-flight requests before exiting.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received ctrl-c, draining in-flight requests"),
        _ = terminate => tracing::info!("received SIGTERM, draining in-flight requests"),
    }
}
