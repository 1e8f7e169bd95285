//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, notification bus setup, worker spawning, and
//! Axum server lifecycle.

use crate::application::services::AttachmentUrlSigner;
use crate::config::Config;
use crate::infrastructure::notify::{LocalBus, NotificationBus, RedisBus, run_event_worker};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool with per-statement timeout
/// - Apply migrations
/// - Redis notification bus (or in-process fallback)
/// - Background board event worker
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Attachment base URL is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let notifier = connect_notifier(&config).await;

    let (event_tx, event_rx) = mpsc::channel(config.event_queue_capacity);
    tokio::spawn(run_event_worker(event_rx, notifier.clone()));

    let url_signer = AttachmentUrlSigner::new(
        &config.public_base_url,
        config.attachment_signing_secret.clone(),
        config.attachment_url_ttl_seconds,
    )
    .context("Invalid PUBLIC_BASE_URL")?;

    let state = AppState::new(
        Arc::new(pool),
        event_tx,
        notifier,
        config.token_signing_secret.clone(),
        url_signer,
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Opens the connection pool with the configured limits.
///
/// Every connection gets `statement_timeout` so no store call can hang a
/// request indefinitely.
async fn connect_pool(config: &Config) -> Result<PgPool> {
    let statement_timeout = config.db_statement_timeout_ms.to_string();
    let connect_options = PgConnectOptions::from_str(&config.database_url)
        .context("Invalid DATABASE_URL")?
        .options([("statement_timeout", statement_timeout.as_str())]);

    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect_with(connect_options)
        .await
        .context("Failed to connect to database")
}

/// Picks Redis when configured and reachable, the in-process bus otherwise.
async fn connect_notifier(config: &Config) -> Arc<dyn NotificationBus> {
    if let Some(redis_url) = &config.redis_url {
        match RedisBus::connect(redis_url).await {
            Ok(redis) => {
                tracing::info!("Notification bus enabled (Redis)");
                return Arc::new(redis);
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using in-process bus.", e);
            }
        }
    } else {
        tracing::info!("Redis not configured, using in-process notification bus");
    }

    Arc::new(LocalBus::new(config.event_queue_capacity))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
