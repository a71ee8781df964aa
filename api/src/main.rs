//! Animal API Server
//!
//! Placeholder dog and cat endpoints over a controller → service → repository
//! stack. Uses hexagonal (ports & adapters) architecture for clean separation
//! of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use chrono::{DateTime, Utc};
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod container;
mod domain;
mod error;
mod handlers;
mod routes;

#[cfg(test)]
mod test_utils;


use adapters::{DetachedPool, PostgresPool};
use config::Config;
use container::DependencyContainer;
use domain::ports::ConnectionPool;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub container: DependencyContainer,
    /// Same pool the repository reads, pinged by `/ready`
    pub pool: Arc<dyn ConnectionPool>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(container: DependencyContainer, pool: Arc<dyn ConnectionPool>) -> Self {
        Self {
            container,
            pool,
            started_at: Utc::now(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,animal_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Animal API...");

    let config = Config::from_env();

    let pool: Arc<dyn ConnectionPool> = match &config.database_url {
        Some(url) => {
            tracing::info!("Connecting to database...");
            let pool = PostgresPool::connect(
                url,
                config.database_max_connections,
                config.database_connect_timeout,
            )
            .await
            .context("Failed to connect to database")?;
            pool.ping().await.context("Database ping failed")?;
            tracing::info!("Database connected");

            Arc::new(pool)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, running with a detached pool");
            Arc::new(DetachedPool)
        }
    };

    let container = DependencyContainer::new(pool.clone());
    let state = AppState::new(container, pool);
    let app = routes::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::warn!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::warn!("Received SIGTERM, shutting down");
        }
    }
}
