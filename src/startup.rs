//! Application startup and initialization logic.

use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};

use crate::app_state::AppState;
use crate::config::{Config, StoreBackend};
use crate::database::{self, EmployeeStore, InMemoryEmployeeStore, PgEmployeeStore};

/// Initialize application services and create the AppState.
pub async fn initialize_app(config: &Config) -> Result<AppState> {
    info!("Starting employee directory ({})", config.environment);

    // Initialize Prometheus metrics exporter
    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install Prometheus recorder: {}", e))?;
    info!("Prometheus metrics initialized");

    let store = build_store(config).await?;
    info!("Employee store ready (backend: {})", config.store_backend.as_str());

    let app_state = AppState::new(config.clone(), store).with_metrics(metrics_handle);

    info!("AppState created successfully");
    Ok(app_state)
}

/// Build the employee store selected by `STORE_BACKEND`.
pub async fn build_store(config: &Config) -> Result<Arc<dyn EmployeeStore>> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let database_url = config.database_url.as_deref().ok_or_else(|| {
                anyhow::anyhow!("DATABASE_URL is required for the postgres store backend")
            })?;

            let db_pool = database::setup_database(database_url, config.max_connections).await?;
            info!("PostgreSQL connection established");

            database::run_migrations(&db_pool).await?;
            info!("Database migrations completed");

            Ok(Arc::new(PgEmployeeStore::new(db_pool)))
        }
        StoreBackend::Memory => Ok(Arc::new(InMemoryEmployeeStore::new())),
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
pub async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, shutting down gracefully");
        },
        _ = terminate => {
            info!("Received SIGTERM signal, shutting down gracefully");
        },
    }
}
