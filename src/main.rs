use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use employee_directory::{router::build_router, startup, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Also loads .env when present
    let config = Config::from_env()?;
    init_tracing(&config);
    info!("Loaded configuration for environment: {}", config.environment);

    let app_state = startup::initialize_app(&config).await?;
    let app = build_router(app_state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Employee directory listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

/// JSON output in production, human-readable everywhere else.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "employee_directory={level},tower_http={level}",
            level = config.log_level
        ))
    });

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(false)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
