//! fyyur - venue and artist booking directory
//!
//! `fyyur serve` (the default) runs the web server; `fyyur seed` loads the
//! sample venues, artists and shows into the configured database.

use anyhow::{Context, Result};
use clap::Parser;
use fyyur_common::config::Config;
use fyyur_common::db::{init_database, seed_sample_data};
use fyyur_web::cli::{Cli, Command};
use fyyur_web::{build_router, logging, AppState};
use sqlx::SqlitePool;
use tokio::signal;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.overrides()).context("Failed to load configuration")?;
    logging::init_logging(&config.logging)?;

    // Build identification first, before any database work
    info!(
        "Starting Fyyur v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    if let Some(path) = &config.source {
        info!("Loaded configuration from {}", path.display());
    }
    if config.secret_key_generated {
        warn!("No secret key configured, generated a random one for this run");
    }
    info!("Database: {}", config.database_url);

    let pool = init_database(&config.database_url)
        .await
        .context("Failed to initialize database")?;

    match cli.command() {
        Command::Seed => seed(pool).await,
        Command::Serve => serve(pool, config).await,
    }
}

async fn seed(pool: SqlitePool) -> Result<()> {
    seed_sample_data(&pool)
        .await
        .context("Failed to insert sample data")?;

    pool.close().await;
    Ok(())
}

async fn serve(pool: SqlitePool, config: Config) -> Result<()> {
    let bind_address = config.bind_address();
    let app = build_router(AppState::new(pool, config));

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    info!("Fyyur listening on http://{}", bind_address);
    info!("Health check: http://{}/health", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
