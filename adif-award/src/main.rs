//! adif-award - ADIF award tier service
//!
//! Accepts ADIF log uploads over HTTP and reports the number of unique
//! callsigns and the award tier they earn.

use std::path::PathBuf;
use std::sync::Arc;

use adif_common::config::{load_config_file, ConfigOverrides, ServiceConfig};
use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use adif_award::{build_router, AdifRecordSource, AdifService, AppState};

/// Command-line arguments for adif-award
#[derive(Parser, Debug)]
#[command(name = "adif-award")]
#[command(about = "ADIF log award tier service")]
#[command(version)]
struct Args {
    /// Address to bind
    #[arg(long, env = "ADIF_AWARD_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "ADIF_AWARD_PORT")]
    port: Option<u16>,

    /// TOML config file (defaults to <config dir>/adif-award/config.toml)
    #[arg(short, long, env = "ADIF_AWARD_CONFIG")]
    config: Option<PathBuf>,

    /// Largest accepted upload, in bytes
    #[arg(long, env = "ADIF_AWARD_MAX_UPLOAD_BYTES")]
    max_upload_bytes: Option<usize>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "ADIF_AWARD_LOG")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_file = load_config_file(args.config.as_deref())
        .context("Failed to load configuration file")?;
    let config_path = config_file.as_ref().map(|(path, _)| path.clone());

    let overrides = ConfigOverrides {
        host: args.host,
        port: args.port,
        max_upload_bytes: args.max_upload_bytes,
        log_level: args.log_level,
    };
    let config = ServiceConfig::resolve(overrides, config_file.map(|(_, toml)| toml))
        .context("Invalid configuration")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting ADIF award service v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    match config_path {
        Some(path) => info!("Configuration: {}", path.display()),
        None => info!("No configuration file found, using defaults"),
    }
    info!("Upload limit: {} bytes", config.max_upload_bytes);

    let service = AdifService::new(Arc::new(AdifRecordSource));
    let state = AppState::new(service, config.max_upload_bytes);
    let app = build_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("adif-award listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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
