mod config;
mod persistence;
mod service;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use persistence::{PlantRepository, PostgresPlantRepository};

/// HTTP API for the hortus plant manager.
///
/// Store settings come from `HORTUS_*` environment variables.
#[derive(Parser, Debug)]
#[command(name = "hortus-api", version, about)]
struct Cli {
    /// Address to listen on, overriding HORTUS_LISTEN_ADDR
    #[arg(long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting hortus API server");

    let config = config::Config::from_env()
        .inspect_err(|e| tracing::error!("Invalid configuration: {}", e))
        .context("reading configuration")?;
    let listen_addr = cli.listen.unwrap_or(config.listen_addr);

    let repo = PostgresPlantRepository::connect(&config.store)
        .await
        .inspect_err(|e| tracing::error!("Failed to open plant store: {}", e))
        .context("connecting to the plant store")?;
    tracing::info!(schema = %config.store.schema, "Connected to plant store");
    let repo = Arc::new(repo);

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("binding {listen_addr}"))?;
    tracing::info!("Server listening on {}", listen_addr);

    axum::serve(listener, service::router(repo.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    repo.close().await;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
