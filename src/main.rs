use anyhow::{ensure, Context};
use clap::Parser;
use crud_seller_client::config;
use crud_seller_client::http;
use crud_seller_client::lifecycle::{setup_tracing, AppSystem};
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// REST service managing sellers and their clients.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Configuration file; skipped when it does not exist.
    #[arg(short, long, default_value = "crud.toml")]
    config: PathBuf,

    /// Address to listen on, overriding `server.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut config = config::load(&args.config)
        .with_context(|| format!("Failed to load configuration from {}", args.config.display()))?;
    config.apply_cli_overrides(args.bind);
    ensure!(config.store.buffer_size > 0, "store.buffer_size must be positive");

    setup_tracing(&config.log.filter);

    let system = AppSystem::new(config.store.buffer_size);
    let listener = TcpListener::bind(&config.server.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind_address))?;
    info!(address = %config.server.bind_address, "Listening");

    http::serve(listener, system.state(), shutdown_signal())
        .await
        .context("Server error")?;

    system.shutdown().await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
