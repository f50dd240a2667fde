use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::signal;
use tracing::info;

use warehouse_admin_api::{config, handlers, seed, AppState, EntityStore};

#[derive(Debug, Parser)]
#[command(name = "warehouse-admin-api", version, about = "Warehouse administration API server")]
struct Cli {
    /// Bind address, overrides the configured host.
    #[arg(long)]
    host: Option<String>,

    /// Bind port, overrides the configured port.
    #[arg(long)]
    port: Option<u16>,

    /// Start with an empty store instead of the demo data set.
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = config::load_config().context("failed to load configuration")?;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if cli.no_seed {
        config.seed_demo_data = false;
    }
    config::init_tracing(&config.log_level);

    let store = EntityStore::new().shared();
    let state = Arc::new(AppState::new(config, store));
    if state.config.seed_demo_data {
        seed::seed_demo_data(&state.services)
            .await
            .context("failed to seed demo data")?;
    }

    let addr = state.config.server_addr()?;
    let app = handlers::api_router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

async fn shutdown_signal() {
    if signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
