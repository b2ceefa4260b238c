//! # contract-api
//!
//! Runs the item/user demonstration service.
//!
//! ```bash
//! contract-api --config service.toml --port 8080
//! RUST_LOG=debug contract-api
//! ```

use anyhow::Context;
use clap::Parser;
use contract_api::config::ServiceConfig;
use contract_api::http::{ApiServer, AppState};
use contract_api::lifecycle::ApiSystem;
use resource_framework::tracing::setup_tracing;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "contract-api")]
#[command(about = "In-memory item/user API for contract testing", long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen host, overrides the configured bind address
    #[arg(long)]
    host: Option<String>,

    /// Listen port, overrides the configured bind address
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ServiceConfig::load(args.config.as_deref())
        .context("loading configuration")?
        .with_listen(args.host.as_deref(), args.port)
        .context("applying command-line overrides")?;

    setup_tracing(&config.logging.level);
    info!(bind_address = %config.server.bind_address, "Starting contract-api");

    let system = Arc::new(
        ApiSystem::start(&config.store)
            .await
            .context("starting stores")?,
    );

    let server = ApiServer::new(AppState::new(system.clone(), config));
    server.run().await?;

    match Arc::try_unwrap(system) {
        Ok(system) => system.shutdown().await.context("stopping stores")?,
        Err(_) => warn!("Stores still referenced; skipping orderly shutdown"),
    }
    Ok(())
}
