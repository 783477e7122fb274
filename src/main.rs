use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

mod client;
mod config;
mod connectivity;
mod transport;

use client::PingClient;
use config::AppConfig;
use connectivity::SystemConnectivity;
use transport::HttpTransport;

#[derive(Debug, Parser)]
#[command(name = "ping_gate", about = "Connectivity-gated ping client")]
struct Args {
    /// Path to a TOML config file; the embedded default is used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load_default()?,
    };
    info!("pinging {}", config.network.base_url);

    // Explicit object graph, assembled once at startup.
    let transport = Arc::new(HttpTransport::new(Duration::from_secs(
        config.network.request_timeout_secs,
    ))?);
    let connectivity = Arc::new(SystemConnectivity::new(&config.connectivity));
    let client = PingClient::new(transport, connectivity, &config.network.base_url);

    // The ping runs as its own task; dropping or aborting this handle is how
    // a caller cancels an in-flight call.
    let ping_task = tokio::spawn(async move { client.ping().await });

    match ping_task.await? {
        Ok(success) => {
            info!(
                "ping succeeded: status={} message={:?}",
                success.status, success.response.message
            );
            Ok(())
        }
        Err(e) => {
            error!("ping failed: {:#}", anyhow::Error::new(e));
            std::process::exit(1);
        }
    }
}
