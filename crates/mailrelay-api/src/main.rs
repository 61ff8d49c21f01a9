use mailrelay_api::{ApiContext, server};
use mailrelay_core::Config;
use mailrelay_core::constants::{DEFAULT_LOG_FILTER, LISTEN_ADDR};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber for structured logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .init();

    info!(version = mailrelay_core::VERSION, "Starting Mailrelay API");

    // Nothing is served unless every required variable is present
    let config = Config::from_env().inspect_err(|e| error!(error = %e, "Refusing to start"))?;

    let ctx = ApiContext::new(&config).await;

    server::serve(ctx, LISTEN_ADDR).await?;

    info!("Mailrelay API shutdown complete");
    Ok(())
}
