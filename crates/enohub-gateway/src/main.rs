//! EnoHub gateway binary.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use enohub_device::{EnOceanDevice, Notifier, NotifierConfig, TelegramDispatcher};
use enohub_eep::ProfileRegistry;
use enohub_gateway::{DeviceTable, GatewayConfig, LogListener};
use tokio::sync::watch;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// EnOcean gateway: decodes ESP3 telegrams and publishes attribute changes.
#[derive(Parser, Debug)]
#[command(name = "enohub", version)]
struct Args {
    /// Path to the YAML configuration file.
    #[arg(short, long, default_value = "enohub.yaml")]
    config: PathBuf,

    /// Override the transport endpoint from the config file.
    #[arg(long)]
    transport: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = GatewayConfig::load(&args.config)?;
    let endpoint = args
        .transport
        .unwrap_or_else(|| config.transport.endpoint.clone());

    let registry = Arc::new(ProfileRegistry::with_defaults());
    let notifier = Arc::new(Notifier::new(NotifierConfig {
        workers: config.notifier.workers,
        queue_depth: config.notifier.queue_depth,
    }));
    notifier.add_listener(Arc::new(LogListener));

    let table = Arc::new(DeviceTable::new(notifier.clone()));
    for device_config in &config.devices {
        let address = device_config.parse_address()?;
        let eep = device_config.parse_eep()?;
        match registry.resolve(eep) {
            Ok(profile) => {
                table.add(Arc::new(EnOceanDevice::bind(
                    address,
                    device_config.name.clone(),
                    profile.as_ref(),
                )));
            }
            Err(err) => {
                error!(device = %device_config.name, %err, "skipping device");
            }
        }
    }
    info!(devices = table.len(), "device table ready");

    let dispatcher = Arc::new(TelegramDispatcher::new(
        registry,
        table.clone(),
        notifier.clone(),
    ));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    ctrlc::set_handler(move || {
        let _ = shutdown_tx.send(true);
    })?;

    let result = enohub_gateway::transport::run(&endpoint, dispatcher, shutdown_rx).await;

    // Drain queued notifications before exiting.
    notifier.shutdown();
    info!("gateway stopped");

    result.map_err(Into::into)
}
