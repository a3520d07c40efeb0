use clap::Parser;
use std::path::PathBuf;

use modexia_api::config::{load_config, validate_config, ApiConfig, ConfigError};
use modexia_api::lifecycle::{self, Shutdown};
use modexia_api::observability::init_logging;
use modexia_api::ApiServer;

#[derive(Parser)]
#[command(name = "modexia-api")]
#[command(about = "Read-only Modexia ISP Enterprise API", long_about = None)]
struct Args {
    /// TOML configuration file; defaults apply when omitted
    #[arg(short, long, env = "MODEXIA_CONFIG")]
    config: Option<PathBuf>,

    /// Override listener.bind_address
    #[arg(short, long)]
    bind: Option<String>,
}

fn resolve_config(args: &Args) -> Result<ApiConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ApiConfig::default(),
    };

    if let Some(bind) = &args.bind {
        config.listener.bind_address = bind.clone();
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = resolve_config(&args)?;

    init_logging(&config.observability)?;

    tracing::info!("modexia-api v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_file = ?args.config,
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        cors_enabled = config.cors.enabled,
        "Configuration loaded"
    );

    if let Err(e) = lifecycle::start_metrics(&config.observability) {
        tracing::error!(error = %e, "Failed to start metrics exporter");
        return Err(e.into());
    }

    let prepared = lifecycle::prepare(&config).await?;
    tracing::info!(
        address = %prepared.listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.listen_for_signals();

    let server = ApiServer::new(config, prepared.store);
    server.run(prepared.listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
