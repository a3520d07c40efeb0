//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Honour the configured level unless `RUST_LOG` overrides it
//! - Select full or compact line format
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Only this crate and tower_http inherit the configured level; others log at warn

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

#[derive(Debug, Error)]
#[error("failed to install tracing subscriber: {0}")]
pub struct LoggingError(#[from] tracing_subscriber::util::TryInitError);

/// Default filter directives for a configured level.
pub fn default_directives(level: &str) -> String {
    format!("warn,modexia_api={level},tower_http={level}")
}

/// Install the global subscriber.
pub fn init_logging(config: &ObservabilityConfig) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.log_level)));

    let compact = config.log_format == "compact";
    let compact_layer = compact.then(|| tracing_subscriber::fmt::layer().compact());
    let full_layer = (!compact).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(filter)
        .with(compact_layer)
        .with(full_layer)
        .try_init()?;

    Ok(())
}
