//! Startup orchestration.
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The record store is fully built before the listener is bound, so no
//!   connection can be accepted against a partial store

use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{ApiConfig, ObservabilityConfig};
use crate::observability::metrics;
use crate::store::{RecordStore, StoreError};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("record store: {0}")]
    Store(#[from] StoreError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid metrics address {0}")]
    MetricsAddress(String),

    #[error("metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
}

/// Everything the server needs before it can accept traffic.
pub struct Prepared {
    pub store: Arc<RecordStore>,
    pub listener: TcpListener,
}

/// Start the Prometheus exporter when enabled. An exporter that was asked
/// for but cannot listen is a startup failure.
pub fn start_metrics(config: &ObservabilityConfig) -> Result<(), StartupError> {
    if !config.metrics_enabled {
        return Ok(());
    }

    let addr = config
        .metrics_address
        .parse()
        .map_err(|_| StartupError::MetricsAddress(config.metrics_address.clone()))?;
    metrics::init_metrics(addr)?;
    Ok(())
}

/// Build the store, then bind the listener.
pub async fn prepare(config: &ApiConfig) -> Result<Prepared, StartupError> {
    let store = RecordStore::load(config.store.seed_path.as_deref())?;
    tracing::info!(
        records = store.total_records(),
        source = %config
            .store
            .seed_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "embedded".to_string()),
        "Record store initialized"
    );

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: config.listener.bind_address.clone(),
            source,
        })?;

    Ok(Prepared {
        store: Arc::new(store),
        listener,
    })
}
