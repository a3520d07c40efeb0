//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, CORS, timeout, metrics)
//! - Bind server to listener
//! - Stop accepting and drain on shutdown

use axum::{http::HeaderValue, middleware, routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{ApiConfig, CorsConfig};
use crate::http::handlers;
use crate::http::openapi;
use crate::http::request::MakeRequestUuidV4;
use crate::observability::{metrics, spans};
use crate::store::RecordStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RecordStore>,
}

/// HTTP server for the API.
pub struct ApiServer {
    router: Router,
}

impl ApiServer {
    /// Create a new HTTP server over an already initialized store.
    pub fn new(config: ApiConfig, store: Arc<RecordStore>) -> Self {
        let state = AppState { store };
        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ApiConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/", get(handlers::root))
            .route("/health", get(handlers::health))
            .route("/openapi.json", get(openapi::openapi))
            .route("/customers", get(handlers::list_customers))
            .route("/employees", get(handlers::list_employees))
            .route("/invoices", get(handlers::list_invoices))
            .route("/tickets", get(handlers::list_tickets))
            .route("/network-infrastructure", get(handlers::list_network_infrastructure))
            .route("/equipment-inventory", get(handlers::list_equipment_inventory))
            .route("/sla-metrics", get(handlers::list_sla_metrics))
            .route("/vendor-contracts", get(handlers::list_vendor_contracts))
            .route("/bandwidth-usage", get(handlers::list_bandwidth_usage))
            .route("/products", get(handlers::list_products))
            .route_layer(middleware::from_fn(metrics::track_requests))
            .fallback(handlers::not_found)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)));

        if config.cors.enabled {
            router = router.layer(cors_layer(&config.cors));
        }

        router
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(spans::request_span))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
    }

    /// Run the server until a shutdown signal arrives on `shutdown`.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                // A closed channel also means the coordinator is gone
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for driving requests in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Any method and header; origins from config, any origin when none listed.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins = if config.allow_origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            config
                .allow_origins
                .iter()
                .filter_map(|origin| HeaderValue::from_str(origin).ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
