//! Modexia ISP Enterprise API Library
//!
//! A read-only HTTP API over ten seeded collections of enterprise records.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ─────────────▶ http::server ──▶ http::handlers ──▶ query ──▶ store
//!                    (layers: request id,   (validate     (AND of     (immutable,
//!                     trace, cors, timeout)  filters)      equality)   Arc-shared)
//!     Client Response
//!     ◀───────────── JSON (seed order) ◀──────────────────────────────┘
//!
//!     Cross-cutting: config (TOML) · observability (tracing, metrics)
//!                    lifecycle (store → bind → serve → graceful shutdown)
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod query;
pub mod store;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::schema::ApiConfig;
pub use http::ApiServer;
pub use lifecycle::Shutdown;
pub use store::RecordStore;
