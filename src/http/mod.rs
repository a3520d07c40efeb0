//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (assign request ID)
//!     → handlers.rs (validate filters, query the store)
//!     → error.rs (map rejections to JSON error bodies)
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod openapi;
pub mod request;
pub mod server;

pub use error::ApiError;
pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{ApiServer, AppState};
