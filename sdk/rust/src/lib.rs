//! HTTP client for the Modexia ISP Enterprise API.

mod client;

pub use client::{ApiClient, Banner, ClientError};
