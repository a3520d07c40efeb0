//! Route handlers.
//!
//! Listing handlers validate their filters first, then serialize the scan
//! result while the store borrow is still alive.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{Method, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::query::{self, CustomerParams, FilterParam, InvoiceParams, TicketParams};
use crate::store::{CustomerStatus, InvoiceStatus, TicketPriority, TicketStatus};

pub const SERVICE_NAME: &str = "Modexia ISP Enterprise API";

#[derive(Debug, Serialize)]
pub struct Banner {
    pub message: String,
    pub version: &'static str,
    pub documentation: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub records: BTreeMap<&'static str, usize>,
}

pub async fn root() -> Json<Banner> {
    Json(Banner {
        message: format!("Welcome to {SERVICE_NAME}"),
        version: env!("CARGO_PKG_VERSION"),
        documentation: "/openapi.json",
        note: "Modexia Inc. is a fictional company for demonstration purposes",
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "operational",
        version: env!("CARGO_PKG_VERSION"),
        records: state.store.counts().into_iter().collect(),
    })
}

pub async fn list_customers(
    State(state): State<AppState>,
    params: Result<Query<CustomerParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params?;
    let status = CustomerStatus::parse_opt(params.status.as_deref())?;
    Ok(Json(query::list_customers(&state.store, status)).into_response())
}

pub async fn list_employees(State(state): State<AppState>) -> Response {
    Json(query::list_employees(&state.store)).into_response()
}

pub async fn list_invoices(
    State(state): State<AppState>,
    params: Result<Query<InvoiceParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params?;
    let status = InvoiceStatus::parse_opt(params.status.as_deref())?;
    Ok(Json(query::list_invoices(&state.store, status)).into_response())
}

pub async fn list_tickets(
    State(state): State<AppState>,
    params: Result<Query<TicketParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params?;
    // Both filters are validated before the scan
    let priority = TicketPriority::parse_opt(params.priority.as_deref())?;
    let status = TicketStatus::parse_opt(params.status.as_deref())?;
    Ok(Json(query::list_tickets(&state.store, priority, status)).into_response())
}

pub async fn list_network_infrastructure(State(state): State<AppState>) -> Response {
    Json(query::list_network_infrastructure(&state.store)).into_response()
}

pub async fn list_equipment_inventory(State(state): State<AppState>) -> Response {
    Json(query::list_equipment_inventory(&state.store)).into_response()
}

pub async fn list_sla_metrics(State(state): State<AppState>) -> Response {
    Json(query::list_sla_metrics(&state.store)).into_response()
}

pub async fn list_vendor_contracts(State(state): State<AppState>) -> Response {
    Json(query::list_vendor_contracts(&state.store)).into_response()
}

pub async fn list_bandwidth_usage(State(state): State<AppState>) -> Response {
    Json(query::list_bandwidth_usage(&state.store)).into_response()
}

pub async fn list_products(State(state): State<AppState>) -> Response {
    Json(query::list_products(&state.store)).into_response()
}

/// Fallback for paths no route claims.
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    tracing::warn!(method = %method, path = %uri.path(), "No route matched");
    ApiError::NotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
