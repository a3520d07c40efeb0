//! OpenAPI description of the listing routes.
//!
//! Parameter enumerations come from the same closed sets the handlers
//! validate against, so the document cannot drift from runtime behaviour.

use axum::Json;
use serde_json::{json, Map, Value};

use crate::http::handlers::SERVICE_NAME;
use crate::query::FilterParam;
use crate::store::{CustomerStatus, InvoiceStatus, TicketPriority, TicketStatus};

/// One documented listing route.
pub struct RouteDoc {
    pub path: &'static str,
    pub tag: &'static str,
    pub summary: &'static str,
    pub parameters: Vec<Value>,
}

fn route(
    path: &'static str,
    tag: &'static str,
    summary: &'static str,
    parameters: Vec<Value>,
) -> RouteDoc {
    RouteDoc {
        path,
        tag,
        summary,
        parameters,
    }
}

fn enum_param<P: FilterParam>() -> Value {
    json!({
        "name": P::PARAMETER,
        "in": "query",
        "required": false,
        "schema": { "type": "string", "enum": P::allowed() },
    })
}

/// The ten listing routes in declaration order.
pub fn listing_routes() -> Vec<RouteDoc> {
    vec![
        route(
            "/customers",
            "Customer Management",
            "List all customers with optional status filter",
            vec![enum_param::<CustomerStatus>()],
        ),
        route("/employees", "HR", "List all employees", vec![]),
        route(
            "/invoices",
            "Finance",
            "List all invoices with optional status filter",
            vec![enum_param::<InvoiceStatus>()],
        ),
        route(
            "/tickets",
            "Support",
            "List support tickets with optional priority and status filters",
            vec![enum_param::<TicketPriority>(), enum_param::<TicketStatus>()],
        ),
        route(
            "/network-infrastructure",
            "Network Operations",
            "List network infrastructure nodes",
            vec![],
        ),
        route("/equipment-inventory", "Inventory", "List equipment inventory", vec![]),
        route("/sla-metrics", "Performance", "Get SLA performance metrics", vec![]),
        route("/vendor-contracts", "Vendors", "List vendor contracts", vec![]),
        route("/bandwidth-usage", "Analytics", "Get bandwidth usage statistics", vec![]),
        route("/products", "Sales", "Get product catalog", vec![]),
    ]
}

/// Build the OpenAPI 3 document.
pub fn document() -> Value {
    let mut paths = Map::new();
    for doc in listing_routes() {
        paths.insert(
            doc.path.to_string(),
            json!({
                "get": {
                    "tags": [doc.tag],
                    "summary": doc.summary,
                    "parameters": doc.parameters,
                    "responses": {
                        "200": { "description": "Matching records in seed order" },
                        "400": { "description": "Filter value outside its allowed set" },
                    },
                }
            }),
        );
    }

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": SERVICE_NAME,
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Read-only operational records for Modexia Inc. (ISP Division).",
        },
        "paths": paths,
    })
}

pub async fn openapi() -> Json<Value> {
    Json(document())
}
