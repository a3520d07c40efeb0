//! Record store subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     embedded seed/records.json  (or [store].seed_path)
//!     → serde_json (shape checked against models.rs)
//!     → RecordStore (immutable)
//!     → shared via Arc to the HTTP layer
//! ```
//!
//! # Design Decisions
//! - Built once before the listener is bound; never mutated afterwards
//! - No interior mutability, so concurrent readers need no locks
//! - Malformed seed data is a startup error, never a request-time error
//! - Key uniqueness holds by authorship only and is not checked

pub mod models;

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use models::{
    BandwidthUsage, Customer, CustomerStatus, Employee, Equipment, Invoice, InvoiceStatus,
    NetworkNode, Product, SlaMetric, Ticket, TicketPriority, TicketStatus, VendorContract,
};

const SEED_RECORDS: &str = include_str!("seed/records.json");

/// Errors that can occur while building the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed seed data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The ten read-only collections, in seed order.
///
/// Collections absent from a seed document load as empty, which lets tests
/// build small fixture stores.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecordStore {
    customers: Vec<Customer>,
    employees: Vec<Employee>,
    invoices: Vec<Invoice>,
    tickets: Vec<Ticket>,
    network_infrastructure: Vec<NetworkNode>,
    equipment_inventory: Vec<Equipment>,
    sla_metrics: Vec<SlaMetric>,
    vendor_contracts: Vec<VendorContract>,
    bandwidth_usage: Vec<BandwidthUsage>,
    products: Vec<Product>,
}

impl RecordStore {
    /// Build the store from the seed data compiled into the binary.
    pub fn seeded() -> Result<Self, StoreError> {
        Self::from_json(SEED_RECORDS)
    }

    /// Build the store from a JSON document keyed by collection name.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the store from a JSON document on disk.
    pub fn from_path(path: &Path) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Load from `seed_path` when given, otherwise from the embedded seed.
    pub fn load(seed_path: Option<&Path>) -> Result<Self, StoreError> {
        let store = match seed_path {
            Some(path) => Self::from_path(path)?,
            None => Self::seeded()?,
        };

        for (collection, count) in store.counts() {
            tracing::debug!(collection, count, "Collection loaded");
        }

        Ok(store)
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn network_infrastructure(&self) -> &[NetworkNode] {
        &self.network_infrastructure
    }

    pub fn equipment_inventory(&self) -> &[Equipment] {
        &self.equipment_inventory
    }

    pub fn sla_metrics(&self) -> &[SlaMetric] {
        &self.sla_metrics
    }

    pub fn vendor_contracts(&self) -> &[VendorContract] {
        &self.vendor_contracts
    }

    pub fn bandwidth_usage(&self) -> &[BandwidthUsage] {
        &self.bandwidth_usage
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Record count per collection, named as on the wire.
    pub fn counts(&self) -> [(&'static str, usize); 10] {
        [
            ("customers", self.customers.len()),
            ("employees", self.employees.len()),
            ("invoices", self.invoices.len()),
            ("tickets", self.tickets.len()),
            ("network_infrastructure", self.network_infrastructure.len()),
            ("equipment_inventory", self.equipment_inventory.len()),
            ("sla_metrics", self.sla_metrics.len()),
            ("vendor_contracts", self.vendor_contracts.len()),
            ("bandwidth_usage", self.bandwidth_usage.len()),
            ("products", self.products.len()),
        ]
    }

    /// Total number of records across all collections.
    pub fn total_records(&self) -> usize {
        self.counts().iter().map(|(_, count)| count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_loads_every_collection() {
        let store = RecordStore::seeded().unwrap();

        assert_eq!(store.customers().len(), 4);
        assert_eq!(store.employees().len(), 10);
        assert_eq!(store.invoices().len(), 6);
        assert_eq!(store.tickets().len(), 4);
        assert_eq!(store.network_infrastructure().len(), 4);
        assert_eq!(store.equipment_inventory().len(), 4);
        assert_eq!(store.sla_metrics().len(), 3);
        assert_eq!(store.vendor_contracts().len(), 4);
        assert_eq!(store.bandwidth_usage().len(), 3);
        assert_eq!(store.products().len(), 4);
        assert_eq!(store.total_records(), 46);
    }

    #[test]
    fn test_seed_preserves_authored_order() {
        let store = RecordStore::seeded().unwrap();
        let ids: Vec<&str> = store
            .customers()
            .iter()
            .map(|c| c.customer_id.as_str())
            .collect();
        assert_eq!(ids, ["CUST-10001", "CUST-10045", "CUST-10082", "CUST-10091"]);

        let skus: Vec<&str> = store.products().iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, ["MDX-HOME-50", "MDX-BIZ-100", "MDX-ENT-1G", "MDX-DARK"]);
    }

    #[test]
    fn test_seed_keys_are_unique() {
        let store = RecordStore::seeded().unwrap();
        let mut ids: Vec<&str> = store
            .tickets()
            .iter()
            .map(|t| t.ticket_id.as_str())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), store.tickets().len());
    }

    #[test]
    fn test_partial_fixture_leaves_other_collections_empty() {
        let json = r#"{
            "products": [
                { "sku": "T-1", "product_name": "Test", "category": "Lab",
                  "bandwidth": "1 Mbps", "monthly_cost_usd": 1.5, "sla_uptime": "90%" }
            ]
        }"#;
        let store = RecordStore::from_json(json).unwrap();
        assert_eq!(store.products().len(), 1);
        assert!(store.customers().is_empty());
        assert_eq!(store.total_records(), 1);
    }

    #[test]
    fn test_malformed_seed_is_rejected() {
        // Ticket priority outside the closed set
        let json = r#"{ "tickets": [ {
            "ticket_id": "T", "customer_id": "C", "customer_name": "N",
            "issue_type": "I", "priority": "Urgent", "status": "Open",
            "created_date": "d", "assigned_to": "a", "description": "x",
            "estimated_resolution": "e", "sla_breach": false,
            "affected_services": [], "location": "l" } ] }"#;
        assert!(matches!(
            RecordStore::from_json(json),
            Err(StoreError::Parse(_))
        ));

        assert!(RecordStore::from_json(r#"{ "widgets": [] }"#).is_err());
    }

    #[test]
    fn test_missing_seed_file() {
        let err = RecordStore::from_path(Path::new("/nonexistent/records.json")).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
