//! Query subsystem: one listing operation per collection.
//!
//! # Data Flow
//! ```text
//! {Customer,Invoice,Ticket}Params (raw strings)
//!     → params.rs (validate against closed sets)
//!     → filter.rs (build AND of equality filters)
//!     → scan over RecordStore collection
//!     → Vec<&Record> in seed order
//! ```
//!
//! # Design Decisions
//! - Validation happens before scanning; a bad value never reaches the store
//! - Unfiltered listings borrow the collection slice directly
//! - Every operation is a pure function of (store, filters)

pub mod filter;
pub mod params;

use crate::store::{
    BandwidthUsage, Customer, CustomerStatus, Employee, Equipment, Invoice, InvoiceStatus,
    NetworkNode, Product, RecordStore, SlaMetric, Ticket, TicketPriority, TicketStatus,
    VendorContract,
};
use self::filter::{scan, AllOf};

pub use params::{CustomerParams, FilterParam, InvoiceParams, ParamError, TicketParams};

/// Customers, optionally restricted to one status.
pub fn list_customers(store: &RecordStore, status: Option<CustomerStatus>) -> Vec<&Customer> {
    let mut filter: AllOf<Customer> = AllOf::new();
    filter.push_eq("status", status, |c: &Customer| c.status);
    scan(store.customers(), &filter)
}

pub fn list_employees(store: &RecordStore) -> &[Employee] {
    store.employees()
}

/// Invoices, optionally restricted to one status.
pub fn list_invoices(store: &RecordStore, status: Option<InvoiceStatus>) -> Vec<&Invoice> {
    let mut filter: AllOf<Invoice> = AllOf::new();
    filter.push_eq("status", status, |i: &Invoice| i.status);
    scan(store.invoices(), &filter)
}

/// Tickets matching every supplied filter.
pub fn list_tickets(
    store: &RecordStore,
    priority: Option<TicketPriority>,
    status: Option<TicketStatus>,
) -> Vec<&Ticket> {
    let mut filter: AllOf<Ticket> = AllOf::new();
    filter.push_eq("priority", priority, |t: &Ticket| t.priority);
    filter.push_eq("status", status, |t: &Ticket| t.status);
    scan(store.tickets(), &filter)
}

pub fn list_network_infrastructure(store: &RecordStore) -> &[NetworkNode] {
    store.network_infrastructure()
}

pub fn list_equipment_inventory(store: &RecordStore) -> &[Equipment] {
    store.equipment_inventory()
}

pub fn list_sla_metrics(store: &RecordStore) -> &[SlaMetric] {
    store.sla_metrics()
}

pub fn list_vendor_contracts(store: &RecordStore) -> &[VendorContract] {
    store.vendor_contracts()
}

pub fn list_bandwidth_usage(store: &RecordStore) -> &[BandwidthUsage] {
    store.bandwidth_usage()
}

pub fn list_products(store: &RecordStore) -> &[Product] {
    store.products()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> RecordStore {
        RecordStore::seeded().unwrap()
    }

    #[test]
    fn test_customers_by_status() {
        let store = store();

        let suspended = list_customers(&store, Some(CustomerStatus::Suspended));
        assert_eq!(suspended.len(), 1);
        assert_eq!(suspended[0].customer_id, "CUST-10045");

        let active: Vec<&str> = list_customers(&store, Some(CustomerStatus::Active))
            .iter()
            .map(|c| c.customer_id.as_str())
            .collect();
        assert_eq!(active, ["CUST-10001", "CUST-10082"]);

        assert!(list_customers(&store, Some(CustomerStatus::Churned)).is_empty());
    }

    #[test]
    fn test_customers_unfiltered_is_whole_collection() {
        let store = store();
        let all = list_customers(&store, None);
        assert_eq!(all.len(), store.customers().len());
        for (listed, stored) in all.iter().zip(store.customers()) {
            assert_eq!(*listed, stored);
        }
    }

    #[test]
    fn test_customer_filter_is_order_preserving_subsequence() {
        let store = store();
        for status in CustomerStatus::ALL {
            let expected: Vec<&Customer> = store
                .customers()
                .iter()
                .filter(|c| c.status == status)
                .collect();
            assert_eq!(list_customers(&store, Some(status)), expected);
        }
    }

    #[test]
    fn test_invoice_partition_is_complete() {
        let store = store();
        let mut ids: Vec<&str> = InvoiceStatus::ALL
            .iter()
            .flat_map(|s| list_invoices(&store, Some(*s)))
            .map(|i| i.invoice_id.as_str())
            .collect();
        ids.sort_unstable();

        let mut all: Vec<&str> = list_invoices(&store, None)
            .iter()
            .map(|i| i.invoice_id.as_str())
            .collect();
        all.sort_unstable();

        assert_eq!(ids, all);
    }

    #[test]
    fn test_overdue_invoice() {
        let store = store();
        let overdue = list_invoices(&store, Some(InvoiceStatus::Overdue));
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].invoice_id, "INV-25-045");
    }

    #[test]
    fn test_tickets_conjunctive() {
        let store = store();
        let hits = list_tickets(
            &store,
            Some(TicketPriority::Critical),
            Some(TicketStatus::InProgress),
        );
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].ticket_id, "TKT-2025-001");

        let in_progress = list_tickets(&store, None, Some(TicketStatus::InProgress));
        let ids: Vec<&str> = in_progress.iter().map(|t| t.ticket_id.as_str()).collect();
        assert_eq!(ids, ["TKT-2025-001", "TKT-2025-004"]);
    }

    #[test]
    fn test_ticket_filters_are_independent() {
        let store = store();
        for priority in TicketPriority::ALL {
            for status in TicketStatus::ALL {
                let both = list_tickets(&store, Some(priority), Some(status));
                let expected: Vec<&Ticket> = list_tickets(&store, Some(priority), None)
                    .into_iter()
                    .filter(|t| t.status == status)
                    .collect();
                assert_eq!(both, expected);

                let other_way: Vec<&Ticket> = list_tickets(&store, None, Some(status))
                    .into_iter()
                    .filter(|t| t.priority == priority)
                    .collect();
                assert_eq!(both, other_way);
            }
        }
    }

    #[test]
    fn test_unfiltered_collections() {
        let store = store();
        assert_eq!(list_employees(&store).len(), 10);
        assert_eq!(list_network_infrastructure(&store).len(), 4);
        assert_eq!(list_equipment_inventory(&store).len(), 4);
        assert_eq!(list_sla_metrics(&store).len(), 3);
        assert_eq!(list_vendor_contracts(&store).len(), 4);
        assert_eq!(list_bandwidth_usage(&store).len(), 3);
        assert_eq!(list_products(&store).len(), 4);
    }
}
