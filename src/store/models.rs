//! Record shapes for the ten collections.
//!
//! Every struct mirrors the JSON wire shape field for field. Unknown fields
//! are rejected when loading seed data so a malformed document fails startup
//! instead of silently dropping data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a customer account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum CustomerStatus {
    Active,
    Suspended,
    Churned,
    Trial,
}

impl CustomerStatus {
    pub const ALL: [CustomerStatus; 4] = [
        CustomerStatus::Active,
        CustomerStatus::Suspended,
        CustomerStatus::Churned,
        CustomerStatus::Trial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "Active",
            CustomerStatus::Suspended => "Suspended",
            CustomerStatus::Churned => "Churned",
            CustomerStatus::Trial => "Trial",
        }
    }
}

/// Settlement state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum InvoiceStatus {
    Paid,
    Overdue,
    Pending,
    Failed,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 4] = [
        InvoiceStatus::Paid,
        InvoiceStatus::Overdue,
        InvoiceStatus::Pending,
        InvoiceStatus::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Overdue => "Overdue",
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Failed => "Failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum TicketPriority {
    Critical,
    High,
    Medium,
    Low,
}

impl TicketPriority {
    pub const ALL: [TicketPriority; 4] = [
        TicketPriority::Critical,
        TicketPriority::High,
        TicketPriority::Medium,
        TicketPriority::Low,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketPriority::Critical => "Critical",
            TicketPriority::High => "High",
            TicketPriority::Medium => "Medium",
            TicketPriority::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum TicketStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 4] = [
        TicketStatus::Open,
        TicketStatus::InProgress,
        TicketStatus::Resolved,
        TicketStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Resolved => "Resolved",
            TicketStatus::Closed => "Closed",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(CustomerStatus, InvoiceStatus, TicketPriority, TicketStatus);

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Customer {
    pub customer_id: String,
    pub account_name: String,
    pub customer_type: String,
    pub subscription_plan: String,
    pub monthly_recurring_revenue: f64,
    pub contract_start_date: String,
    pub contract_end_date: String,
    pub status: CustomerStatus,
    pub billing_cycle: String,
    pub payment_method: String,
    pub primary_contact: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub service_address: String,
    pub installation_date: String,
    pub bandwidth_usage_percent: f64,
    pub support_tier: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Employee {
    pub employee_id: String,
    pub full_name: String,
    pub role: String,
    pub department: String,
    pub email: String,
    pub status: String,
    pub current_shift: String,
    pub leave_balance_days: u32,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Invoice {
    pub invoice_id: String,
    pub client_name: String,
    pub service_type: String,
    pub amount_usd: f64,
    pub due_date: String,
    pub status: InvoiceStatus,
    pub risk_level: String,
    pub account_manager: String,
}

/// Support ticket. `customer_id` is an advisory reference, not a checked relation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Ticket {
    pub ticket_id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub issue_type: String,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub created_date: String,
    pub assigned_to: String,
    pub description: String,
    pub estimated_resolution: String,
    pub sla_breach: bool,
    pub affected_services: Vec<String>,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkNode {
    pub node_id: String,
    pub node_type: String,
    pub location: String,
    pub address: String,
    pub status: String,
    pub capacity_gbps: f64,
    pub current_utilization_percent: f64,
    pub equipment_count: u32,
    pub uptime_percent: f64,
    pub last_maintenance: String,
    pub next_maintenance: String,
    pub power_source: String,
    pub cooling_status: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Equipment {
    pub equipment_id: String,
    pub equipment_type: String,
    pub manufacturer: String,
    pub model: String,
    pub serial_number: String,
    pub purchase_date: String,
    pub warranty_expiry: String,
    pub status: String,
    pub location: String,
    pub assigned_to: String,
    pub cost_usd: f64,
    pub firmware_version: String,
    pub last_updated: String,
}

/// Monthly SLA report for one customer.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SlaMetric {
    pub customer_id: String,
    pub customer_name: String,
    pub service_plan: String,
    pub reporting_period: String,
    pub committed_uptime_percent: f64,
    pub actual_uptime_percent: f64,
    pub total_downtime_minutes: f64,
    pub sla_met: bool,
    pub avg_latency_ms: f64,
    pub committed_latency_ms: f64,
    pub packet_loss_percent: f64,
    pub committed_packet_loss_percent: f64,
    pub incident_count: u32,
    pub mean_time_to_repair_minutes: f64,
    pub credits_issued_usd: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VendorContract {
    pub contract_id: String,
    pub vendor_name: String,
    pub vendor_type: String,
    pub service_description: String,
    pub contract_start_date: String,
    pub contract_end_date: String,
    pub monthly_cost_usd: f64,
    pub annual_cost_usd: f64,
    pub status: String,
    pub payment_terms: String,
    pub contact_person: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub renewal_notice_days: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BandwidthUsage {
    pub customer_id: String,
    pub customer_name: String,
    pub measurement_date: String,
    pub subscribed_bandwidth_mbps: f64,
    pub peak_usage_mbps: f64,
    pub average_usage_mbps: f64,
    pub off_peak_usage_mbps: f64,
    pub total_data_transferred_gb: f64,
    pub utilization_percent: f64,
    pub burst_incidents: u32,
    pub throttling_events: u32,
}

/// Catalog entry. `sku` doubles as the plan code referenced by customers.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Product {
    pub sku: String,
    pub product_name: String,
    pub category: String,
    pub bandwidth: String,
    pub monthly_cost_usd: f64,
    pub sla_uptime: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_status_wire_name() {
        let json = serde_json::to_string(&TicketStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");

        let parsed: TicketStatus = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(parsed, TicketStatus::InProgress);
    }

    #[test]
    fn test_as_str_matches_serde_name() {
        for status in CustomerStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
        for status in TicketStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
        }
    }

    #[test]
    fn test_unknown_field_rejected() {
        let json = r#"{
            "sku": "X", "product_name": "X", "category": "X", "bandwidth": "X",
            "monthly_cost_usd": 1, "sla_uptime": "X", "discount": 5
        }"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }
}
