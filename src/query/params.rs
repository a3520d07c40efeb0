//! Query-string parameters for filtered listings.
//!
//! Raw values arrive as strings and are checked against the closed set of
//! allowed values before any collection is scanned. Matching is exact and
//! case-sensitive; an empty value is rejected like any other unknown value.

use serde::Deserialize;
use thiserror::Error;

use crate::store::{CustomerStatus, InvoiceStatus, TicketPriority, TicketStatus};

// Each route declares only its own keys; anything else in the query string
// is skipped by the deserializer, repeated or not.

/// Raw filters accepted by `/customers`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerParams {
    pub status: Option<String>,
}

/// Raw filters accepted by `/invoices`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvoiceParams {
    pub status: Option<String>,
}

/// Raw filters accepted by `/tickets`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TicketParams {
    pub priority: Option<String>,
    pub status: Option<String>,
}

/// A query-parameter value outside its declared enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "invalid value `{value}` for query parameter `{parameter}`; expected one of: {}",
    .allowed.join(", ")
)]
pub struct ParamError {
    pub parameter: &'static str,
    pub value: String,
    pub allowed: Vec<&'static str>,
}

/// A closed set of values accepted by one query parameter.
pub trait FilterParam: Sized + Copy + 'static {
    /// Query-string key.
    const PARAMETER: &'static str;

    fn variants() -> &'static [Self];

    fn label(&self) -> &'static str;

    fn allowed() -> Vec<&'static str> {
        Self::variants().iter().map(|v| v.label()).collect()
    }

    fn parse(value: &str) -> Result<Self, ParamError> {
        Self::variants()
            .iter()
            .copied()
            .find(|v| v.label() == value)
            .ok_or_else(|| ParamError {
                parameter: Self::PARAMETER,
                value: value.to_string(),
                allowed: Self::allowed(),
            })
    }

    /// Parses an optional raw value; absence means "no filter".
    fn parse_opt(value: Option<&str>) -> Result<Option<Self>, ParamError> {
        value.map(Self::parse).transpose()
    }
}

impl FilterParam for CustomerStatus {
    const PARAMETER: &'static str = "status";

    fn variants() -> &'static [Self] {
        &CustomerStatus::ALL
    }

    fn label(&self) -> &'static str {
        self.as_str()
    }
}

impl FilterParam for InvoiceStatus {
    const PARAMETER: &'static str = "status";

    fn variants() -> &'static [Self] {
        &InvoiceStatus::ALL
    }

    fn label(&self) -> &'static str {
        self.as_str()
    }
}

impl FilterParam for TicketPriority {
    const PARAMETER: &'static str = "priority";

    fn variants() -> &'static [Self] {
        &TicketPriority::ALL
    }

    fn label(&self) -> &'static str {
        self.as_str()
    }
}

impl FilterParam for TicketStatus {
    const PARAMETER: &'static str = "status";

    fn variants() -> &'static [Self] {
        &TicketStatus::ALL
    }

    fn label(&self) -> &'static str {
        self.as_str()
    }
}
