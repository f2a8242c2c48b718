//! API response and query types.

use serde::{Deserialize, Serialize};

use crate::config::ProjectConfig;
use crate::tea::types::{DerivedQuantities, Metrics};

/// Combined state response: scenario, derived quantities, and metrics.
///
/// IRR and payback serialize as JSON `null` when undefined; clients render
/// those as "N/A".
#[derive(Debug, Serialize)]
pub struct StateResponse {
    /// Scenario configuration.
    pub config: ProjectConfig,
    /// Derived engineering and cost quantities.
    pub derived: DerivedQuantities,
    /// Summary financial metrics.
    pub metrics: Metrics,
}

/// Optional range query parameters for the cashflow endpoint.
#[derive(Debug, Deserialize)]
pub struct CashflowQuery {
    /// Start year (inclusive).
    pub from: Option<usize>,
    /// End year (inclusive).
    pub to: Option<usize>,
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
