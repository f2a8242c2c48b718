//! REST API for evaluation results.
//!
//! Provides two GET endpoints over one completed evaluation:
//! - `/state` — scenario config, derived quantities, and metrics
//! - `/cashflow` — per-year cash-flow rows with optional range filtering

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::config::ProjectConfig;
use crate::tea::timeline::YearRow;
use crate::tea::types::{DerivedQuantities, Metrics};

/// Immutable application state shared across all request handlers.
///
/// Constructed once after the evaluation completes and wrapped in `Arc` —
/// no locks needed since all data is read-only.
pub struct AppState {
    /// Scenario configuration used for this evaluation.
    pub config: ProjectConfig,
    /// Derived engineering and cost quantities.
    pub derived: DerivedQuantities,
    /// Summary financial metrics.
    pub metrics: Metrics,
    /// Per-year cash-flow rows.
    pub years: Vec<YearRow>,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/state", get(handlers::get_state))
        .route("/cashflow", get(handlers::get_cashflow))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}
