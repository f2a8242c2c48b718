//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::AppState;
use super::types::{CashflowQuery, ErrorResponse, StateResponse};
use crate::tea::timeline::YearRow;

/// Returns scenario config, derived quantities, and metrics.
///
/// `GET /state` → 200 + `StateResponse` JSON
pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<StateResponse> {
    Json(StateResponse {
        config: state.config.clone(),
        derived: state.derived.clone(),
        metrics: state.metrics.clone(),
    })
}

/// Returns per-year cash-flow rows, optionally filtered by year range.
///
/// `GET /cashflow` → 200 + `Vec<YearRow>` JSON
/// `GET /cashflow?from=N&to=M` → filtered range (inclusive)
/// `GET /cashflow?from=10&to=5` → 400 + `ErrorResponse`
pub async fn get_cashflow(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CashflowQuery>,
) -> impl IntoResponse {
    let from = query.from.unwrap_or(0);
    let to = query.to.unwrap_or(usize::MAX);

    if from > to {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("`from` ({from}) must be <= `to` ({to})"),
            }),
        ));
    }

    let rows: Vec<YearRow> = state
        .years
        .iter()
        .filter(|r| r.year >= from && r.year <= to)
        .cloned()
        .collect();

    Ok(Json(rows))
}
