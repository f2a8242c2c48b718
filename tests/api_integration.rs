//! Integration tests for the REST API surface.

#![cfg(feature = "api")]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::util::ServiceExt;

use dualwell_tea::api::{AppState, router};
use dualwell_tea::config::ProjectConfig;
use dualwell_tea::tea::engine::evaluate;

/// Keys every cashflow row must expose.
const CASHFLOW_KEYS: &[&str] = &[
    "year",
    "capex_m",
    "electricity_m",
    "credit_45q_m",
    "carbon_credit_m",
    "opex_m",
    "co2_purchase_m",
    "tax_m",
    "net_m",
    "cumulative_m",
];

fn state_for(preset: &str) -> Arc<AppState> {
    let config = ProjectConfig::from_preset(preset).expect("preset loads");
    let evaluation = evaluate(&config.to_inputs()).expect("preset evaluates");
    Arc::new(AppState {
        config,
        derived: evaluation.derived,
        metrics: evaluation.metrics,
        years: evaluation.timeline.rows(),
    })
}

async fn get_json(state: Arc<AppState>, uri: &str) -> (StatusCode, Value) {
    let app = router(state);
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn state_exposes_config_derived_and_metrics() {
    let (status, json) = get_json(state_for("base_case"), "/state").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(json["config"]["finance"]["power_value_usd_mwh"], 95.4);
    assert_eq!(json["derived"]["total_wells"], 14);
    assert!(json["metrics"]["npv_m"].is_number());
    assert!(json["metrics"]["lcoe_usd_mwh"].is_number());
}

#[tokio::test]
async fn cashflow_rows_carry_full_schema() {
    let (status, json) = get_json(state_for("base_case"), "/cashflow").await;
    assert_eq!(status, StatusCode::OK);

    let rows = json.as_array().expect("array of rows");
    assert_eq!(rows.len(), 18);
    for key in CASHFLOW_KEYS {
        assert!(
            rows[0].get(*key).is_some(),
            "row missing key \"{key}\": {:?}",
            rows[0]
        );
    }
}

#[tokio::test]
async fn cashflow_range_is_inclusive() {
    let (status, json) = get_json(state_for("base_case"), "/cashflow?from=0&to=2").await;
    assert_eq!(status, StatusCode::OK);

    let rows = json.as_array().expect("array of rows");
    assert_eq!(rows.len(), 3);
    // Construction years: capex out, no revenue.
    for row in rows {
        assert!(row["capex_m"].as_f64().unwrap_or(0.0) < 0.0);
        assert_eq!(row["electricity_m"], 0.0);
    }
}

#[tokio::test]
async fn cashflow_rejects_inverted_range() {
    let (status, json) = get_json(state_for("base_case"), "/cashflow?from=9&to=2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn undefined_metrics_serialize_as_null() {
    let (status, json) = get_json(state_for("low_price"), "/state").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["metrics"]["irr"].is_null());
    assert!(json["metrics"]["payback_year"].is_null());
}

#[tokio::test]
async fn scaled_state_reports_capex_split() {
    let (status, json) = get_json(state_for("scaled"), "/state").await;
    assert_eq!(status, StatusCode::OK);

    let above = json["derived"]["above_ground_capex_m"].as_f64().unwrap_or(0.0);
    let sub = json["derived"]["subsurface_capex_m"].as_f64().unwrap_or(0.0);
    let total = json["derived"]["total_capex_m"].as_f64().unwrap_or(0.0);
    assert!(above > 0.0);
    assert!(sub > 0.0);
    assert!((total - (above + sub)).abs() < 1e-9);
}
