//! Discounting and metric extraction from a completed cash-flow timeline.

use super::irr;
use super::timeline::CashFlowTimeline;
use super::types::Metrics;

/// Year-end discount factors `1 / (1 + rate)^y` for `y = 0..total_years`.
///
/// Year 0 is undiscounted.
pub fn discount_factors(rate: f64, total_years: usize) -> Vec<f64> {
    (0..total_years)
        .map(|year| 1.0 / (1.0 + rate).powi(year as i32))
        .collect()
}

/// Discounted sum of `flows` at `rate`.
pub fn npv(flows: &[f64], rate: f64) -> f64 {
    discount_factors(rate, flows.len())
        .iter()
        .zip(flows)
        .map(|(df, flow)| flow * df)
        .sum()
}

/// Smallest year index with non-negative cumulative undiscounted cash flow,
/// or `None` if never reached within the horizon.
fn payback_year(net_flows: &[f64]) -> Option<usize> {
    let mut cumulative = 0.0;
    for (year, flow) in net_flows.iter().enumerate() {
        cumulative += flow;
        if cumulative >= 0.0 {
            return Some(year);
        }
    }
    None
}

impl Metrics {
    /// Computes all summary metrics from the complete timeline.
    ///
    /// Computed post-hoc from the per-year vectors to keep the reported
    /// metrics consistent with the exported cash-flow table.
    ///
    /// LCOE isolates electricity revenue from every other flow: it is the
    /// constant $/MWh price that would zero the NPV of the non-electricity
    /// cash flows against discounted generation. When no generation is
    /// discounted into the horizon it falls back to 0.0 rather than
    /// dividing by zero.
    pub fn from_timeline(timeline: &CashFlowTimeline, cost_of_capital: f64) -> Self {
        let factors = discount_factors(cost_of_capital, timeline.total_years);

        let npv_m: f64 = timeline
            .net_m
            .iter()
            .zip(&factors)
            .map(|(flow, df)| flow * df)
            .sum();

        let npv_electricity_m: f64 = timeline
            .electricity_m
            .iter()
            .zip(&factors)
            .map(|(flow, df)| flow * df)
            .sum();

        let discounted_generation_mwh: f64 = timeline
            .generation_mwh
            .iter()
            .zip(&factors)
            .map(|(mwh, df)| mwh * df)
            .sum();

        let npv_non_electricity_m = npv_m - npv_electricity_m;
        let lcoe_usd_mwh = if discounted_generation_mwh > 0.0 {
            -npv_non_electricity_m * 1e6 / discounted_generation_mwh
        } else {
            0.0
        };

        Self {
            lcoe_usd_mwh,
            npv_m,
            irr: irr::irr(&timeline.net_m),
            payback_year: payback_year(&timeline.net_m),
        }
    }
}
