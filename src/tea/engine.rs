//! Evaluation entry point tying derivation, costing, timeline, and metrics
//! together.

use serde::Serialize;

use super::costs;
use super::engineering;
use super::metrics;
use super::timeline::CashFlowTimeline;
use super::types::{DerivedQuantities, InputError, Metrics, ProjectInputs};

/// Complete result of one evaluation: diagnostics, the per-year timeline,
/// and the summary metrics.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub derived: DerivedQuantities,
    pub timeline: CashFlowTimeline,
    pub metrics: Metrics,
}

/// Sensitivity of NPV to the discount rate, for quick reporting.
#[derive(Debug, Clone, Serialize)]
pub struct NpvAtRate {
    pub rate: f64,
    pub npv_m: f64,
}

/// Runs one full evaluation of the project described by `inputs`.
///
/// Pure and deterministic: identical inputs always produce identical output,
/// and independent calls share no state.
///
/// # Errors
///
/// Returns [`InputError`] when `cost_of_capital` is not above -1, or from
/// the engineering derivation when a divisor input is not strictly positive
/// (see [`engineering::derive`]). All other arithmetic is closed-form; an
/// unconverged IRR surfaces as `metrics.irr == None`, not as an error.
pub fn evaluate(inputs: &ProjectInputs) -> Result<Evaluation, InputError> {
    if inputs.cost_of_capital <= -1.0 {
        return Err(InputError::new(
            "cost_of_capital",
            "must be > -1 (discount factor is 1/(1+rate)^year)",
        ));
    }

    let eng = engineering::derive(inputs)?;
    let capex = costs::capex(&inputs.capex, &eng);
    let annual_opex_m = costs::annual_opex(&inputs.opex, &eng);

    let timeline = CashFlowTimeline::build(inputs, &eng, &capex, annual_opex_m);
    let metrics = Metrics::from_timeline(&timeline, inputs.cost_of_capital);

    let derived = DerivedQuantities {
        injected_co2_mtpa: eng.injected_co2_mtpa,
        total_injection_rate_kgs: eng.total_injection_rate_kgs,
        injection_wells: eng.injection_wells,
        total_wells: eng.total_wells,
        heat_generated_mwt: eng.heat_generated_mwt,
        power_generated_mw: eng.power_generated_mw,
        annual_energy_mwh: eng.annual_energy_mwh,
        above_ground_capex_m: capex.above_ground_m,
        subsurface_capex_m: capex.subsurface_m,
        total_capex_m: capex.total_m,
        annual_opex_m,
    };

    Ok(Evaluation {
        derived,
        timeline,
        metrics,
    })
}

/// Re-discounts the evaluation's net cash flow at each of `rates`.
pub fn npv_sensitivity(evaluation: &Evaluation, rates: &[f64]) -> Vec<NpvAtRate> {
    rates
        .iter()
        .map(|&rate| NpvAtRate {
            rate,
            npv_m: metrics::npv(&evaluation.timeline.net_m, rate),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tea::types::{CapexModel, OpexModel};

    fn base_inputs() -> ProjectInputs {
        ProjectInputs {
            captured_and_stored_mtpa: 0.2,
            percent_sequestered: 0.01,
            co2_water_ratio: 1.0,
            max_injection_rate_kgs_per_well: 100.0,
            thermal_extraction_mwt_kgs: 0.7112,
            thermal_efficiency: 0.19,
            capacity_factor: 1.0,
            cost_of_capital: 0.08,
            power_value_usd_mwh: 95.4,
            carbon_price_above_45q: 40.0,
            co2_cost_per_tonne: 100.0,
            tax_credit_45q_usd_tonne: 85.0,
            tax_credit_duration_years: 12,
            tax_rate: None,
            project_life_years: 15,
            capex: CapexModel::Fixed {
                sco2_capex_m: 70.0,
                geo_capex_per_well_m: 10.0,
            },
            opex: OpexModel::Fixed { annual_opex_m: 30.0 },
        }
    }

    #[test]
    fn evaluation_is_deterministic() {
        let inputs = base_inputs();
        let a = evaluate(&inputs).expect("valid inputs");
        let b = evaluate(&inputs).expect("valid inputs");
        assert_eq!(a.metrics.npv_m, b.metrics.npv_m);
        assert_eq!(a.metrics.lcoe_usd_mwh, b.metrics.lcoe_usd_mwh);
        assert_eq!(a.metrics.irr, b.metrics.irr);
        assert_eq!(a.timeline.net_m, b.timeline.net_m);
    }

    #[test]
    fn base_case_diagnostics_are_positive() {
        let evaluation = evaluate(&base_inputs()).expect("valid inputs");
        let d = &evaluation.derived;
        assert!(d.power_generated_mw > 0.0);
        assert!(d.annual_energy_mwh > 0.0);
        assert!(d.total_wells >= 1);
        assert!(d.total_capex_m > 0.0);
        assert!(d.above_ground_capex_m > 0.0);
        assert!(d.subsurface_capex_m > 0.0);
        assert!(d.annual_opex_m > 0.0);
    }

    #[test]
    fn invalid_divisor_propagates() {
        let mut inputs = base_inputs();
        inputs.percent_sequestered = 0.0;
        assert!(evaluate(&inputs).is_err());
    }

    #[test]
    fn pathological_discount_rate_is_rejected() {
        let mut inputs = base_inputs();
        inputs.cost_of_capital = -1.0;
        let err = evaluate(&inputs).expect_err("must fail");
        assert_eq!(err.field, "cost_of_capital");
    }

    #[test]
    fn npv_sensitivity_is_monotone_for_base_case() {
        let evaluation = evaluate(&base_inputs()).expect("valid inputs");
        let points = npv_sensitivity(&evaluation, &[0.02, 0.08, 0.14]);
        assert_eq!(points.len(), 3);
        assert!(points[0].npv_m > points[1].npv_m);
        assert!(points[1].npv_m > points[2].npv_m);
    }
}
