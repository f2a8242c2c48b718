//! Shared test fixtures for integration tests.

use dualwell_tea::tea::types::{CapexModel, OpexModel, ProjectInputs};

/// Base-case inputs: the original fixed-capex model's defaults.
pub fn base_case_inputs() -> ProjectInputs {
    ProjectInputs {
        captured_and_stored_mtpa: 0.2,
        percent_sequestered: 0.01,
        co2_water_ratio: 1.0,
        max_injection_rate_kgs_per_well: 100.0,
        thermal_extraction_mwt_kgs: 52.88 / 74.38,
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

/// Scaled-model inputs: power-scaled capex, bottom-up opex, corporate tax,
/// 90% capacity factor.
pub fn scaled_inputs() -> ProjectInputs {
    ProjectInputs {
        capacity_factor: 0.9,
        tax_rate: Some(0.21),
        capex: CapexModel::Scaled {
            above_ground_capex_m_per_mw: 2.0,
            drilling_cost_per_well_m: 8.0,
            stimulation_cost_per_well_m: 2.0,
            exploration_cost_m: 10.0,
            escalation_factor: 1.15,
        },
        opex: OpexModel::BottomUp {
            annual_salaries_m: 5.0,
            maintenance_per_well_m: 0.5,
            opex_per_mw_m: 0.05,
            redrilling_per_well_m: 0.4,
        },
        ..base_case_inputs()
    }
}

/// Inputs whose revenue never recovers the capex: payback and IRR are
/// undefined.
pub fn underwater_inputs() -> ProjectInputs {
    ProjectInputs {
        power_value_usd_mwh: 40.0,
        carbon_price_above_45q: 0.0,
        ..base_case_inputs()
    }
}
