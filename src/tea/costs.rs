//! Capital and operating cost aggregation for both cost-model variants.

use super::engineering::EngineeringQuantities;
use super::types::{CapexModel, OpexModel};

/// Capital cost split into its above-ground and subsurface shares.
#[derive(Debug, Clone)]
pub struct CapexBreakdown {
    /// Plant-side capex ($M).
    pub above_ground_m: f64,
    /// Well-field capex ($M).
    pub subsurface_m: f64,
    /// Sum of both shares ($M).
    pub total_m: f64,
}

/// Aggregates total capex from the selected cost model.
///
/// The escalation factor of the scaled variant is a single uniform
/// multiplier; capex never varies per well or per year.
pub fn capex(model: &CapexModel, eng: &EngineeringQuantities) -> CapexBreakdown {
    let (above_ground_m, subsurface_m) = match *model {
        CapexModel::Fixed {
            sco2_capex_m,
            geo_capex_per_well_m,
        } => (
            sco2_capex_m,
            f64::from(eng.total_wells) * geo_capex_per_well_m,
        ),
        CapexModel::Scaled {
            above_ground_capex_m_per_mw,
            drilling_cost_per_well_m,
            stimulation_cost_per_well_m,
            exploration_cost_m,
            escalation_factor,
        } => {
            let above = above_ground_capex_m_per_mw * eng.power_generated_mw * escalation_factor;
            let sub = ((drilling_cost_per_well_m + stimulation_cost_per_well_m)
                * f64::from(eng.total_wells)
                + exploration_cost_m)
                * escalation_factor;
            (above, sub)
        }
    };

    CapexBreakdown {
        above_ground_m,
        subsurface_m,
        total_m: above_ground_m + subsurface_m,
    }
}

/// Aggregates the constant annual opex from the selected cost model.
pub fn annual_opex(model: &OpexModel, eng: &EngineeringQuantities) -> f64 {
    match *model {
        OpexModel::Fixed { annual_opex_m } => annual_opex_m,
        OpexModel::BottomUp {
            annual_salaries_m,
            maintenance_per_well_m,
            opex_per_mw_m,
            redrilling_per_well_m,
        } => {
            annual_salaries_m
                + maintenance_per_well_m * f64::from(eng.total_wells)
                + opex_per_mw_m * eng.power_generated_mw
                + redrilling_per_well_m * f64::from(eng.total_wells)
        }
    }
}
