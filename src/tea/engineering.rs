//! Engineering derivation: injection rate, well counts, and power output.

use super::types::{CapexModel, InputError, ProjectInputs};

/// Hours in the historical fixed-variant operating year.
const FIXED_BASIS_HOURS: f64 = 8160.0;
/// Hours in the physical calendar year used by the scaled variant.
const PHYSICAL_YEAR_HOURS: f64 = 8760.0;

/// Physical and energy quantities derived from the inputs, before costing.
#[derive(Debug, Clone)]
pub struct EngineeringQuantities {
    pub injected_co2_mtpa: f64,
    pub total_injection_rate_kgs: f64,
    pub injection_wells: u32,
    pub total_wells: u32,
    pub heat_generated_mwt: f64,
    pub power_generated_mw: f64,
    pub annual_energy_mwh: f64,
}

/// Derives flow rate, well counts, and power output from the physical inputs.
///
/// The hours basis follows the capex variant: `Fixed` uses
/// `8160 * capacity_factor` for both the flow conversion and annual energy;
/// `Scaled` converts flows over the full 8760-hour year and applies the
/// capacity factor to annual energy only. The two bases are never mixed
/// within one evaluation.
///
/// # Errors
///
/// Returns [`InputError`] when `percent_sequestered`, `co2_water_ratio`, or
/// `max_injection_rate_kgs_per_well` is not strictly positive, and, for the
/// fixed variant, when `capacity_factor` is not strictly positive (its hours
/// basis would be zero).
pub fn derive(inputs: &ProjectInputs) -> Result<EngineeringQuantities, InputError> {
    if inputs.percent_sequestered <= 0.0 {
        return Err(InputError::new(
            "percent_sequestered",
            "must be > 0 (injected CO2 is captured / percent_sequestered)",
        ));
    }
    if inputs.co2_water_ratio <= 0.0 {
        return Err(InputError::new("co2_water_ratio", "must be > 0"));
    }
    if inputs.max_injection_rate_kgs_per_well <= 0.0 {
        return Err(InputError::new(
            "max_injection_rate_kgs_per_well",
            "must be > 0",
        ));
    }

    let fixed_basis = matches!(inputs.capex, CapexModel::Fixed { .. });
    if fixed_basis && inputs.capacity_factor <= 0.0 {
        return Err(InputError::new(
            "capacity_factor",
            "must be > 0 for the fixed cost model (hours basis is 8160 * capacity_factor)",
        ));
    }

    // Flow-conversion seconds per year, per variant basis.
    let seconds_per_year = if fixed_basis {
        FIXED_BASIS_HOURS * inputs.capacity_factor * 3600.0
    } else {
        PHYSICAL_YEAR_HOURS * 3600.0
    };

    let injected_co2_mtpa = inputs.captured_and_stored_mtpa / inputs.percent_sequestered;
    let total_injection_rate_kgs =
        injected_co2_mtpa * 1e9 / seconds_per_year / inputs.co2_water_ratio;

    // Partial wells are provisioned whole.
    let injection_wells =
        (total_injection_rate_kgs / inputs.max_injection_rate_kgs_per_well).ceil() as u32;
    let total_wells = 2 * injection_wells;

    let heat_generated_mwt = total_injection_rate_kgs * inputs.thermal_extraction_mwt_kgs;
    let power_generated_mw = heat_generated_mwt * inputs.thermal_efficiency;

    let annual_energy_mwh = if fixed_basis {
        power_generated_mw * FIXED_BASIS_HOURS * inputs.capacity_factor
    } else {
        power_generated_mw * PHYSICAL_YEAR_HOURS * inputs.capacity_factor
    };

    Ok(EngineeringQuantities {
        injected_co2_mtpa,
        total_injection_rate_kgs,
        injection_wells,
        total_wells,
        heat_generated_mwt,
        power_generated_mw,
        annual_energy_mwh,
    })
}
