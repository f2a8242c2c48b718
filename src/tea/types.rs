//! Core engine types: project inputs, cost-model variants, derived
//! quantities, and output metrics.

use std::fmt;

use serde::Serialize;

/// Construction lag before the first operating year. Capex is spread across
/// years `0..START_OPERATIONS_YEAR`; revenue and opex begin at
/// `START_OPERATIONS_YEAR`.
pub const START_OPERATIONS_YEAR: usize = 3;

/// Capital cost model variant.
///
/// The variant also pins the hours-per-year basis used by the engineering
/// derivation: `Fixed` keeps the historical `8160 * capacity_factor` basis,
/// `Scaled` converts flows with the physical 8760-hour year and applies the
/// capacity factor downstream.
#[derive(Debug, Clone, Serialize)]
pub enum CapexModel {
    /// Lump-sum plant capex plus a per-well rate.
    Fixed {
        /// sCO2 power-plant capex ($M).
        sco2_capex_m: f64,
        /// Geothermal capex per well ($M).
        geo_capex_per_well_m: f64,
    },
    /// Above-ground capex scaling with realized power output, plus a
    /// bottom-up subsurface build, both under one escalation multiplier.
    Scaled {
        /// Above-ground plant capex per MW of realized output ($M/MW).
        above_ground_capex_m_per_mw: f64,
        /// Drilling cost per well ($M).
        drilling_cost_per_well_m: f64,
        /// Stimulation cost per well ($M).
        stimulation_cost_per_well_m: f64,
        /// One-off exploration cost ($M).
        exploration_cost_m: f64,
        /// Uniform capex escalation multiplier.
        escalation_factor: f64,
    },
}

/// Operating cost model variant.
#[derive(Debug, Clone, Serialize)]
pub enum OpexModel {
    /// Single all-in annual figure ($M/year).
    Fixed {
        /// Annual opex ($M/year).
        annual_opex_m: f64,
    },
    /// Bottom-up breakdown, all constant across operating years.
    BottomUp {
        /// Annual salaries ($M/year).
        annual_salaries_m: f64,
        /// Maintenance per well ($M/well-year).
        maintenance_per_well_m: f64,
        /// Plant opex per MW of realized output ($M/MW-year).
        opex_per_mw_m: f64,
        /// Redrilling allowance per well ($M/well-year).
        redrilling_per_well_m: f64,
    },
}

/// Immutable input set for one evaluation.
///
/// The engine assumes the config layer has range-checked these, but still
/// guards the divisions it performs (see [`InputError`]).
#[derive(Debug, Clone, Serialize)]
pub struct ProjectInputs {
    /// CO2 permanently captured and stored (Mt/year).
    pub captured_and_stored_mtpa: f64,
    /// Fraction of injected CO2 that is sequestered (0, 1].
    pub percent_sequestered: f64,
    /// CO2-to-water mixing ratio of the injected stream.
    pub co2_water_ratio: f64,
    /// Injection cap per well (kg/s).
    pub max_injection_rate_kgs_per_well: f64,
    /// Thermal extraction per unit flow (MWt per kg/s).
    pub thermal_extraction_mwt_kgs: f64,
    /// Heat-to-power conversion efficiency (0, 1].
    pub thermal_efficiency: f64,
    /// Fraction of the year the plant runs at rated output (0, 1].
    pub capacity_factor: f64,
    /// Discount rate applied to all cash flows (> -1).
    pub cost_of_capital: f64,
    /// Electricity sale price ($/MWh).
    pub power_value_usd_mwh: f64,
    /// Carbon-credit price on top of 45Q ($/tonne).
    pub carbon_price_above_45q: f64,
    /// CO2 procurement cost ($/tonne).
    pub co2_cost_per_tonne: f64,
    /// 45Q tax-credit value ($/tonne).
    pub tax_credit_45q_usd_tonne: f64,
    /// Years the 45Q credit pays out, measured from start of operations.
    pub tax_credit_duration_years: usize,
    /// Corporate tax rate on pre-tax net cash flow; `None` disables the tax
    /// line entirely.
    pub tax_rate: Option<f64>,
    /// Operating lifetime (years, >= 1).
    pub project_life_years: usize,
    /// Capital cost model.
    pub capex: CapexModel,
    /// Operating cost model.
    pub opex: OpexModel,
}

impl ProjectInputs {
    /// Total number of analysis years: construction lag plus operating life.
    pub fn total_years(&self) -> usize {
        START_OPERATIONS_YEAR + self.project_life_years
    }
}

/// Engineering and cost quantities derived from the inputs.
///
/// Computed once per evaluation and reported alongside the metrics as
/// diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct DerivedQuantities {
    /// Total CO2 injected, before sequestration losses (Mt/year).
    pub injected_co2_mtpa: f64,
    /// Total injection flow rate (kg/s).
    pub total_injection_rate_kgs: f64,
    /// Number of injection wells.
    pub injection_wells: u32,
    /// Injection plus matched production wells.
    pub total_wells: u32,
    /// Thermal output (MWt).
    pub heat_generated_mwt: f64,
    /// Electric output at rated conditions (MW).
    pub power_generated_mw: f64,
    /// Annual electricity generation (MWh/year).
    pub annual_energy_mwh: f64,
    /// Above-ground (plant) share of capex ($M).
    pub above_ground_capex_m: f64,
    /// Subsurface (well-field) share of capex ($M).
    pub subsurface_capex_m: f64,
    /// Total capital cost ($M).
    pub total_capex_m: f64,
    /// Annual operating cost ($M/year).
    pub annual_opex_m: f64,
}

/// Summary financial metrics of one evaluation.
///
/// `irr` and `payback_year` are `None` when no value exists within the
/// analysis horizon; that is a normal, displayable result, not a fault.
#[derive(Debug, Clone, Serialize)]
pub struct Metrics {
    /// Levelized cost of energy ($/MWh); 0.0 when no generation is
    /// discounted into the horizon.
    pub lcoe_usd_mwh: f64,
    /// Net present value ($M).
    pub npv_m: f64,
    /// Internal rate of return (fraction), if a real root exists.
    pub irr: Option<f64>,
    /// First year index with non-negative cumulative cash flow, if reached.
    pub payback_year: Option<usize>,
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- TEA Metrics ---")?;
        writeln!(f, "LCOE:     {:.2} $/MWh", self.lcoe_usd_mwh)?;
        writeln!(f, "NPV:      {:.2} $M", self.npv_m)?;
        match self.irr {
            Some(r) => writeln!(f, "IRR:      {:.2}%", r * 100.0)?,
            None => writeln!(f, "IRR:      N/A")?,
        }
        match self.payback_year {
            Some(y) => write!(f, "Payback:  year {y}"),
            None => write!(f, "Payback:  N/A"),
        }
    }
}

/// Invalid-input fault with the offending field and constraint.
///
/// Raised before any division that would otherwise leak NaN or infinity
/// into the downstream metrics.
#[derive(Debug, Clone)]
pub struct InputError {
    /// Field name as it appears on [`ProjectInputs`].
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl InputError {
    pub(crate) fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid input: {} — {}", self.field, self.message)
    }
}

impl std::error::Error for InputError {}
