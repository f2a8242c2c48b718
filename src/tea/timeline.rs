//! Year-by-year cash-flow construction over the analysis horizon.

use std::fmt;

use serde::Serialize;

use super::costs::CapexBreakdown;
use super::engineering::EngineeringQuantities;
use super::types::{CapexModel, ProjectInputs, START_OPERATIONS_YEAR};

/// Construction-year capex shares for the fixed cost model (exact thirds).
const CAPEX_SCHEDULE_FIXED: [f64; 3] = [1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0];
/// Construction-year capex shares for the scaled cost model.
const CAPEX_SCHEDULE_SCALED: [f64; 3] = [0.33, 0.33, 0.34];

/// Per-year cash-flow components, each indexed `0..total_years`.
///
/// All components are in $M with outflows negative. `tax_m` stays all-zero
/// when the inputs carry no tax rate. `net_m` is the per-year sum of every
/// component and is what discounting, payback, and IRR operate on.
#[derive(Debug, Clone)]
pub struct CashFlowTimeline {
    pub total_years: usize,
    pub capex_m: Vec<f64>,
    pub electricity_m: Vec<f64>,
    pub credit_45q_m: Vec<f64>,
    pub carbon_credit_m: Vec<f64>,
    pub opex_m: Vec<f64>,
    pub co2_purchase_m: Vec<f64>,
    pub tax_m: Vec<f64>,
    /// Electricity generated per year (MWh), for LCOE denominators.
    pub generation_mwh: Vec<f64>,
    pub net_m: Vec<f64>,
}

impl CashFlowTimeline {
    /// Builds all per-year vectors from the derived quantities.
    ///
    /// Operating flows cover `[START_OPERATIONS_YEAR, START_OPERATIONS_YEAR
    /// + project_life_years)`; the 45Q credit is further clipped to its own
    /// duration window. A window that would run past `total_years` is
    /// truncated, never extended.
    pub fn build(
        inputs: &ProjectInputs,
        eng: &EngineeringQuantities,
        capex: &CapexBreakdown,
        annual_opex_m: f64,
    ) -> Self {
        let total_years = inputs.total_years();
        let scaled = matches!(inputs.capex, CapexModel::Scaled { .. });
        let schedule: &[f64] = if scaled {
            &CAPEX_SCHEDULE_SCALED
        } else {
            &CAPEX_SCHEDULE_FIXED
        };

        let mut timeline = Self {
            total_years,
            capex_m: vec![0.0; total_years],
            electricity_m: vec![0.0; total_years],
            credit_45q_m: vec![0.0; total_years],
            carbon_credit_m: vec![0.0; total_years],
            opex_m: vec![0.0; total_years],
            co2_purchase_m: vec![0.0; total_years],
            tax_m: vec![0.0; total_years],
            generation_mwh: vec![0.0; total_years],
            net_m: vec![0.0; total_years],
        };

        for (year, share) in schedule.iter().enumerate() {
            if year < total_years {
                timeline.capex_m[year] = -share * capex.total_m;
            }
        }

        // The scaled variant derates the per-tonne credit lines by the
        // capacity factor; the fixed variant bakes availability into its
        // hours basis instead.
        let credit_derate = if scaled { inputs.capacity_factor } else { 1.0 };
        let electricity_m = eng.annual_energy_mwh * inputs.power_value_usd_mwh / 1e6;
        let credit_45q_m =
            inputs.captured_and_stored_mtpa * inputs.tax_credit_45q_usd_tonne * credit_derate;
        let carbon_credit_m =
            inputs.captured_and_stored_mtpa * inputs.carbon_price_above_45q * credit_derate;
        let co2_purchase_m = inputs.captured_and_stored_mtpa * inputs.co2_cost_per_tonne;

        let end_ops_year = START_OPERATIONS_YEAR + inputs.project_life_years;
        let end_45q_year = START_OPERATIONS_YEAR + inputs.tax_credit_duration_years;

        for year in START_OPERATIONS_YEAR..end_ops_year.min(total_years) {
            timeline.electricity_m[year] = electricity_m;
            if year < end_45q_year {
                timeline.credit_45q_m[year] = credit_45q_m;
            }
            timeline.carbon_credit_m[year] = carbon_credit_m;
            timeline.opex_m[year] = -annual_opex_m;
            timeline.co2_purchase_m[year] = -co2_purchase_m;
            timeline.generation_mwh[year] = eng.annual_energy_mwh;
        }

        for year in 0..total_years {
            let pre_tax = timeline.capex_m[year]
                + timeline.electricity_m[year]
                + timeline.credit_45q_m[year]
                + timeline.carbon_credit_m[year]
                + timeline.opex_m[year]
                + timeline.co2_purchase_m[year];
            // Pre-tax net is treated as EBIT; construction-year losses come
            // back as a positive tax line (immediate loss offset).
            if let Some(rate) = inputs.tax_rate {
                timeline.tax_m[year] = -rate * pre_tax;
            }
            timeline.net_m[year] = pre_tax + timeline.tax_m[year];
        }

        timeline
    }

    /// Flattens the component vectors into per-year rows with running
    /// cumulative cash flow, for printing and CSV export.
    pub fn rows(&self) -> Vec<YearRow> {
        let mut rows = Vec::with_capacity(self.total_years);
        let mut cumulative = 0.0;
        for year in 0..self.total_years {
            cumulative += self.net_m[year];
            rows.push(YearRow {
                year,
                capex_m: self.capex_m[year],
                electricity_m: self.electricity_m[year],
                credit_45q_m: self.credit_45q_m[year],
                carbon_credit_m: self.carbon_credit_m[year],
                opex_m: self.opex_m[year],
                co2_purchase_m: self.co2_purchase_m[year],
                tax_m: self.tax_m[year],
                net_m: self.net_m[year],
                cumulative_m: cumulative,
            });
        }
        rows
    }
}

/// One analysis year of the timeline, flattened for display and export.
#[derive(Debug, Clone, Serialize)]
pub struct YearRow {
    /// Year index, 0-based from start of construction.
    pub year: usize,
    /// Capex outflow ($M, <= 0).
    pub capex_m: f64,
    /// Electricity revenue ($M).
    pub electricity_m: f64,
    /// 45Q tax-credit revenue ($M).
    pub credit_45q_m: f64,
    /// Carbon-credit revenue above 45Q ($M).
    pub carbon_credit_m: f64,
    /// Operating cost outflow ($M, <= 0).
    pub opex_m: f64,
    /// CO2 procurement outflow ($M, <= 0).
    pub co2_purchase_m: f64,
    /// Tax cash adjustment ($M; 0 without a tax rate).
    pub tax_m: f64,
    /// Net cash flow ($M).
    pub net_m: f64,
    /// Cumulative undiscounted net cash flow through this year ($M).
    pub cumulative_m: f64,
}

impl fmt::Display for YearRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "y={:>2} | capex={:>8.2}  elec={:>7.2}  45Q={:>6.2}  carbon={:>6.2}  \
             opex={:>7.2}  co2={:>7.2}  tax={:>6.2} | net={:>8.2}  cum={:>9.2}",
            self.year,
            self.capex_m,
            self.electricity_m,
            self.credit_45q_m,
            self.carbon_credit_m,
            self.opex_m,
            self.co2_purchase_m,
            self.tax_m,
            self.net_m,
            self.cumulative_m,
        )
    }
}
