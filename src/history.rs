//! Append-only run history: one labeled snapshot per evaluation.

use crate::config::ProjectConfig;
use crate::tea::engine::Evaluation;

/// One labeled cell of a run snapshot.
///
/// `None` marks an undefined metric (IRR or payback); export renders it as
/// an empty cell rather than a sentinel number.
#[derive(Debug, Clone)]
pub struct RunField {
    pub label: String,
    pub value: Option<f64>,
}

/// Full input and output snapshot of one evaluation.
#[derive(Debug, Clone)]
pub struct RunRecord {
    /// Ordered fields: inputs first, then derived diagnostics, then metrics.
    pub fields: Vec<RunField>,
}

impl RunRecord {
    /// Captures the scenario and its evaluation as an ordered snapshot.
    ///
    /// Only the active cost model's rates are recorded, so records from
    /// different variants carry different field sets; export aligns them by
    /// label.
    pub fn from_evaluation(config: &ProjectConfig, evaluation: &Evaluation) -> Self {
        let mut fields = Vec::new();
        let mut push = |label: &str, value: f64| {
            fields.push(RunField {
                label: label.to_string(),
                value: Some(value),
            });
        };

        let r = &config.resource;
        push("Captured and stored (Mtpa)", r.captured_and_stored_mtpa);
        push("Injection CO2 sequestered (%)", r.percent_sequestered * 100.0);
        push("CO2/Water ratio", r.co2_water_ratio);
        push(
            "Max injection rate per well (kg/s)",
            r.max_injection_rate_kgs_per_well,
        );
        push(
            "Thermal extraction (MWt/(kg/s))",
            r.thermal_extraction_mwt_kgs,
        );
        push("Thermal efficiency (%)", r.thermal_efficiency * 100.0);
        push("Capacity factor (%)", r.capacity_factor * 100.0);

        let fin = &config.finance;
        push("Cost of capital (%)", fin.cost_of_capital * 100.0);
        push("Power price ($/MWh)", fin.power_value_usd_mwh);
        push("Carbon price above 45Q ($/tonne)", fin.carbon_price_above_45q);
        push("CO2 cost ($/tonne)", fin.co2_cost_per_tonne);
        push("45Q credit ($/tonne)", fin.tax_credit_45q_usd_tonne);
        if let Some(rate) = fin.tax_rate {
            push("Tax rate (%)", rate * 100.0);
        }

        push(
            "Operating life (years)",
            config.project.operating_life_years as f64,
        );
        push(
            "45Q duration (years)",
            config.project.tax_credit_duration_years as f64,
        );

        match config.capex.model.as_str() {
            "scaled" => {
                push(
                    "Above-ground capex ($M/MW)",
                    config.capex.above_ground_capex_m_per_mw,
                );
                push("Drilling per well ($M)", config.capex.drilling_cost_per_well_m);
                push(
                    "Stimulation per well ($M)",
                    config.capex.stimulation_cost_per_well_m,
                );
                push("Exploration ($M)", config.capex.exploration_cost_m);
                push("Capex escalation factor", config.capex.escalation_factor);
            }
            _ => {
                push("sCO2 capex ($M)", config.capex.sco2_capex_m);
                push(
                    "Geothermal capex per well ($M)",
                    config.capex.geo_capex_per_well_m,
                );
            }
        }

        match config.opex.model.as_str() {
            "bottom_up" => {
                push("Salaries ($M/year)", config.opex.annual_salaries_m);
                push(
                    "Maintenance per well ($M/year)",
                    config.opex.maintenance_per_well_m,
                );
                push("Plant opex ($M/MW-year)", config.opex.opex_per_mw_m);
                push(
                    "Redrilling per well ($M/year)",
                    config.opex.redrilling_per_well_m,
                );
            }
            _ => {
                push("Annual opex ($M/year)", config.opex.annual_opex_m);
            }
        }

        let d = &evaluation.derived;
        push("Total wells", f64::from(d.total_wells));
        push("Power generated (MW)", d.power_generated_mw);
        push("Annual energy (MWh)", d.annual_energy_mwh);
        push("Above-ground capex ($M)", d.above_ground_capex_m);
        push("Subsurface capex ($M)", d.subsurface_capex_m);
        push("Total capex ($M)", d.total_capex_m);
        push("Annual opex ($M)", d.annual_opex_m);

        let m = &evaluation.metrics;
        push("LCOE ($/MWh)", m.lcoe_usd_mwh);
        push("NPV ($M)", m.npv_m);
        fields.push(RunField {
            label: "IRR (%)".to_string(),
            value: m.irr.map(|r| r * 100.0),
        });
        fields.push(RunField {
            label: "Payback (year)".to_string(),
            value: m.payback_year.map(|y| y as f64),
        });

        Self { fields }
    }

    /// Looks up a field value by its label.
    pub fn value(&self, label: &str) -> Option<f64> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .and_then(|f| f.value)
    }
}

/// Append-only sequence of run snapshots.
#[derive(Debug, Clone, Default)]
pub struct RunHistory {
    runs: Vec<RunRecord>,
}

impl RunHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one run; records are never mutated or removed.
    pub fn push(&mut self, record: RunRecord) {
        self.runs.push(record);
    }

    pub fn runs(&self) -> &[RunRecord] {
        &self.runs
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Ordered union of field labels across all runs, first appearance wins.
    ///
    /// Mixed-variant histories align on this row set when exported.
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = Vec::new();
        for run in &self.runs {
            for field in &run.fields {
                if !labels.iter().any(|l| *l == field.label) {
                    labels.push(field.label.clone());
                }
            }
        }
        labels
    }
}
