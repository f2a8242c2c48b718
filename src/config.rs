//! TOML-based scenario configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::tea::types::{CapexModel, OpexModel, ProjectInputs};

/// Top-level scenario configuration parsed from TOML.
///
/// All fields have defaults matching the base-case scenario. Load from TOML
/// with [`ProjectConfig::from_toml_file`] or use
/// [`ProjectConfig::base_case`] for the built-in default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Analysis horizon and credit-window parameters.
    #[serde(default)]
    pub project: ProjectSection,
    /// Reservoir and plant physical parameters.
    #[serde(default)]
    pub resource: ResourceSection,
    /// Prices, credits, and discounting parameters.
    #[serde(default)]
    pub finance: FinanceSection,
    /// Capital cost model and rates.
    #[serde(default)]
    pub capex: CapexSection,
    /// Operating cost model and rates.
    #[serde(default)]
    pub opex: OpexSection,
}

/// Analysis horizon and credit-window parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectSection {
    /// Operating lifetime in years (must be >= 1).
    pub operating_life_years: usize,
    /// Years the 45Q credit pays out from start of operations.
    pub tax_credit_duration_years: usize,
}

impl Default for ProjectSection {
    fn default() -> Self {
        Self {
            operating_life_years: 15,
            tax_credit_duration_years: 12,
        }
    }
}

/// Reservoir and plant physical parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourceSection {
    /// CO2 permanently captured and stored (Mt/year).
    pub captured_and_stored_mtpa: f64,
    /// Fraction of injected CO2 that is sequestered (0.0–1.0).
    pub percent_sequestered: f64,
    /// CO2-to-water mixing ratio of the injected stream.
    pub co2_water_ratio: f64,
    /// Injection cap per well (kg/s).
    pub max_injection_rate_kgs_per_well: f64,
    /// Thermal extraction per unit flow (MWt per kg/s).
    pub thermal_extraction_mwt_kgs: f64,
    /// Heat-to-power conversion efficiency (0.0–1.0).
    pub thermal_efficiency: f64,
    /// Fraction of the year at rated output (0.0–1.0).
    pub capacity_factor: f64,
}

impl Default for ResourceSection {
    fn default() -> Self {
        Self {
            captured_and_stored_mtpa: 0.2,
            percent_sequestered: 0.01,
            co2_water_ratio: 1.0,
            max_injection_rate_kgs_per_well: 100.0,
            thermal_extraction_mwt_kgs: 52.88 / 74.38,
            thermal_efficiency: 0.19,
            capacity_factor: 1.0,
        }
    }
}

/// Prices, credits, and discounting parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FinanceSection {
    /// Discount rate applied to all cash flows (must be > -1).
    pub cost_of_capital: f64,
    /// Electricity sale price ($/MWh).
    pub power_value_usd_mwh: f64,
    /// Carbon-credit price on top of 45Q ($/tonne).
    pub carbon_price_above_45q: f64,
    /// CO2 procurement cost ($/tonne).
    pub co2_cost_per_tonne: f64,
    /// 45Q tax-credit value ($/tonne).
    pub tax_credit_45q_usd_tonne: f64,
    /// Corporate tax rate on pre-tax net cash flow; omit to disable the tax
    /// line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
}

impl Default for FinanceSection {
    fn default() -> Self {
        Self {
            cost_of_capital: 0.08,
            power_value_usd_mwh: 95.4,
            carbon_price_above_45q: 40.0,
            co2_cost_per_tonne: 100.0,
            tax_credit_45q_usd_tonne: 85.0,
            tax_rate: None,
        }
    }
}

/// Capital cost model and rates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CapexSection {
    /// Cost model: `"fixed"` or `"scaled"`.
    pub model: String,
    /// sCO2 power-plant capex for the fixed model ($M).
    pub sco2_capex_m: f64,
    /// Geothermal capex per well for the fixed model ($M).
    pub geo_capex_per_well_m: f64,
    /// Above-ground capex per MW of realized output for the scaled model
    /// ($M/MW).
    pub above_ground_capex_m_per_mw: f64,
    /// Drilling cost per well for the scaled model ($M).
    pub drilling_cost_per_well_m: f64,
    /// Stimulation cost per well for the scaled model ($M).
    pub stimulation_cost_per_well_m: f64,
    /// One-off exploration cost for the scaled model ($M).
    pub exploration_cost_m: f64,
    /// Uniform capex escalation multiplier for the scaled model.
    pub escalation_factor: f64,
}

impl Default for CapexSection {
    fn default() -> Self {
        Self {
            model: "fixed".to_string(),
            sco2_capex_m: 70.0,
            geo_capex_per_well_m: 10.0,
            above_ground_capex_m_per_mw: 2.0,
            drilling_cost_per_well_m: 8.0,
            stimulation_cost_per_well_m: 2.0,
            exploration_cost_m: 10.0,
            escalation_factor: 1.15,
        }
    }
}

/// Operating cost model and rates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OpexSection {
    /// Cost model: `"fixed"` or `"bottom_up"`.
    pub model: String,
    /// All-in annual opex for the fixed model ($M/year).
    pub annual_opex_m: f64,
    /// Annual salaries for the bottom-up model ($M/year).
    pub annual_salaries_m: f64,
    /// Maintenance per well for the bottom-up model ($M/well-year).
    pub maintenance_per_well_m: f64,
    /// Plant opex per MW for the bottom-up model ($M/MW-year).
    pub opex_per_mw_m: f64,
    /// Redrilling allowance per well for the bottom-up model ($M/well-year).
    pub redrilling_per_well_m: f64,
}

impl Default for OpexSection {
    fn default() -> Self {
        Self {
            model: "fixed".to_string(),
            annual_opex_m: 30.0,
            annual_salaries_m: 5.0,
            maintenance_per_well_m: 0.5,
            opex_per_mw_m: 0.05,
            redrilling_per_well_m: 0.4,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"resource.percent_sequestered"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl ProjectConfig {
    /// Returns the base-case scenario (the original model's defaults: fixed
    /// capex and fixed opex).
    pub fn base_case() -> Self {
        Self {
            project: ProjectSection::default(),
            resource: ResourceSection::default(),
            finance: FinanceSection::default(),
            capex: CapexSection::default(),
            opex: OpexSection::default(),
        }
    }

    /// Returns the scaled preset: power-scaled capex, bottom-up opex,
    /// corporate tax, and a 90% capacity factor.
    pub fn scaled() -> Self {
        Self {
            resource: ResourceSection {
                capacity_factor: 0.9,
                ..ResourceSection::default()
            },
            finance: FinanceSection {
                tax_rate: Some(0.21),
                ..FinanceSection::default()
            },
            capex: CapexSection {
                model: "scaled".to_string(),
                ..CapexSection::default()
            },
            opex: OpexSection {
                model: "bottom_up".to_string(),
                ..OpexSection::default()
            },
            ..Self::base_case()
        }
    }

    /// Returns the low-price preset: depressed power price and no carbon
    /// credit, a case where payback and IRR are typically undefined.
    pub fn low_price() -> Self {
        Self {
            finance: FinanceSection {
                power_value_usd_mwh: 40.0,
                carbon_price_above_45q: 0.0,
                ..FinanceSection::default()
            },
            ..Self::base_case()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["base_case", "scaled", "low_price"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "base_case" => Ok(Self::base_case()),
            "scaled" => Ok(Self::scaled()),
            "low_price" => Ok(Self::low_price()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is
    /// invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown
    /// fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid. Only the fields of
    /// the selected cost models are checked; the inactive variant's rates
    /// are ignored.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.project.operating_life_years == 0 {
            errors.push(ConfigError {
                field: "project.operating_life_years".into(),
                message: "must be >= 1".into(),
            });
        }

        let r = &self.resource;
        if r.captured_and_stored_mtpa <= 0.0 {
            errors.push(ConfigError {
                field: "resource.captured_and_stored_mtpa".into(),
                message: "must be > 0".into(),
            });
        }
        if !(r.percent_sequestered > 0.0 && r.percent_sequestered <= 1.0) {
            errors.push(ConfigError {
                field: "resource.percent_sequestered".into(),
                message: "must be in (0.0, 1.0]".into(),
            });
        }
        if r.co2_water_ratio <= 0.0 {
            errors.push(ConfigError {
                field: "resource.co2_water_ratio".into(),
                message: "must be > 0".into(),
            });
        }
        if r.max_injection_rate_kgs_per_well <= 0.0 {
            errors.push(ConfigError {
                field: "resource.max_injection_rate_kgs_per_well".into(),
                message: "must be > 0".into(),
            });
        }
        if r.thermal_extraction_mwt_kgs <= 0.0 {
            errors.push(ConfigError {
                field: "resource.thermal_extraction_mwt_kgs".into(),
                message: "must be > 0".into(),
            });
        }
        if !(r.thermal_efficiency > 0.0 && r.thermal_efficiency <= 1.0) {
            errors.push(ConfigError {
                field: "resource.thermal_efficiency".into(),
                message: "must be in (0.0, 1.0]".into(),
            });
        }
        if !(r.capacity_factor > 0.0 && r.capacity_factor <= 1.0) {
            errors.push(ConfigError {
                field: "resource.capacity_factor".into(),
                message: "must be in (0.0, 1.0]".into(),
            });
        }

        let fin = &self.finance;
        if fin.cost_of_capital <= -1.0 {
            errors.push(ConfigError {
                field: "finance.cost_of_capital".into(),
                message: "must be > -1 (discount factor is 1/(1+rate)^year)".into(),
            });
        }
        if fin.power_value_usd_mwh < 0.0 {
            errors.push(ConfigError {
                field: "finance.power_value_usd_mwh".into(),
                message: "must be >= 0".into(),
            });
        }
        if fin.carbon_price_above_45q < 0.0 {
            errors.push(ConfigError {
                field: "finance.carbon_price_above_45q".into(),
                message: "must be >= 0".into(),
            });
        }
        if fin.co2_cost_per_tonne < 0.0 {
            errors.push(ConfigError {
                field: "finance.co2_cost_per_tonne".into(),
                message: "must be >= 0".into(),
            });
        }
        if fin.tax_credit_45q_usd_tonne < 0.0 {
            errors.push(ConfigError {
                field: "finance.tax_credit_45q_usd_tonne".into(),
                message: "must be >= 0".into(),
            });
        }
        if let Some(rate) = fin.tax_rate {
            if !(0.0..1.0).contains(&rate) {
                errors.push(ConfigError {
                    field: "finance.tax_rate".into(),
                    message: "must be in [0.0, 1.0)".into(),
                });
            }
        }

        let c = &self.capex;
        match c.model.as_str() {
            "fixed" => {
                if c.sco2_capex_m < 0.0 {
                    errors.push(ConfigError {
                        field: "capex.sco2_capex_m".into(),
                        message: "must be >= 0".into(),
                    });
                }
                if c.geo_capex_per_well_m < 0.0 {
                    errors.push(ConfigError {
                        field: "capex.geo_capex_per_well_m".into(),
                        message: "must be >= 0".into(),
                    });
                }
            }
            "scaled" => {
                if c.above_ground_capex_m_per_mw < 0.0 {
                    errors.push(ConfigError {
                        field: "capex.above_ground_capex_m_per_mw".into(),
                        message: "must be >= 0".into(),
                    });
                }
                if c.drilling_cost_per_well_m < 0.0 {
                    errors.push(ConfigError {
                        field: "capex.drilling_cost_per_well_m".into(),
                        message: "must be >= 0".into(),
                    });
                }
                if c.stimulation_cost_per_well_m < 0.0 {
                    errors.push(ConfigError {
                        field: "capex.stimulation_cost_per_well_m".into(),
                        message: "must be >= 0".into(),
                    });
                }
                if c.exploration_cost_m < 0.0 {
                    errors.push(ConfigError {
                        field: "capex.exploration_cost_m".into(),
                        message: "must be >= 0".into(),
                    });
                }
                if c.escalation_factor <= 0.0 {
                    errors.push(ConfigError {
                        field: "capex.escalation_factor".into(),
                        message: "must be > 0".into(),
                    });
                }
            }
            other => {
                errors.push(ConfigError {
                    field: "capex.model".into(),
                    message: format!("must be \"fixed\" or \"scaled\", got \"{other}\""),
                });
            }
        }

        let o = &self.opex;
        match o.model.as_str() {
            "fixed" => {
                if o.annual_opex_m < 0.0 {
                    errors.push(ConfigError {
                        field: "opex.annual_opex_m".into(),
                        message: "must be >= 0".into(),
                    });
                }
            }
            "bottom_up" => {
                if o.annual_salaries_m < 0.0 {
                    errors.push(ConfigError {
                        field: "opex.annual_salaries_m".into(),
                        message: "must be >= 0".into(),
                    });
                }
                if o.maintenance_per_well_m < 0.0 {
                    errors.push(ConfigError {
                        field: "opex.maintenance_per_well_m".into(),
                        message: "must be >= 0".into(),
                    });
                }
                if o.opex_per_mw_m < 0.0 {
                    errors.push(ConfigError {
                        field: "opex.opex_per_mw_m".into(),
                        message: "must be >= 0".into(),
                    });
                }
                if o.redrilling_per_well_m < 0.0 {
                    errors.push(ConfigError {
                        field: "opex.redrilling_per_well_m".into(),
                        message: "must be >= 0".into(),
                    });
                }
            }
            other => {
                errors.push(ConfigError {
                    field: "opex.model".into(),
                    message: format!("must be \"fixed\" or \"bottom_up\", got \"{other}\""),
                });
            }
        }

        errors
    }

    /// Maps the validated configuration to engine inputs, selecting the
    /// tagged cost-model variants from the section `model` fields.
    pub fn to_inputs(&self) -> ProjectInputs {
        let capex = match self.capex.model.as_str() {
            "scaled" => CapexModel::Scaled {
                above_ground_capex_m_per_mw: self.capex.above_ground_capex_m_per_mw,
                drilling_cost_per_well_m: self.capex.drilling_cost_per_well_m,
                stimulation_cost_per_well_m: self.capex.stimulation_cost_per_well_m,
                exploration_cost_m: self.capex.exploration_cost_m,
                escalation_factor: self.capex.escalation_factor,
            },
            _ => CapexModel::Fixed {
                sco2_capex_m: self.capex.sco2_capex_m,
                geo_capex_per_well_m: self.capex.geo_capex_per_well_m,
            },
        };

        let opex = match self.opex.model.as_str() {
            "bottom_up" => OpexModel::BottomUp {
                annual_salaries_m: self.opex.annual_salaries_m,
                maintenance_per_well_m: self.opex.maintenance_per_well_m,
                opex_per_mw_m: self.opex.opex_per_mw_m,
                redrilling_per_well_m: self.opex.redrilling_per_well_m,
            },
            _ => OpexModel::Fixed {
                annual_opex_m: self.opex.annual_opex_m,
            },
        };

        ProjectInputs {
            captured_and_stored_mtpa: self.resource.captured_and_stored_mtpa,
            percent_sequestered: self.resource.percent_sequestered,
            co2_water_ratio: self.resource.co2_water_ratio,
            max_injection_rate_kgs_per_well: self.resource.max_injection_rate_kgs_per_well,
            thermal_extraction_mwt_kgs: self.resource.thermal_extraction_mwt_kgs,
            thermal_efficiency: self.resource.thermal_efficiency,
            capacity_factor: self.resource.capacity_factor,
            cost_of_capital: self.finance.cost_of_capital,
            power_value_usd_mwh: self.finance.power_value_usd_mwh,
            carbon_price_above_45q: self.finance.carbon_price_above_45q,
            co2_cost_per_tonne: self.finance.co2_cost_per_tonne,
            tax_credit_45q_usd_tonne: self.finance.tax_credit_45q_usd_tonne,
            tax_credit_duration_years: self.project.tax_credit_duration_years,
            tax_rate: self.finance.tax_rate,
            project_life_years: self.project.operating_life_years,
            capex,
            opex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_case_preset_valid() {
        let cfg = ProjectConfig::base_case();
        let errors = cfg.validate();
        assert!(errors.is_empty(), "base_case should be valid: {errors:?}");
    }

    #[test]
    fn from_preset_base_case() {
        let cfg = ProjectConfig::from_preset("base_case");
        assert!(cfg.is_ok());
    }

    #[test]
    fn from_preset_unknown() {
        let err = ProjectConfig::from_preset("nonexistent");
        assert!(err.is_err());
        let e = err.unwrap_err();
        assert!(e.message.contains("unknown preset"));
    }

    #[test]
    fn valid_toml_parses() {
        let toml = r#"
[project]
operating_life_years = 20
tax_credit_duration_years = 12

[resource]
captured_and_stored_mtpa = 0.5
percent_sequestered = 0.02
co2_water_ratio = 1.5
max_injection_rate_kgs_per_well = 120.0
thermal_extraction_mwt_kgs = 0.65
thermal_efficiency = 0.17
capacity_factor = 0.95

[finance]
cost_of_capital = 0.1
power_value_usd_mwh = 80.0
carbon_price_above_45q = 50.0
co2_cost_per_tonne = 90.0
tax_credit_45q_usd_tonne = 85.0
tax_rate = 0.21

[capex]
model = "scaled"
above_ground_capex_m_per_mw = 2.5
drilling_cost_per_well_m = 9.0
stimulation_cost_per_well_m = 1.5
exploration_cost_m = 12.0
escalation_factor = 1.2

[opex]
model = "bottom_up"
annual_salaries_m = 6.0
maintenance_per_well_m = 0.6
opex_per_mw_m = 0.04
redrilling_per_well_m = 0.5
"#;
        let cfg = ProjectConfig::from_toml_str(toml);
        assert!(cfg.is_ok(), "valid TOML should parse: {:?}", cfg.err());
        let cfg = cfg.ok();
        assert_eq!(
            cfg.as_ref().map(|c| c.project.operating_life_years),
            Some(20)
        );
        assert_eq!(cfg.as_ref().map(|c| &*c.capex.model), Some("scaled"));
        assert_eq!(cfg.as_ref().and_then(|c| c.finance.tax_rate), Some(0.21));
    }

    #[test]
    fn invalid_toml_unknown_field() {
        let toml = r#"
[resource]
captured_and_stored_mtpa = 0.2
bogus_field = true
"#;
        let result = ProjectConfig::from_toml_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml = r#"
[finance]
power_value_usd_mwh = 120.0
"#;
        let cfg = ProjectConfig::from_toml_str(toml);
        assert!(cfg.is_ok());
        let cfg = cfg.ok();
        // price overridden
        assert_eq!(
            cfg.as_ref().map(|c| c.finance.power_value_usd_mwh),
            Some(120.0)
        );
        // everything else kept default
        assert_eq!(cfg.as_ref().map(|c| c.finance.cost_of_capital), Some(0.08));
        assert_eq!(
            cfg.as_ref().map(|c| c.resource.captured_and_stored_mtpa),
            Some(0.2)
        );
        assert_eq!(
            cfg.as_ref().map(|c| c.project.operating_life_years),
            Some(15)
        );
    }

    #[test]
    fn validation_catches_zero_percent_sequestered() {
        let mut cfg = ProjectConfig::base_case();
        cfg.resource.percent_sequestered = 0.0;
        let errors = cfg.validate();
        assert!(
            errors
                .iter()
                .any(|e| e.field == "resource.percent_sequestered")
        );
    }

    #[test]
    fn validation_catches_zero_life() {
        let mut cfg = ProjectConfig::base_case();
        cfg.project.operating_life_years = 0;
        let errors = cfg.validate();
        assert!(
            errors
                .iter()
                .any(|e| e.field == "project.operating_life_years")
        );
    }

    #[test]
    fn validation_catches_capacity_factor_out_of_range() {
        let mut cfg = ProjectConfig::base_case();
        cfg.resource.capacity_factor = 1.5;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "resource.capacity_factor"));
    }

    #[test]
    fn validation_catches_bad_capex_model() {
        let mut cfg = ProjectConfig::base_case();
        cfg.capex.model = "bogus".to_string();
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "capex.model"));
    }

    #[test]
    fn validation_catches_bad_tax_rate() {
        let mut cfg = ProjectConfig::base_case();
        cfg.finance.tax_rate = Some(1.5);
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "finance.tax_rate"));
    }

    #[test]
    fn validation_catches_pathological_discount_rate() {
        let mut cfg = ProjectConfig::base_case();
        cfg.finance.cost_of_capital = -1.0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "finance.cost_of_capital"));
    }

    #[test]
    fn validation_accepts_bottom_up_opex() {
        let mut cfg = ProjectConfig::base_case();
        cfg.opex.model = "bottom_up".to_string();
        let errors = cfg.validate();
        assert!(
            errors.is_empty(),
            "bottom_up opex should be valid: {errors:?}"
        );
    }

    #[test]
    fn all_presets_are_valid() {
        for name in ProjectConfig::PRESETS {
            let cfg = ProjectConfig::from_preset(name);
            assert!(cfg.is_ok(), "preset \"{name}\" should load");
            let errors = cfg.as_ref().map(|c| c.validate()).unwrap_or_default();
            assert!(
                errors.is_empty(),
                "preset \"{name}\" should be valid: {errors:?}"
            );
        }
    }

    #[test]
    fn scaled_preset_selects_scaled_variants() {
        let inputs = ProjectConfig::scaled().to_inputs();
        assert!(matches!(inputs.capex, CapexModel::Scaled { .. }));
        assert!(matches!(inputs.opex, OpexModel::BottomUp { .. }));
        assert_eq!(inputs.tax_rate, Some(0.21));
    }

    #[test]
    fn base_case_maps_to_fixed_variants() {
        let inputs = ProjectConfig::base_case().to_inputs();
        assert!(matches!(inputs.capex, CapexModel::Fixed { .. }));
        assert!(matches!(inputs.opex, OpexModel::Fixed { .. }));
        assert_eq!(inputs.project_life_years, 15);
        assert_eq!(inputs.tax_credit_duration_years, 12);
        assert!(inputs.tax_rate.is_none());
    }

    #[test]
    fn low_price_preset_depresses_revenue() {
        let base = ProjectConfig::base_case();
        let low = ProjectConfig::low_price();
        assert!(low.finance.power_value_usd_mwh < base.finance.power_value_usd_mwh);
        assert_eq!(low.finance.carbon_price_above_45q, 0.0);
    }
}
