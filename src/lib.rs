//! Techno-economic analysis for a combined geothermal-power /
//! CO2-sequestration project.

#[cfg(feature = "api")]
pub mod api;
pub mod config;
/// Append-only history of evaluation runs.
pub mod history;
pub mod io;
/// Cash-flow engine: derivation, costing, timeline, and metric extraction.
pub mod tea;
