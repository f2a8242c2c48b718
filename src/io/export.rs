//! CSV export for cash-flow tables and the run-history sheet.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::history::RunHistory;
use crate::tea::timeline::CashFlowTimeline;

/// Column header for the per-year cash-flow export.
const CASHFLOW_HEADER: &str = "year,capex_m,electricity_m,credit_45q_m,carbon_credit_m,\
                               opex_m,co2_purchase_m,tax_m,net_m,cumulative_m";

/// Exports the per-year cash-flow table to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_cashflow_csv(timeline: &CashFlowTimeline, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_cashflow_csv(timeline, buf)
}

/// Writes the per-year cash-flow table as CSV to any writer.
///
/// One row per analysis year with all flow components, net, and cumulative
/// cash flow. Produces deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_cashflow_csv(timeline: &CashFlowTimeline, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(CASHFLOW_HEADER.split(',').map(str::trim))?;

    for row in timeline.rows() {
        wtr.write_record(&[
            row.year.to_string(),
            format!("{:.4}", row.capex_m),
            format!("{:.4}", row.electricity_m),
            format!("{:.4}", row.credit_45q_m),
            format!("{:.4}", row.carbon_credit_m),
            format!("{:.4}", row.opex_m),
            format!("{:.4}", row.co2_purchase_m),
            format!("{:.4}", row.tax_m),
            format!("{:.4}", row.net_m),
            format!("{:.4}", row.cumulative_m),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Exports the run history as a transposed CSV sheet at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_runs_csv(history: &RunHistory, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_runs_csv(history, buf)
}

/// Writes the run history as a transposed CSV sheet: one column per run,
/// one row per parameter or metric.
///
/// Rows are the first-seen-ordered union of field labels across all runs;
/// a run without a field (inactive cost model, undefined metric) gets an
/// empty cell.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_runs_csv(history: &RunHistory, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    let mut header = vec!["Parameter".to_string()];
    header.extend((1..=history.len()).map(|i| format!("Run_{i}")));
    wtr.write_record(&header)?;

    for label in history.labels() {
        let mut record = vec![label.clone()];
        for run in history.runs() {
            record.push(match run.value(&label) {
                Some(v) => format!("{v:.4}"),
                None => String::new(),
            });
        }
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
