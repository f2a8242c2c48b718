//! TEA entry point — CLI wiring around one scenario evaluation.

use std::path::Path;
use std::process;

use dualwell_tea::config::ProjectConfig;
use dualwell_tea::history::{RunHistory, RunRecord};
use dualwell_tea::io::export::{export_cashflow_csv, export_runs_csv};
use dualwell_tea::tea::engine::evaluate;

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    cashflow_out: Option<String>,
    runs_out: Option<String>,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: u16,
}

fn print_help() {
    eprintln!("dualwell-tea — Techno-economic analysis for geothermal CO2 sequestration");
    eprintln!();
    eprintln!("Usage: dualwell-tea [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>       Load scenario from TOML config file");
    eprintln!("  --preset <name>         Use a built-in preset (base_case, scaled, low_price)");
    eprintln!("  --cashflow-out <path>   Export the per-year cash-flow table to CSV");
    eprintln!("  --runs-out <path>       Export the run sheet (inputs + results) to CSV");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve                 Start REST API server after the evaluation");
        eprintln!("  --port <u16>            API server port (default: 3000)");
    }
    eprintln!("  --help                  Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the base_case preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        cashflow_out: None,
        runs_out: None,
        #[cfg(feature = "api")]
        serve: false,
        #[cfg(feature = "api")]
        port: 3000,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--scenario" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --scenario requires a path argument");
                    process::exit(1);
                }
                cli.scenario_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--cashflow-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --cashflow-out requires a path argument");
                    process::exit(1);
                }
                cli.cashflow_out = Some(args[i].clone());
            }
            "--runs-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --runs-out requires a path argument");
                    process::exit(1);
                }
                cli.runs_out = Some(args[i].clone());
            }
            #[cfg(feature = "api")]
            "--serve" => {
                cli.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --port requires a u16 argument");
                    process::exit(1);
                }
                if let Ok(p) = args[i].parse::<u16>() {
                    cli.port = p;
                } else {
                    eprintln!("error: --port value \"{}\" is not a valid u16", args[i]);
                    process::exit(1);
                }
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn main() {
    let cli = parse_args();

    // Load config: --scenario takes priority, then --preset, then base_case
    let scenario = if let Some(ref path) = cli.scenario_path {
        match ProjectConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match ProjectConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        ProjectConfig::base_case()
    };

    // Validate
    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    // Evaluate
    let evaluation = match evaluate(&scenario.to_inputs()) {
        Ok(evaluation) => evaluation,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    // Print per-year cash flows
    for row in evaluation.timeline.rows() {
        println!("{row}");
    }

    // Print diagnostics and metrics
    let d = &evaluation.derived;
    println!(
        "\nWells: {} ({} injection)  Power: {:.1} MW  Energy: {:.0} MWh/yr",
        d.total_wells, d.injection_wells, d.power_generated_mw, d.annual_energy_mwh
    );
    println!(
        "Capex: {:.1} $M (above-ground {:.1}, subsurface {:.1})  Opex: {:.1} $M/yr",
        d.total_capex_m, d.above_ground_capex_m, d.subsurface_capex_m, d.annual_opex_m
    );
    println!("\n{}", evaluation.metrics);

    // Export CSVs if requested
    if let Some(ref path) = cli.cashflow_out {
        if let Err(e) = export_cashflow_csv(&evaluation.timeline, Path::new(path)) {
            eprintln!("error: failed to write cash-flow CSV: {e}");
            process::exit(1);
        }
        eprintln!("Cash-flow table written to {path}");
    }

    if let Some(ref path) = cli.runs_out {
        let mut history = RunHistory::new();
        history.push(RunRecord::from_evaluation(&scenario, &evaluation));
        if let Err(e) = export_runs_csv(&history, Path::new(path)) {
            eprintln!("error: failed to write runs CSV: {e}");
            process::exit(1);
        }
        eprintln!("Run sheet written to {path}");
    }

    // Start API server if requested
    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(dualwell_tea::api::AppState {
            config: scenario,
            derived: evaluation.derived,
            metrics: evaluation.metrics,
            years: evaluation.timeline.rows(),
        });
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        rt.block_on(dualwell_tea::api::serve(state, addr));
    }
}
