use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{arg, Command};
use internal::ParameterOverrides;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("single_run")
        .about("Computes a fleet configuration for one instance")
        .arg(arg!(<INPUT> "Path to the instance json file").value_parser(clap::value_parser!(PathBuf)))
        .arg(
            arg!(--output [DIR] "Directory of the output file")
                .default_value("output")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--"max-iterations" [N] "Overrides maxIterations of the instance")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(--"time-budget" [SECONDS] "Overrides timeBudgetInSeconds of the instance")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            arg!(--"tabu-tenure" [N] "Overrides tabuTenure of the instance")
                .value_parser(clap::value_parser!(usize)),
        )
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn main() {
    enable_tracing();
    if let Err(e) = run_single() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run_single() -> Result<()> {
    let matches = cli().get_matches();
    let input_path = matches
        .get_one::<PathBuf>("INPUT")
        .ok_or_else(|| anyhow!("missing input file"))?;
    let output_dir = matches
        .get_one::<PathBuf>("output")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("output"));
    let overrides = ParameterOverrides {
        max_iterations: matches.get_one::<usize>("max-iterations").copied(),
        time_budget_in_seconds: matches.get_one::<u64>("time-budget").copied(),
        tabu_tenure: matches.get_one::<usize>("tabu-tenure").copied(),
    };

    let input_data = fs::read_to_string(input_path)
        .with_context(|| format!("cannot read {}", input_path.display()))?;
    let input_data: serde_json::Value = serde_json::from_str(&input_data)
        .with_context(|| format!("{} is not valid json", input_path.display()))?;
    tracing::info!("---------- RUN: {} ----------", input_path.display());

    let output = internal::run(input_data, &overrides)?;

    // output path with sub-directory creation
    let output_path = ensure_output_path(input_path, &output_dir)?;
    let file = File::create(&output_path)
        .with_context(|| format!("cannot create {}", output_path.display()))?;
    serde_json::to_writer_pretty(file, &output).context("cannot write output json")?;
    tracing::info!("output written to {}", output_path.display());
    Ok(())
}

fn ensure_output_path(input_path: &Path, output_dir: &Path) -> Result<PathBuf> {
    let file_name = input_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("cannot get file name of {}", input_path.display()))?;
    fs::create_dir_all(output_dir)
        .with_context(|| format!("cannot create {}", output_dir.display()))?;
    Ok(output_dir.join(format!("output_{}", file_name)))
}
