mod error;
mod pipeline;
mod progress;

use anyhow::{Context as _, Result};
use clap::Parser;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::error::{exit_code_for, report_error};
use crate::pipeline::{process_file, Outcome, PipelineOptions};
use crate::progress::ConsoleProgress;
use rollcall_config as config;
use rollcall_core::Silent;

#[derive(Debug, Parser)]
#[command(
    name = "rollcall",
    version,
    about = "Normalize name, phone and email columns into a clean CSV"
)]
struct Cli {
    /// Input file (.csv, .xlsx or .xls)
    input: PathBuf,
    /// Output CSV file
    output: PathBuf,
    /// Optional TOML file with extra column aliases and phone rules
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print a JSON report instead of progress lines
    #[arg(long)]
    json: bool,
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        input,
        output,
        config: config_path,
        json,
        verbose: _,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if let Some(path) = &config_path {
        debug!(path = %path.display(), "config loaded");
    }
    let options = PipelineOptions::from(app_config);

    if json {
        let outcome = process_file(&input, &output, &options, &mut Silent)?;
        return print_json(&outcome);
    }

    let outcome = process_file(&input, &output, &options, &mut ConsoleProgress)?;
    if let Outcome::NoRecognizableColumns { .. } = outcome {
        println!(
            "no recognizable columns found: expected a name, phone or email header; nothing written"
        );
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .try_init();
}
