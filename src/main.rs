// pipetriage - GPL-3.0-or-later
// This file is part of pipetriage.
//
// Copyright (C) 2026 Daniel Freiermuth
//
// pipetriage is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// pipetriage is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with pipetriage.  If not, see <https://www.gnu.org/licenses/>.

use anyhow::{Context, Result};
use clap::Parser;
use pipetriage::config::{GlobalConfig, OutputFormat};
use pipetriage::core::report::write_records;
use pipetriage::core::LogFileLoader;
use pipetriage::LogProcessor;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "pipetriage")]
#[command(version = VERSION)]
#[command(about = "Extract structured error records from data-pipeline failure logs", long_about = None)]
struct Args {
    /// Log files or directories containing log files
    #[arg(value_name = "PATH", required_unless_present = "init_config")]
    paths: Vec<PathBuf>,

    /// Output format (defaults to the configured one)
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,

    /// Omit the full log text from emitted records
    #[arg(long)]
    no_content: bool,

    /// Use this config file instead of the one in the user config directory
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunStatus {
    Clean,
    /// Number of inputs that could not be read or listed
    Failed(usize),
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        match status {
            RunStatus::Clean => Self::SUCCESS,
            RunStatus::Failed(_) => Self::FAILURE,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run<W: Write>(args: &Args, out: &mut W) -> Result<RunStatus> {
    if args.init_config {
        let defaults = GlobalConfig::default();
        let path = match &args.config {
            Some(path) => {
                defaults.save_to(path)?;
                path.clone()
            }
            None => defaults.save()?,
        };
        writeln!(out, "Wrote default config to {}", path.display())?;
        return Ok(RunStatus::Clean);
    }

    let config = args
        .config
        .as_deref()
        .map_or_else(GlobalConfig::load, GlobalConfig::load_from);
    let format = args.output.unwrap_or(config.default_output);
    let include_content = config.include_full_content && !args.no_content;

    let expanded = LogFileLoader::expand_inputs(&args.paths, &config.log_extension);
    let mut failures = expanded.unlisted.len();
    for (dir, e) in &expanded.unlisted {
        eprintln!("Unreadable directory: {} ({e:#})", dir.display());
    }
    let files = expanded.files;
    if files.is_empty() {
        tracing::warn!("No log files found in the given paths");
    }

    let processor = LogProcessor::new();
    let mut records = Vec::with_capacity(files.len());
    for (path, result) in files.iter().zip(processor.process_batch(&files)) {
        match result {
            Ok(record) if include_content => records.push(record),
            Ok(record) => records.push(record.without_content()),
            Err(e) => {
                failures += 1;
                eprintln!("Missing: {} ({e:#})", path.display());
            }
        }
    }

    write_records(out, &records, format).context("Failed to write output")?;

    if failures > 0 {
        tracing::warn!("{failures} input(s) could not be processed");
        return Ok(RunStatus::Failed(failures));
    }
    Ok(RunStatus::Clean)
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    tracing::info!("pipetriage starting up (version {VERSION})");

    let stdout = std::io::stdout();
    let status = run(&args, &mut stdout.lock())?;
    Ok(status.into())
}
