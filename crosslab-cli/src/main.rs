//! CrossLab CLI — scan `data.csv` for short/long SMA crossovers.
//!
//! Reads closing prices from `data.csv` in the working directory, scans them
//! on four workers with SMA(5)/SMA(10), and prints the Buy and Sell signals
//! followed by the total execution time. Logs go to stderr (`RUST_LOG`).

use std::io;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use crosslab_runner::{run_scan, write_report, ScanConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "crosslab",
    version,
    about = "CrossLab — parallel moving average crossover scan of data.csv"
)]
struct Cli {}

fn main() {
    let start = Instant::now();
    let _cli = Cli::parse();
    init_tracing();

    // Failures are reported on stdout and end the run normally.
    if let Err(err) = run(start) {
        println!("{err}");
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn run(start: Instant) -> Result<()> {
    let config = ScanConfig::default();
    let report = run_scan(&config)?;

    tracing::debug!(scan_elapsed = ?report.elapsed, "writing report");
    write_report(io::stdout().lock(), &report, start.elapsed())?;
    Ok(())
}
