//! Command-line interface definitions.

pub mod report;

use clap::Parser;
use std::path::PathBuf;

/// Buyside - brute-force ETF purchase planner.
#[derive(Parser, Debug)]
#[command(name = "buyside")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Amount of money to be invested; without it no computation runs
    #[arg(long)]
    pub budget: Option<i64>,

    /// Acceptance window: keep totals in [budget - window, budget + window]
    #[arg(long, default_value_t = 10)]
    pub window: u64,

    /// Path to configuration file
    #[arg(short, long, default_value = "info.toml")]
    pub config: PathBuf,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,
}
