//! Command implementations for SWS CLI.
//!
//! Every subcommand runs against one [`WaterSecurityEngine`], so the
//! dataset and models are built at most once per invocation.

use clap::Subcommand;
use std::io::Write;
use sws_engine::WaterSecurityEngine;

pub mod export;
pub mod report;

#[derive(Subcommand)]
pub enum Command {
    /// Write the export-profile table (export column names) to a CSV file
    Export {
        /// Output path for the CSV
        #[arg(short = 'o', long)]
        output_csv: String,

        /// Write every raw and derived column of the dashboard dataset instead
        #[arg(long)]
        dump: bool,
    },

    /// Latest record, classifier risk and groundwater status of a district
    Summary {
        #[arg(short = 'd', long)]
        district: String,
    },

    /// Project the water gap of a district over the coming days
    Forecast {
        #[arg(short = 'd', long)]
        district: String,

        /// Horizon in days (defaults to the configured horizon)
        #[arg(long)]
        days: Option<usize>,
    },

    /// Latest rule-based risk of every district, with map coordinates
    Regions,

    /// Groundwater balance components of a district's latest record
    Balance {
        #[arg(short = 'd', long)]
        district: String,
    },

    /// Held-out model metrics and risk drivers
    Metrics,
}

pub fn run(engine: &WaterSecurityEngine, command: Command) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match command {
        Command::Export { output_csv, dump } => export::run_export(engine, &output_csv, dump),
        Command::Summary { district } => report::write_summary(engine, &district, &mut out),
        Command::Forecast { district, days } => {
            report::write_forecast(engine, &district, days, &mut out)
        }
        Command::Regions => report::write_regions(engine, &mut out),
        Command::Balance { district } => report::write_balance(engine, &district, &mut out),
        Command::Metrics => report::write_metrics(engine, &mut out),
    }?;
    out.flush()?;
    Ok(())
}
