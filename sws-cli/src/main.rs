//! SWS CLI - Command line tool for simulated Saurashtra water security data.

use clap::Parser;
use log::info;
use std::path::PathBuf;
use sws_engine::{EngineConfig, WaterSecurityEngine};

#[derive(Parser)]
#[command(
    name = "sws-cli",
    version,
    about = "Saurashtra water security simulation toolkit"
)]
struct Cli {
    /// JSON engine config; unset fields keep their defaults
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Generator seed, overriding the config file
    #[arg(long, global = true, conflicts_with = "unseeded")]
    seed: Option<u64>,

    /// Seed the generator from OS entropy
    #[arg(long, global = true)]
    unseeded: bool,

    #[command(subcommand)]
    command: sws_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if cli.unseeded {
        config.seed = None;
    } else if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    info!(
        "{} districts, {} to {}, seed {:?}",
        config.districts.len(),
        config.start_date,
        config.end_date,
        config.seed
    );

    let engine = WaterSecurityEngine::new(config);
    sws_cmd::run(&engine, cli.command)
}
