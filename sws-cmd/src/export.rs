//! CSV export of simulated data.

use anyhow::Context;
use log::info;
use std::fs::File;
use std::io::BufWriter;
use sws_engine::export::{write_dataset_csv, write_export_csv};
use sws_engine::WaterSecurityEngine;

/// Write the export-profile table, or with `dump` the full dashboard
/// dataset, to `output_csv`.
pub fn run_export(engine: &WaterSecurityEngine, output_csv: &str, dump: bool) -> anyhow::Result<()> {
    let file = File::create(output_csv).with_context(|| format!("creating {}", output_csv))?;
    let writer = BufWriter::new(file);
    if dump {
        write_dataset_csv(engine.dataset(), writer)?;
    } else {
        write_export_csv(&engine.export_dataset(), writer)?;
    }
    info!("Export complete. Output: {}", output_csv);
    Ok(())
}
