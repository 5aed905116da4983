//! CSV writers over derived datasets.
//!
//! The export table is an adapter over the export-profile dataset: same
//! generator, same stress waterfall, its own column names and no supply,
//! gap or risk columns. The dump table writes every raw and derived
//! field of any dataset.

use csv::Writer;
use log::info;
use serde::Serialize;
use std::io;
use sws_core::{DailyRecord, Dataset, Result};
use sws_sim::weather::round_to;
use sws_utils::dates::format_date;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExportRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "District")]
    pub district: String,
    #[serde(rename = "Rainfall_mm")]
    pub rainfall_mm: f64,
    #[serde(rename = "Groundwater_Level_mbgl")]
    pub groundwater_mbgl: f64,
    #[serde(rename = "Reservoir_Level_pct")]
    pub reservoir_pct: f64,
    #[serde(rename = "Extraction Borewells")]
    pub extraction_wells: u32,
    #[serde(rename = "Recharge Borewells")]
    pub recharge_wells: u32,
    #[serde(rename = "Groundwater Stress Classification")]
    pub stress: String,
    #[serde(rename = "Net Groundwater Change MLD")]
    pub net_change_mld: f64,
    /// Natural plus artificial recharge
    #[serde(rename = "Groundwater Recovery MLD")]
    pub recovery_mld: f64,
    #[serde(rename = "Groundwater Extraction MLD")]
    pub extraction_mld: f64,
}

impl From<&DailyRecord> for ExportRow {
    fn from(r: &DailyRecord) -> Self {
        ExportRow {
            date: format_date(&r.date()),
            district: r.district().to_string(),
            rainfall_mm: r.raw.rainfall_mm,
            groundwater_mbgl: r.raw.groundwater_mbgl,
            reservoir_pct: r.raw.reservoir_pct,
            extraction_wells: r.raw.extraction_wells,
            recharge_wells: r.raw.recharge_wells,
            stress: r.groundwater_status.to_string(),
            net_change_mld: round_to(r.net_gw_change_mld, 2),
            recovery_mld: round_to(r.natural_recharge_mld + r.artificial_recharge_mld, 2),
            extraction_mld: round_to(r.extraction_mld, 2),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
struct DumpRow<'a> {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "District")]
    district: &'a str,
    #[serde(rename = "Rainfall_mm")]
    rainfall_mm: f64,
    #[serde(rename = "Temperature_C")]
    temperature_c: f64,
    #[serde(rename = "Groundwater_Level_mbgl")]
    groundwater_mbgl: f64,
    #[serde(rename = "Reservoir_Level_pct")]
    reservoir_pct: f64,
    #[serde(rename = "Water_Demand_MLD")]
    demand_mld: f64,
    extraction_borewells: u32,
    recharge_borewells: u32,
    #[serde(rename = "Month")]
    month: u32,
    #[serde(rename = "Rain_30d_Avg")]
    rain_30d_avg: f64,
    #[serde(rename = "Temp_30d_Avg")]
    temp_30d_avg: f64,
    #[serde(rename = "Rain_Lag1")]
    rain_lag1: f64,
    #[serde(rename = "Rain_Lag7")]
    rain_lag7: f64,
    #[serde(rename = "Natural_Recharge_MLD")]
    natural_recharge_mld: f64,
    #[serde(rename = "Artificial_Recharge_MLD")]
    artificial_recharge_mld: f64,
    #[serde(rename = "Extraction_MLD")]
    extraction_mld: f64,
    #[serde(rename = "Net_GW_Change_MLD")]
    net_gw_change_mld: f64,
    groundwater_status: &'static str,
    groundwater_explanation: &'a str,
    #[serde(rename = "Estimated_Supply_MLD")]
    estimated_supply_mld: f64,
    #[serde(rename = "Water_Gap_MLD")]
    water_gap_mld: f64,
    #[serde(rename = "Risk_Category")]
    risk_category: &'static str,
    #[serde(rename = "Risk_Label")]
    risk_label: u32,
}

impl<'a> From<&'a DailyRecord> for DumpRow<'a> {
    fn from(r: &'a DailyRecord) -> Self {
        DumpRow {
            date: format_date(&r.date()),
            district: r.district(),
            rainfall_mm: r.raw.rainfall_mm,
            temperature_c: r.raw.temperature_c,
            groundwater_mbgl: r.raw.groundwater_mbgl,
            reservoir_pct: r.raw.reservoir_pct,
            demand_mld: r.raw.demand_mld,
            extraction_borewells: r.raw.extraction_wells,
            recharge_borewells: r.raw.recharge_wells,
            month: r.month(),
            rain_30d_avg: r.rain_30d_avg,
            temp_30d_avg: r.temp_30d_avg,
            rain_lag1: r.rain_lag1,
            rain_lag7: r.rain_lag7,
            natural_recharge_mld: r.natural_recharge_mld,
            artificial_recharge_mld: r.artificial_recharge_mld,
            extraction_mld: r.extraction_mld,
            net_gw_change_mld: r.net_gw_change_mld,
            groundwater_status: r.groundwater_status.as_str(),
            groundwater_explanation: &r.groundwater_explanation,
            estimated_supply_mld: r.estimated_supply_mld,
            water_gap_mld: r.water_gap_mld,
            risk_category: r.risk.as_str(),
            risk_label: r.risk_label(),
        }
    }
}

/// Write the export table for every record of `dataset`.
pub fn write_export_csv<W: io::Write>(dataset: &Dataset, writer: W) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    for record in dataset.records() {
        wtr.serialize(ExportRow::from(record))?;
    }
    wtr.flush()?;
    info!("Exported {} rows", dataset.len());
    Ok(())
}

/// Write every raw and derived column of `dataset`.
pub fn write_dataset_csv<W: io::Write>(dataset: &Dataset, writer: W) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    for record in dataset.records() {
        wtr.serialize(DumpRow::from(record))?;
    }
    wtr.flush()?;
    info!("Wrote {} rows", dataset.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sws_core::{District, SimulationProfile};
    use sws_sim::{generate_dataset, rng::seeded_rng};

    fn dataset(profile: SimulationProfile) -> Dataset {
        let districts = District::saurashtra();
        let mut rng = seeded_rng(Some(3));
        sws_data::derive_features(generate_dataset(
            &districts[..2],
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            &profile,
            &mut rng,
        ))
    }

    #[test]
    fn test_export_columns() {
        let data = dataset(SimulationProfile::export());
        let mut buf = Vec::new();
        write_export_csv(&data, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Date,District,Rainfall_mm,Groundwater_Level_mbgl,Reservoir_Level_pct,\
             Extraction Borewells,Recharge Borewells,Groundwater Stress Classification,\
             Net Groundwater Change MLD,Groundwater Recovery MLD,Groundwater Extraction MLD"
        );
        assert!(lines.next().unwrap().starts_with("2024-01-01,Rajkot,"));
        assert_eq!(lines.count(), 19);
        assert!(!text.contains("Supply"));
        assert!(!text.contains("Risk"));
    }

    #[test]
    fn test_export_row_balance() {
        let data = dataset(SimulationProfile::export());
        for record in data.records() {
            let row = ExportRow::from(record);
            let net = row.recovery_mld - row.extraction_mld;
            assert!((net - row.net_change_mld).abs() < 0.011);
            assert_eq!(row.stress, record.groundwater_status.as_str());
        }
    }

    #[test]
    fn test_dump_has_every_record() {
        let data = dataset(SimulationProfile::dashboard());
        let mut buf = Vec::new();
        write_dataset_csv(&data, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let header = text.lines().next().unwrap();
        assert!(header.starts_with("Date,District,Rainfall_mm,Temperature_C"));
        assert!(header.ends_with("Risk_Category,Risk_Label"));
        assert_eq!(text.lines().count(), data.len() + 1);
    }
}
