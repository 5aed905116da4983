use crate::category::{GroundwaterStatus, RiskCategory};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One simulated day for one district, as produced by the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub date: NaiveDate,
    pub district: String,
    pub rainfall_mm: f64,
    pub temperature_c: f64,
    /// Depth of the water table in metres below ground level (mbgl)
    pub groundwater_mbgl: f64,
    /// Reservoir fill in percent of capacity, within [0, 100]
    pub reservoir_pct: f64,
    pub demand_mld: f64,
    pub extraction_wells: u32,
    pub recharge_wells: u32,
}

impl RawRecord {
    pub fn month(&self) -> u32 {
        self.date.month()
    }
}

/// A raw record extended with every field the feature pipeline derives.
///
/// Rolling and lag fields of the first days of a series carry the
/// backfilled values described in `sws_data::features`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub raw: RawRecord,
    pub rain_30d_avg: f64,
    pub temp_30d_avg: f64,
    pub rain_lag1: f64,
    pub rain_lag7: f64,
    pub natural_recharge_mld: f64,
    pub artificial_recharge_mld: f64,
    pub extraction_mld: f64,
    pub net_gw_change_mld: f64,
    pub estimated_supply_mld: f64,
    /// Estimated supply minus demand; negative values are a deficit
    pub water_gap_mld: f64,
    pub groundwater_status: GroundwaterStatus,
    pub groundwater_explanation: String,
    pub risk: RiskCategory,
}

impl DailyRecord {
    pub fn date(&self) -> NaiveDate {
        self.raw.date
    }

    pub fn district(&self) -> &str {
        &self.raw.district
    }

    pub fn month(&self) -> u32 {
        self.raw.month()
    }

    /// Ordinal risk label (0 = Safe, 1 = Warning, 2 = Critical).
    pub fn risk_label(&self) -> u32 {
        self.risk.label()
    }
}
