//! Report structs built from cached records and model output.
//!
//! All structs derive `Serialize` so the command layer can print them
//! as JSON.

use chrono::NaiveDate;
use serde::Serialize;
use sws_core::{DailyRecord, GroundwaterStatus, RiskCategory};
use sws_model::ModelMetrics;

/// Latest state of one district plus the classifier's view of it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DistrictSummary {
    pub district: String,
    pub latest: DailyRecord,
    /// Risk predicted by the trained classifier
    pub predicted_risk: RiskCategory,
    /// Risk assigned by the drought rule waterfall
    pub rule_risk: RiskCategory,
    /// Why the rule waterfall escalated, if it did
    pub risk_reason: Option<&'static str>,
    pub groundwater_status: GroundwaterStatus,
    pub groundwater_explanation: String,
    pub metrics: ModelMetrics,
}

/// One marker of the regional risk map.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegionalRiskEntry {
    pub district: String,
    pub date: NaiveDate,
    pub latitude: f64,
    pub longitude: f64,
    /// Baseline annual rainfall of the district's regime, mm
    pub normal_rainfall_mm: f64,
    pub risk: RiskCategory,
    /// Ordinal of `risk` (0 = Safe, 1 = Warning, 2 = Critical)
    pub risk_score: u32,
    pub water_demand_mld: f64,
    pub groundwater_status: GroundwaterStatus,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BalanceComponent {
    pub component: &'static str,
    pub mld: f64,
}

/// Groundwater balance of one record split into its contributions.
/// Extraction enters as a negative component.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WaterBalance {
    pub district: String,
    pub date: NaiveDate,
    pub extraction_wells: u32,
    pub recharge_wells: u32,
    pub components: Vec<BalanceComponent>,
    pub net_change_mld: f64,
}

impl WaterBalance {
    pub fn from_record(record: &DailyRecord) -> Self {
        WaterBalance {
            district: record.district().to_string(),
            date: record.date(),
            extraction_wells: record.raw.extraction_wells,
            recharge_wells: record.raw.recharge_wells,
            components: vec![
                BalanceComponent {
                    component: "Natural Recharge",
                    mld: record.natural_recharge_mld,
                },
                BalanceComponent {
                    component: "Artificial Recharge",
                    mld: record.artificial_recharge_mld,
                },
                BalanceComponent {
                    component: "Extraction",
                    mld: -record.extraction_mld,
                },
            ],
            net_change_mld: record.net_gw_change_mld,
        }
    }

    /// Sum of the components, equal to `net_change_mld`.
    pub fn total(&self) -> f64 {
        self.components.iter().map(|c| c.mld).sum()
    }
}
