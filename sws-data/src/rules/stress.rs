//! Groundwater stress waterfall.

use super::{Rule, Waterfall};
use sws_core::{DailyRecord, GroundwaterStatus};

/// Water table shallower than this (mbgl) can be Safe
pub const SAFE_DEPTH_MBGL: f64 = 12.0;
/// Water table deeper than this (mbgl) can be Critical
pub const CRITICAL_DEPTH_MBGL: f64 = 20.0;
/// Net change below this (MLD) can be Critical
pub const CRITICAL_NET_CHANGE_MLD: f64 = -5.0;

/// Inputs of the stress classification for one record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StressInputs {
    pub depth_mbgl: f64,
    /// `None` before the series has enough history; no rule matches it
    pub net_change_mld: Option<f64>,
    pub extraction_wells: u32,
    pub recharge_wells: u32,
}

impl From<&DailyRecord> for StressInputs {
    fn from(record: &DailyRecord) -> Self {
        StressInputs {
            depth_mbgl: record.raw.groundwater_mbgl,
            net_change_mld: Some(record.net_gw_change_mld),
            extraction_wells: record.raw.extraction_wells,
            recharge_wells: record.raw.recharge_wells,
        }
    }
}

fn shallow_and_recharging(i: &StressInputs) -> bool {
    i.depth_mbgl < SAFE_DEPTH_MBGL && i.net_change_mld.is_some_and(|n| n >= 0.0)
}

fn deep_and_depleting(i: &StressInputs) -> bool {
    i.depth_mbgl > CRITICAL_DEPTH_MBGL
        && i.net_change_mld.is_some_and(|n| n < CRITICAL_NET_CHANGE_MLD)
}

pub const STRESS_WATERFALL: Waterfall<'static, StressInputs, GroundwaterStatus> = Waterfall {
    rules: &[
        Rule {
            name: "shallow water table with non-negative net recharge",
            predicate: shallow_and_recharging,
            outcome: GroundwaterStatus::Safe,
        },
        Rule {
            name: "deep water table with heavy net depletion",
            predicate: deep_and_depleting,
            outcome: GroundwaterStatus::Critical,
        },
    ],
    fallback: GroundwaterStatus::Warning,
};

/// Classify groundwater stress and explain the verdict in terms of the
/// district's wells.
pub fn classify_groundwater_stress(inputs: &StressInputs) -> (GroundwaterStatus, String) {
    let status = STRESS_WATERFALL.evaluate(inputs);
    (status, explain(status, inputs))
}

fn explain(status: GroundwaterStatus, i: &StressInputs) -> String {
    match status {
        GroundwaterStatus::Safe => format!(
            "Groundwater levels are healthy. Natural and artificial recharge ({} wells) are \
             successfully balancing the extraction ({} wells).",
            i.recharge_wells, i.extraction_wells
        ),
        GroundwaterStatus::Critical => format!(
            "Critical stress detected! Extremely high extraction ({} wells) is far outpacing \
             recharge, and the water table is dangerously deep at {} mbgl.",
            i.extraction_wells, i.depth_mbgl
        ),
        GroundwaterStatus::Warning => format!(
            "Groundwater warning. The extraction rate is high, and recharge mechanisms ({} wells) \
             are barely keeping up with demand.",
            i.recharge_wells
        ),
    }
}
