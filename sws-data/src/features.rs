//! Feature derivation for simulated district series.
//!
//! Per district, in chronological order:
//!
//! - 30-day trailing means of rainfall and temperature
//! - rainfall lagged by 1 and 7 days
//! - natural recharge (from the dataset's [`RechargeSource`]), artificial
//!   recharge and extraction from the fixed per-well rates
//! - net groundwater change = natural + artificial recharge - extraction
//! - estimated supply and the water gap (supply - demand)
//!
//! Rolling and lag values do not exist for the first days of a series;
//! every derived column is computed with those gaps, then each column is
//! backfilled from its first defined value and anything still undefined
//! becomes zero. The fill runs once, after all columns exist, and never
//! crosses district boundaries. Stress and risk labels are assigned
//! before the fill, from the unfilled values: a rule that compares a value
//! without history does not match, so warm-up days reflect only the raw
//! readings.

use crate::rules::drought::{classify_drought_risk, DroughtInputs};
use crate::rules::stress::{classify_groundwater_stress, StressInputs};
use crate::series::{backfill_then_zero, lag, rolling_mean};
use log::info;
use sws_core::{
    DailyRecord, Dataset, DistrictSeries, GroundwaterStatus, RawDataset, RawRecord,
    RechargeSource, RiskCategory,
};

pub const ROLLING_WINDOW_DAYS: usize = 30;
/// Artificial recharge per recharge borewell, MLD
pub const ARTIFICIAL_RECHARGE_MLD_PER_WELL: f64 = 0.05;
/// Extraction per extraction borewell, MLD
pub const EXTRACTION_MLD_PER_WELL: f64 = 0.12;

/// Supply proxy in MLD from recent rain, water-table depth and reservoir
/// fill. Not a physical model.
pub fn estimated_supply(rain_30d_avg: f64, groundwater_mbgl: f64, reservoir_pct: f64) -> f64 {
    (rain_30d_avg * 2.0) + (100.0 - groundwater_mbgl) * 2.0 + (reservoir_pct * 1.5)
}

/// Add every derived field to a raw dataset.
pub fn derive_features(raw: RawDataset) -> Dataset {
    let recharge = raw.profile.recharge;
    let series = raw
        .series
        .into_iter()
        .map(|s| derive_series(s, recharge))
        .collect::<Vec<_>>();
    let dataset = Dataset {
        profile: raw.profile,
        start: raw.start,
        end: raw.end,
        series,
    };
    info!("Derived features for {} records", dataset.len());
    dataset
}

fn derive_series(series: DistrictSeries<RawRecord>, recharge: RechargeSource) -> DistrictSeries<DailyRecord> {
    let records = series.records;
    let rain: Vec<f64> = records.iter().map(|r| r.rainfall_mm).collect();
    let temp: Vec<f64> = records.iter().map(|r| r.temperature_c).collect();

    let artificial = f64::from(series.profile.recharge_wells) * ARTIFICIAL_RECHARGE_MLD_PER_WELL;
    let extraction = f64::from(series.profile.extraction_wells) * EXTRACTION_MLD_PER_WELL;

    let rain_30d = rolling_mean(&rain, ROLLING_WINDOW_DAYS);
    let temp_30d = rolling_mean(&temp, ROLLING_WINDOW_DAYS);
    let lag1 = lag(&rain, 1);
    let lag7 = lag(&rain, 7);

    let natural: Vec<Option<f64>> = records
        .iter()
        .zip(&rain_30d)
        .map(|(r, avg)| recharge.natural_recharge(*avg, r.rainfall_mm))
        .collect();
    let net: Vec<Option<f64>> = natural
        .iter()
        .map(|n| n.map(|n| n + artificial - extraction))
        .collect();
    let supply: Vec<Option<f64>> = records
        .iter()
        .zip(&rain_30d)
        .map(|(r, avg)| avg.map(|a| estimated_supply(a, r.groundwater_mbgl, r.reservoir_pct)))
        .collect();
    let gap: Vec<Option<f64>> = records
        .iter()
        .zip(&supply)
        .map(|(r, s)| s.map(|s| s - r.demand_mld))
        .collect();

    let labels: Vec<(GroundwaterStatus, String, RiskCategory)> = records
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            let (status, explanation) = classify_groundwater_stress(&StressInputs {
                depth_mbgl: raw.groundwater_mbgl,
                net_change_mld: net[i],
                extraction_wells: raw.extraction_wells,
                recharge_wells: raw.recharge_wells,
            });
            let risk = classify_drought_risk(&DroughtInputs {
                reservoir_pct: raw.reservoir_pct,
                rain_30d_avg: rain_30d[i],
                groundwater_mbgl: raw.groundwater_mbgl,
                water_gap_mld: gap[i],
            });
            (status, explanation, risk)
        })
        .collect();

    let rain_30d = backfill_then_zero(rain_30d);
    let temp_30d = backfill_then_zero(temp_30d);
    let lag1 = backfill_then_zero(lag1);
    let lag7 = backfill_then_zero(lag7);
    let natural = backfill_then_zero(natural);
    let net = backfill_then_zero(net);
    let supply = backfill_then_zero(supply);
    let gap = backfill_then_zero(gap);

    let derived = records
        .into_iter()
        .zip(labels)
        .enumerate()
        .map(|(i, (raw, (groundwater_status, groundwater_explanation, risk)))| DailyRecord {
            raw,
            rain_30d_avg: rain_30d[i],
            temp_30d_avg: temp_30d[i],
            rain_lag1: lag1[i],
            rain_lag7: lag7[i],
            natural_recharge_mld: natural[i],
            artificial_recharge_mld: artificial,
            extraction_mld: extraction,
            net_gw_change_mld: net[i],
            estimated_supply_mld: supply[i],
            water_gap_mld: gap[i],
            groundwater_status,
            groundwater_explanation,
            risk,
        })
        .collect();

    DistrictSeries {
        profile: series.profile,
        records: derived,
    }
}
