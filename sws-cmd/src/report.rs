//! JSON reports over the cached dataset and models.

use serde::Serialize;
use std::io::Write;
use sws_engine::WaterSecurityEngine;
use sws_model::{FeatureImportance, ForecastResult, ModelMetrics};

#[derive(Serialize)]
struct ForecastReport {
    #[serde(flatten)]
    forecast: ForecastResult,
    mean_gap_mld: f64,
    recommendation: &'static str,
}

#[derive(Serialize)]
struct MetricsReport<'a> {
    metrics: &'a ModelMetrics,
    classifier_features: Vec<&'static str>,
    regressor_features: Vec<&'static str>,
    risk_drivers: &'a [FeatureImportance],
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_summary<W: Write>(
    engine: &WaterSecurityEngine,
    district: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    write_json(out, &engine.summary(district)?)
}

pub fn write_forecast<W: Write>(
    engine: &WaterSecurityEngine,
    district: &str,
    days: Option<usize>,
    out: &mut W,
) -> anyhow::Result<()> {
    let forecast = engine.forecast(district, days)?;
    let report = ForecastReport {
        mean_gap_mld: forecast.mean_gap(),
        recommendation: forecast.recommendation().as_str(),
        forecast,
    };
    write_json(out, &report)
}

pub fn write_regions<W: Write>(engine: &WaterSecurityEngine, out: &mut W) -> anyhow::Result<()> {
    write_json(out, &engine.regional_overview()?)
}

pub fn write_balance<W: Write>(
    engine: &WaterSecurityEngine,
    district: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    write_json(out, &engine.water_balance(district)?)
}

pub fn write_metrics<W: Write>(engine: &WaterSecurityEngine, out: &mut W) -> anyhow::Result<()> {
    let models = engine.models()?;
    let report = MetricsReport {
        metrics: &models.metrics,
        classifier_features: models.classifier_features().iter().map(|f| f.name()).collect(),
        regressor_features: models.regressor_features().iter().map(|f| f.name()).collect(),
        risk_drivers: &models.risk_importance,
    };
    write_json(out, &report)
}
