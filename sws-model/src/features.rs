//! Model input columns and feature rows.

use serde::{Deserialize, Serialize};
use sws_core::{DailyRecord, EngineError, Result};

/// A model input column drawn from a [`DailyRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    Rainfall,
    Temperature,
    GroundwaterDepth,
    ReservoirLevel,
    Month,
    Rain30dAvg,
    RainLag1,
    RainLag7,
}

/// Columns of the risk classifier, in trained order.
pub const RISK_FEATURES: [Feature; 6] = [
    Feature::Rainfall,
    Feature::Temperature,
    Feature::GroundwaterDepth,
    Feature::ReservoirLevel,
    Feature::Month,
    Feature::Rain30dAvg,
];

/// Columns of the gap regressor, in trained order.
pub const GAP_FEATURES: [Feature; 5] = [
    Feature::Rainfall,
    Feature::Temperature,
    Feature::RainLag1,
    Feature::RainLag7,
    Feature::Month,
];

impl Feature {
    pub fn name(&self) -> &'static str {
        match self {
            Feature::Rainfall => "Rainfall_mm",
            Feature::Temperature => "Temperature_C",
            Feature::GroundwaterDepth => "Groundwater_Level_mbgl",
            Feature::ReservoirLevel => "Reservoir_Level_pct",
            Feature::Month => "Month",
            Feature::Rain30dAvg => "Rain_30d_Avg",
            Feature::RainLag1 => "Rain_Lag1",
            Feature::RainLag7 => "Rain_Lag7",
        }
    }

    pub fn value(&self, record: &DailyRecord) -> f64 {
        match self {
            Feature::Rainfall => record.raw.rainfall_mm,
            Feature::Temperature => record.raw.temperature_c,
            Feature::GroundwaterDepth => record.raw.groundwater_mbgl,
            Feature::ReservoirLevel => record.raw.reservoir_pct,
            Feature::Month => f64::from(record.month()),
            Feature::Rain30dAvg => record.rain_30d_avg,
            Feature::RainLag1 => record.rain_lag1,
            Feature::RainLag7 => record.rain_lag7,
        }
    }
}

/// Named feature values for a single prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRow {
    pub columns: Vec<(Feature, f64)>,
}

impl FeatureRow {
    pub fn new(columns: Vec<(Feature, f64)>) -> Self {
        FeatureRow { columns }
    }

    /// Row holding `schema`'s columns, in order, read from `record`.
    pub fn from_record(record: &DailyRecord, schema: &[Feature]) -> Self {
        FeatureRow {
            columns: schema.iter().map(|f| (*f, f.value(record))).collect(),
        }
    }

    pub fn get(&self, feature: Feature) -> Option<f64> {
        self.columns
            .iter()
            .find(|(f, _)| *f == feature)
            .map(|(_, v)| *v)
    }

    /// Overwrite an existing column. Returns false if the row lacks it.
    pub fn set(&mut self, feature: Feature, value: f64) -> bool {
        match self.columns.iter_mut().find(|(f, _)| *f == feature) {
            Some(column) => {
                column.1 = value;
                true
            }
            None => false,
        }
    }

    /// Check the row against a trained schema and return its values in
    /// schema order. Missing columns and any other mismatch (reordered or
    /// extra columns) are rejected; nothing is reordered silently.
    pub fn values_for(&self, schema: &[Feature]) -> Result<Vec<f64>> {
        if let Some(missing) = schema.iter().find(|f| self.get(**f).is_none()) {
            return Err(EngineError::MissingFeature(missing.name().to_string()));
        }
        let matches = self.columns.len() == schema.len()
            && self.columns.iter().zip(schema).all(|((f, _), s)| f == s);
        if !matches {
            return Err(EngineError::FeatureOrder {
                expected: schema.iter().map(|f| f.name().to_string()).collect(),
                found: self.columns.iter().map(|(f, _)| f.name().to_string()).collect(),
            });
        }
        Ok(self.columns.iter().map(|(_, v)| *v).collect())
    }
}
