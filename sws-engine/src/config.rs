use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use sws_core::District;
use sws_model::TrainingConfig;
use sws_sim::rng::DEFAULT_SEED;
use sws_utils::dates::calendar_date;

/// Everything the engine needs to build its dataset and models.
///
/// Every field has a default, so a JSON file only has to name the
/// values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub districts: Vec<District>,
    /// Generator seed; `null` draws a fresh one from OS entropy
    pub seed: Option<u64>,
    pub training: TrainingConfig,
    pub forecast_horizon_days: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            start_date: calendar_date(2020, 1, 1),
            end_date: calendar_date(2025, 12, 31),
            districts: District::saurashtra(),
            seed: Some(DEFAULT_SEED),
            training: TrainingConfig::default(),
            forecast_horizon_days: 30,
        }
    }
}

impl EngineConfig {
    /// Read a JSON config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.start_date.to_string(), "2020-01-01");
        assert_eq!(config.end_date.to_string(), "2025-12-31");
        assert_eq!(config.districts.len(), 8);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.training.n_trees, 100);
        assert_eq!(config.forecast_horizon_days, 30);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EngineConfig::from_json(
            r#"{"start_date": "2023-01-01", "training": {"n_trees": 20}}"#,
        )
        .unwrap();
        assert_eq!(config.start_date, calendar_date(2023, 1, 1));
        assert_eq!(config.end_date, calendar_date(2025, 12, 31));
        assert_eq!(config.training.n_trees, 20);
        assert_eq!(config.training.seed, 42);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_null_seed_means_unseeded() {
        let config = EngineConfig::from_json(r#"{"seed": null}"#).unwrap();
        assert_eq!(config.seed, None);
        assert!(EngineConfig::from_json("{not json").is_err());
    }
}
