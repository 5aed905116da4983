//! Shared dataset and model service for the SWS tools.
//!
//! [`WaterSecurityEngine`] owns the one simulated dataset and the one
//! trained model bundle of a process. Both are built lazily on first use,
//! exactly once, even when several threads ask at the same time; every
//! caller then sees the same instance. Forecasts are computed fresh per
//! request from the cached regressor.
//!
//! # Usage
//!
//! ```rust,no_run
//! use sws_engine::{EngineConfig, WaterSecurityEngine};
//!
//! let engine = WaterSecurityEngine::new(EngineConfig::default());
//! let summary = engine.summary("Rajkot").unwrap();
//! let forecast = engine.forecast("Rajkot", None).unwrap();
//! println!("{:?} / {}", summary.predicted_risk, forecast.recommendation());
//! ```

pub mod config;
pub mod export;
pub mod reports;

pub use config::EngineConfig;
pub use reports::{BalanceComponent, DistrictSummary, RegionalRiskEntry, WaterBalance};

use log::info;
use rand_chacha::ChaCha8Rng;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};
use sws_core::{DailyRecord, Dataset, EngineError, Result, RiskCategory, SimulationProfile};
use sws_data::rules::drought::{drought_risk_reason, DroughtInputs};
use sws_model::{
    forecast_gap, predict_risk, train_models, FeatureRow, ForecastResult, TrainedModelBundle,
};
use sws_sim::{generate_dataset, rng::seeded_rng};

/// Forecast draws use their own ChaCha stream so they never replay the
/// generator's sequence.
const FORECAST_STREAM: u64 = 1;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Compute-once owner of the dashboard dataset and its models.
pub struct WaterSecurityEngine {
    config: EngineConfig,
    dataset: OnceLock<Dataset>,
    models: Mutex<Option<Arc<TrainedModelBundle>>>,
    forecast_rng: Mutex<ChaCha8Rng>,
}

impl WaterSecurityEngine {
    pub fn new(config: EngineConfig) -> Self {
        let mut forecast_rng = seeded_rng(config.seed);
        forecast_rng.set_stream(FORECAST_STREAM);
        WaterSecurityEngine {
            config,
            dataset: OnceLock::new(),
            models: Mutex::new(None),
            forecast_rng: Mutex::new(forecast_rng),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn simulate(&self, profile: SimulationProfile) -> Dataset {
        let mut rng = seeded_rng(self.config.seed);
        let raw = generate_dataset(
            &self.config.districts,
            self.config.start_date,
            self.config.end_date,
            &profile,
            &mut rng,
        );
        sws_data::derive_features(raw)
    }

    /// The dashboard-profile dataset, generated and derived on first call.
    pub fn dataset(&self) -> &Dataset {
        self.dataset.get_or_init(|| {
            info!("Building dataset");
            self.simulate(SimulationProfile::dashboard())
        })
    }

    /// The export-profile dataset. Not cached; the export runs once.
    pub fn export_dataset(&self) -> Dataset {
        self.simulate(SimulationProfile::export())
    }

    /// The trained bundle, training it on first call.
    ///
    /// The lock is held for the whole fit, so concurrent first callers
    /// wait for the single training run and share its result.
    pub fn models(&self) -> Result<Arc<TrainedModelBundle>> {
        let mut slot = lock(&self.models);
        if let Some(bundle) = slot.as_ref() {
            return Ok(Arc::clone(bundle));
        }
        let bundle = Arc::new(train_models(self.dataset(), &self.config.training)?);
        *slot = Some(Arc::clone(&bundle));
        Ok(bundle)
    }

    /// The trained bundle if training already finished, without starting it.
    pub fn trained_models(&self) -> Result<Arc<TrainedModelBundle>> {
        lock(&self.models)
            .as_ref()
            .map(Arc::clone)
            .ok_or(EngineError::ModelUnavailable)
    }

    pub fn latest_record(&self, district: &str) -> Result<&DailyRecord> {
        self.dataset().latest(district)
    }

    /// Classifier verdict for a district's latest record.
    pub fn predict_risk(&self, district: &str) -> Result<RiskCategory> {
        let latest = self.latest_record(district)?;
        let models = self.models()?;
        let row = FeatureRow::from_record(latest, models.classifier_features());
        predict_risk(&models.classifier, &row)
    }

    /// Gap forecast from a district's latest record. `None` uses the
    /// configured horizon.
    pub fn forecast(&self, district: &str, horizon_days: Option<usize>) -> Result<ForecastResult> {
        let latest = self.latest_record(district)?;
        let models = self.models()?;
        let horizon = horizon_days.unwrap_or(self.config.forecast_horizon_days);
        let mut rng = lock(&self.forecast_rng);
        forecast_gap(&models.regressor, latest, horizon, &mut *rng)
    }

    pub fn summary(&self, district: &str) -> Result<DistrictSummary> {
        let latest = self.latest_record(district)?;
        let predicted_risk = self.predict_risk(district)?;
        let models = self.models()?;
        Ok(DistrictSummary {
            district: latest.district().to_string(),
            latest: latest.clone(),
            predicted_risk,
            rule_risk: latest.risk,
            risk_reason: drought_risk_reason(&DroughtInputs::from(latest)),
            groundwater_status: latest.groundwater_status,
            groundwater_explanation: latest.groundwater_explanation.clone(),
            metrics: models.metrics.clone(),
        })
    }

    /// Latest rule-based risk of every configured district.
    pub fn regional_overview(&self) -> Result<Vec<RegionalRiskEntry>> {
        let dataset = self.dataset();
        dataset
            .series
            .iter()
            .map(|series| {
                let latest = series.latest()?;
                let district = &series.profile.district;
                Ok(RegionalRiskEntry {
                    district: district.name.clone(),
                    date: latest.date(),
                    latitude: district.latitude,
                    longitude: district.longitude,
                    normal_rainfall_mm: district.regime.base_rainfall_mm(),
                    risk: latest.risk,
                    risk_score: latest.risk_label(),
                    water_demand_mld: latest.raw.demand_mld,
                    groundwater_status: latest.groundwater_status,
                })
            })
            .collect()
    }

    pub fn water_balance(&self, district: &str) -> Result<WaterBalance> {
        Ok(WaterBalance::from_record(self.latest_record(district)?))
    }
}
