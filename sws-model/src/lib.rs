//! Supervised models over the derived dataset.
//!
//! Two random forests are trained once over every district's records:
//! a classifier for the ordinal drought risk and a regressor for the
//! water gap. Both share one seeded 80/20 split so accuracy and mean
//! absolute error are measured on the same held-out rows. The regressor
//! also drives the short-horizon gap forecast.

pub mod features;
pub mod forecast;
pub mod importance;
pub mod models;
pub mod split;
pub mod train;

pub use features::{Feature, FeatureRow, GAP_FEATURES, RISK_FEATURES};
pub use forecast::{forecast_gap, forecast_rows, ForecastPoint, ForecastResult, Recommendation, MAX_HORIZON_DAYS};
pub use models::{predict_gap, predict_risk, GapRegressor, RiskClassifier};
pub use importance::FeatureImportance;
pub use train::{train_models, ModelMetrics, TrainedModelBundle, TrainingConfig};
