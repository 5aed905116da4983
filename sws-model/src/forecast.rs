//! Short-horizon water gap projection.
//!
//! Persistence forecast: the latest record's regressor row is held fixed
//! for every future day except rainfall, which is redrawn per day from
//! the dry-season wet-day distribution. Predicted gaps are never fed
//! back as lagged inputs.

use crate::features::{Feature, FeatureRow};
use crate::models::GapRegressor;
use chrono::{Days, NaiveDate};
use log::debug;
use rand::Rng;
use serde::Serialize;
use std::fmt;
use sws_core::{DailyRecord, EngineError, Result};
use sws_sim::weather::DRY_SEASON_RAIN;

/// Longest horizon a single forecast may request.
pub const MAX_HORIZON_DAYS: usize = 365;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub predicted_gap_mld: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Recommendation {
    /// Mean projected gap is a deficit
    Conserve,
    Stable,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Conserve => "Initiate water conservation measures.",
            Recommendation::Stable => "Water levels expected to remain stable.",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Projected gaps for one district, one point per consecutive day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResult {
    pub district: String,
    pub points: Vec<ForecastPoint>,
}

impl ForecastResult {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn mean_gap(&self) -> f64 {
        if self.points.is_empty() {
            return 0.0;
        }
        self.points.iter().map(|p| p.predicted_gap_mld).sum::<f64>() / self.points.len() as f64
    }

    pub fn recommendation(&self) -> Recommendation {
        if self.mean_gap() < 0.0 {
            Recommendation::Conserve
        } else {
            Recommendation::Stable
        }
    }
}

/// `horizon_days` copies of `last`'s row over `schema`, each with its own
/// rainfall draw. Fails if `schema` has no rainfall column to vary.
pub fn forecast_rows<R: Rng + ?Sized>(
    last: &DailyRecord,
    schema: &[Feature],
    horizon_days: usize,
    rng: &mut R,
) -> Result<Vec<FeatureRow>> {
    let template = FeatureRow::from_record(last, schema);
    (0..horizon_days)
        .map(|_| {
            let mut row = template.clone();
            if row.set(Feature::Rainfall, DRY_SEASON_RAIN.sample_wet(rng)) {
                Ok(row)
            } else {
                Err(EngineError::MissingFeature(Feature::Rainfall.name().to_string()))
            }
        })
        .collect()
}

/// Project `horizon_days` gap values starting the day after `last`.
pub fn forecast_gap<R: Rng + ?Sized>(
    regressor: &GapRegressor,
    last: &DailyRecord,
    horizon_days: usize,
    rng: &mut R,
) -> Result<ForecastResult> {
    if horizon_days == 0 || horizon_days > MAX_HORIZON_DAYS {
        return Err(EngineError::InvalidHorizon {
            requested: horizon_days,
            max: MAX_HORIZON_DAYS,
        });
    }

    let rows = forecast_rows(last, regressor.features(), horizon_days, rng)?;
    let predictions = regressor.predict(&rows)?;

    let points = predictions
        .into_iter()
        .enumerate()
        .map(|(i, predicted_gap_mld)| {
            let date = last
                .date()
                .checked_add_days(Days::new(i as u64 + 1))
                .ok_or_else(|| EngineError::InvalidHorizon {
                    requested: horizon_days,
                    max: MAX_HORIZON_DAYS,
                })?;
            Ok(ForecastPoint {
                date,
                predicted_gap_mld,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "Forecast {} days for {} from {}",
        horizon_days,
        last.district(),
        last.date()
    );
    Ok(ForecastResult {
        district: last.district().to_string(),
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::GAP_FEATURES;
    use crate::train::tests::{small_config, small_dataset};
    use crate::train::train_models;
    use sws_sim::rng::seeded_rng;

    #[test]
    fn test_thirty_day_forecast() {
        let data = small_dataset();
        let bundle = train_models(&data, &small_config()).unwrap();
        let last = data.latest("Jamnagar").unwrap();
        let mut rng = seeded_rng(Some(7));

        let result = forecast_gap(&bundle.regressor, last, 30, &mut rng).unwrap();
        assert_eq!(result.len(), 30);
        assert_eq!(result.district, "Jamnagar");
        assert!(result.points.iter().all(|p| p.predicted_gap_mld.is_finite()));
        assert_eq!(result.points[0].date, last.date().succ_opt().unwrap());
        for pair in result.points.windows(2) {
            assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
        }
    }

    #[test]
    fn test_horizon_bounds() {
        let data = small_dataset();
        let bundle = train_models(&data, &small_config()).unwrap();
        let last = data.latest("Rajkot").unwrap();
        let mut rng = seeded_rng(Some(7));

        for bad in [0, MAX_HORIZON_DAYS + 1] {
            assert!(matches!(
                forecast_gap(&bundle.regressor, last, bad, &mut rng),
                Err(EngineError::InvalidHorizon { .. })
            ));
        }
        let one = forecast_gap(&bundle.regressor, last, 1, &mut rng).unwrap();
        assert_eq!(one.len(), 1);
    }

    #[test]
    fn test_only_rainfall_varies_across_rows() {
        let data = small_dataset();
        let last = data.latest("Rajkot").unwrap();
        let template = FeatureRow::from_record(last, &GAP_FEATURES);
        let mut rng = seeded_rng(Some(11));

        let rows = forecast_rows(last, &GAP_FEATURES, 30, &mut rng).unwrap();
        assert_eq!(rows.len(), 30);
        for row in &rows {
            for feature in GAP_FEATURES.iter().filter(|f| **f != Feature::Rainfall) {
                assert_eq!(row.get(*feature), template.get(*feature));
            }
            assert!(row.get(Feature::Rainfall).unwrap() >= 0.0);
        }
        let first_rain = rows[0].get(Feature::Rainfall);
        assert!(rows.iter().any(|r| r.get(Feature::Rainfall) != first_rain));
    }

    #[test]
    fn test_rows_need_rainfall_column() {
        let data = small_dataset();
        let last = data.latest("Rajkot").unwrap();
        let mut rng = seeded_rng(Some(11));
        let schema = [Feature::Temperature, Feature::Month];
        assert!(matches!(
            forecast_rows(last, &schema, 5, &mut rng),
            Err(EngineError::MissingFeature(name)) if name == "Rainfall_mm"
        ));
    }

    #[test]
    fn test_recommendation_follows_mean_gap() {
        let day = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let result = |gaps: &[f64]| ForecastResult {
            district: "Rajkot".to_string(),
            points: gaps
                .iter()
                .map(|g| ForecastPoint {
                    date: day,
                    predicted_gap_mld: *g,
                })
                .collect(),
        };
        assert_eq!(result(&[-5.0, 2.0]).recommendation(), Recommendation::Conserve);
        assert_eq!(result(&[5.0, -2.0]).recommendation(), Recommendation::Stable);
        assert_eq!(result(&[]).recommendation(), Recommendation::Stable);
    }
}
