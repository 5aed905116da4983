use crate::features::{Feature, GAP_FEATURES, RISK_FEATURES};
use crate::importance::{accuracy, permutation_importance, FeatureImportance};
use crate::models::{to_matrix, ClassifierModel, GapRegressor, RegressorModel, RiskClassifier};
use crate::split::train_test_split;
use log::info;
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_classifier::RandomForestClassifierParameters;
use smartcore::ensemble::random_forest_regressor::RandomForestRegressorParameters;
use sws_core::{DailyRecord, Dataset, EngineError, Result};

/// Forest size, seeding and hold-out policy shared by both models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    pub n_trees: u16,
    /// Seeds tree construction, the split and permutation importance
    pub seed: u64,
    pub test_fraction: f64,
    pub max_depth: Option<u16>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        TrainingConfig {
            n_trees: 100,
            seed: 42,
            test_fraction: 0.2,
            max_depth: None,
        }
    }
}

/// Held-out evaluation of both models.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelMetrics {
    /// Risk classifier accuracy on the held-out rows
    pub accuracy: f64,
    /// Gap regressor mean absolute error on the same rows, MLD
    pub mean_absolute_error: f64,
    pub train_rows: usize,
    pub test_rows: usize,
}

/// Both trained models, their metrics and the columns each expects.
#[derive(Debug)]
pub struct TrainedModelBundle {
    pub classifier: RiskClassifier,
    pub regressor: GapRegressor,
    pub metrics: ModelMetrics,
    /// Risk drivers, most important first
    pub risk_importance: Vec<FeatureImportance>,
}

impl TrainedModelBundle {
    pub fn classifier_features(&self) -> &[Feature] {
        self.classifier.features()
    }

    pub fn regressor_features(&self) -> &[Feature] {
        self.regressor.features()
    }
}

fn rows_for(records: &[&DailyRecord], schema: &[Feature]) -> Vec<Vec<f64>> {
    records
        .iter()
        .map(|r| schema.iter().map(|f| f.value(r)).collect())
        .collect()
}

fn pick<T: Clone>(values: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|i| values[*i].clone()).collect()
}

/// Fit the risk classifier and the gap regressor over every record of
/// `dataset`, evaluating both on one shared held-out split.
pub fn train_models(dataset: &Dataset, config: &TrainingConfig) -> Result<TrainedModelBundle> {
    let records: Vec<&DailyRecord> = dataset.records().collect();
    if records.len() < 2 {
        return Err(EngineError::EmptyDataset);
    }

    let risk_x = rows_for(&records, &RISK_FEATURES);
    let gap_x = rows_for(&records, &GAP_FEATURES);
    let risk_y: Vec<u32> = records.iter().map(|r| r.risk_label()).collect();
    let gap_y: Vec<f64> = records.iter().map(|r| r.water_gap_mld).collect();

    let split = train_test_split(records.len(), config.test_fraction, config.seed);
    info!(
        "Training on {} rows, holding out {} ({} trees, seed {})",
        split.train.len(),
        split.test.len(),
        config.n_trees,
        config.seed
    );

    let mut clf_params = RandomForestClassifierParameters::default()
        .with_n_trees(config.n_trees.into())
        .with_seed(config.seed);
    let mut reg_params = RandomForestRegressorParameters::default()
        .with_n_trees(config.n_trees.into())
        .with_seed(config.seed);
    if let Some(depth) = config.max_depth {
        clf_params = clf_params.with_max_depth(depth);
        reg_params = reg_params.with_max_depth(depth);
    }

    let train_y_risk = pick(&risk_y, &split.train);
    let clf_model: ClassifierModel =
        ClassifierModel::fit(&to_matrix(&pick(&risk_x, &split.train)), &train_y_risk, clf_params)
            .map_err(|e| EngineError::Model(format!("risk classifier: {:?}", e)))?;
    let classifier = RiskClassifier::new(clf_model, RISK_FEATURES.to_vec());

    let train_y_gap = pick(&gap_y, &split.train);
    let reg_model: RegressorModel =
        RegressorModel::fit(&to_matrix(&pick(&gap_x, &split.train)), &train_y_gap, reg_params)
            .map_err(|e| EngineError::Model(format!("gap regressor: {:?}", e)))?;
    let regressor = GapRegressor::new(reg_model, GAP_FEATURES.to_vec());

    let test_risk_x = pick(&risk_x, &split.test);
    let test_risk_y = pick(&risk_y, &split.test);
    let test_gap_y = pick(&gap_y, &split.test);

    let accuracy = accuracy(&classifier.predict_labels(&test_risk_x)?, &test_risk_y);
    let predicted_gap = regressor.predict_values(&pick(&gap_x, &split.test))?;
    let mean_absolute_error = predicted_gap
        .iter()
        .zip(&test_gap_y)
        .map(|(p, a)| (p - a).abs())
        .sum::<f64>()
        / test_gap_y.len() as f64;

    let risk_importance =
        permutation_importance(&classifier, &test_risk_x, &test_risk_y, config.seed)?;

    info!(
        "Risk classifier accuracy {:.3}, gap regressor MAE {:.2} MLD",
        accuracy, mean_absolute_error
    );

    Ok(TrainedModelBundle {
        classifier,
        regressor,
        metrics: ModelMetrics {
            accuracy,
            mean_absolute_error,
            train_rows: split.train.len(),
            test_rows: split.test.len(),
        },
        risk_importance,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::features::FeatureRow;
    use crate::models::{predict_gap, predict_risk};
    use chrono::NaiveDate;
    use sws_core::{District, SimulationProfile};
    use sws_sim::{generate_dataset, rng::seeded_rng};

    pub(crate) fn small_dataset() -> Dataset {
        let districts = District::saurashtra();
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2023, 9, 30).unwrap();
        let mut rng = seeded_rng(Some(42));
        sws_data::derive_features(generate_dataset(
            &districts[..3],
            start,
            end,
            &SimulationProfile::dashboard(),
            &mut rng,
        ))
    }

    pub(crate) fn small_config() -> TrainingConfig {
        TrainingConfig {
            n_trees: 10,
            ..TrainingConfig::default()
        }
    }

    #[test]
    fn test_train_reports_metrics() {
        let data = small_dataset();
        let bundle = train_models(&data, &small_config()).unwrap();
        let m = &bundle.metrics;
        assert_eq!(m.train_rows + m.test_rows, data.len());
        assert_eq!(m.test_rows, (data.len() as f64 * 0.2).ceil() as usize);
        assert!((0.0..=1.0).contains(&m.accuracy));
        assert!(m.mean_absolute_error.is_finite() && m.mean_absolute_error >= 0.0);
        assert_eq!(bundle.classifier_features(), &RISK_FEATURES[..]);
        assert_eq!(bundle.regressor_features(), &GAP_FEATURES[..]);
        assert_eq!(bundle.risk_importance.len(), RISK_FEATURES.len());
    }

    #[test]
    fn test_training_reproducible() {
        let data = small_dataset();
        let a = train_models(&data, &small_config()).unwrap();
        let b = train_models(&data, &small_config()).unwrap();
        assert_eq!(a.metrics, b.metrics);
        assert_eq!(a.risk_importance, b.risk_importance);
    }

    #[test]
    fn test_predictions_from_latest_record() {
        let data = small_dataset();
        let bundle = train_models(&data, &small_config()).unwrap();
        let latest = data.latest("Rajkot").unwrap();

        let risk_row = FeatureRow::from_record(latest, bundle.classifier_features());
        let risk = predict_risk(&bundle.classifier, &risk_row).unwrap();
        assert!(risk.label() <= 2);

        let gap_rows = vec![FeatureRow::from_record(latest, bundle.regressor_features()); 3];
        let gaps = predict_gap(&bundle.regressor, &gap_rows).unwrap();
        assert_eq!(gaps.len(), 3);
        assert!(gaps.iter().all(|g| g.is_finite()));
        assert!(predict_gap(&bundle.regressor, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_prediction_rejects_wrong_schema() {
        let data = small_dataset();
        let bundle = train_models(&data, &small_config()).unwrap();
        let latest = data.latest("Rajkot").unwrap();

        // a gap row sent to the classifier lacks reservoir and depth
        let gap_row = FeatureRow::from_record(latest, &GAP_FEATURES);
        assert!(matches!(
            predict_risk(&bundle.classifier, &gap_row),
            Err(EngineError::MissingFeature(_))
        ));

        let mut reversed = GAP_FEATURES;
        reversed.reverse();
        let reversed_row = FeatureRow::from_record(latest, &reversed);
        assert!(matches!(
            predict_gap(&bundle.regressor, &[reversed_row]),
            Err(EngineError::FeatureOrder { .. })
        ));
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let mut data = small_dataset();
        for series in &mut data.series {
            series.records.clear();
        }
        assert!(matches!(
            train_models(&data, &small_config()),
            Err(EngineError::EmptyDataset)
        ));
    }
}
