//! Random-forest wrappers that remember the exact columns they were
//! trained on and validate every prediction request against them.

use crate::features::{Feature, FeatureRow};
use smartcore::ensemble::random_forest_classifier::RandomForestClassifier;
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fmt;
use sws_core::{EngineError, Result, RiskCategory};

pub(crate) type ClassifierModel = RandomForestClassifier<f64, u32, DenseMatrix<f64>, Vec<u32>>;
pub(crate) type RegressorModel = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// Row-major matrix from equally sized rows.
pub(crate) fn to_matrix(rows: &[Vec<f64>]) -> DenseMatrix<f64> {
    let n_rows = rows.len();
    let n_cols = rows.first().map_or(0, |r| r.len());
    let flat: Vec<f64> = rows.iter().flat_map(|r| r.iter().copied()).collect();
    DenseMatrix::new(n_rows, n_cols, flat, false)
}

/// Drought risk classifier over [`crate::RISK_FEATURES`].
pub struct RiskClassifier {
    model: ClassifierModel,
    features: Vec<Feature>,
}

impl RiskClassifier {
    pub(crate) fn new(model: ClassifierModel, features: Vec<Feature>) -> Self {
        RiskClassifier { model, features }
    }

    /// Columns the classifier was trained on, in order.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Raw ordinal labels for pre-validated rows.
    pub(crate) fn predict_labels(&self, rows: &[Vec<f64>]) -> Result<Vec<u32>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        self.model
            .predict(&to_matrix(rows))
            .map_err(|e| EngineError::Model(format!("{:?}", e)))
    }

    pub fn predict(&self, row: &FeatureRow) -> Result<RiskCategory> {
        let values = row.values_for(&self.features)?;
        let labels = self.predict_labels(&[values])?;
        labels
            .first()
            .and_then(|label| RiskCategory::from_label(*label))
            .ok_or_else(|| EngineError::Model(format!("unexpected risk labels {:?}", labels)))
    }
}

impl fmt::Debug for RiskClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RiskClassifier")
            .field("features", &self.features)
            .finish_non_exhaustive()
    }
}

/// Water gap regressor over [`crate::GAP_FEATURES`].
pub struct GapRegressor {
    model: RegressorModel,
    features: Vec<Feature>,
}

impl GapRegressor {
    pub(crate) fn new(model: RegressorModel, features: Vec<Feature>) -> Self {
        GapRegressor { model, features }
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub(crate) fn predict_values(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        self.model
            .predict(&to_matrix(rows))
            .map_err(|e| EngineError::Model(format!("{:?}", e)))
    }

    /// Predicted gap in MLD for each row, scored in one batch.
    pub fn predict(&self, rows: &[FeatureRow]) -> Result<Vec<f64>> {
        let values = rows
            .iter()
            .map(|row| row.values_for(&self.features))
            .collect::<Result<Vec<_>>>()?;
        self.predict_values(&values)
    }
}

impl fmt::Debug for GapRegressor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GapRegressor")
            .field("features", &self.features)
            .finish_non_exhaustive()
    }
}

/// Predict the risk category for one row in the classifier's column order.
pub fn predict_risk(classifier: &RiskClassifier, row: &FeatureRow) -> Result<RiskCategory> {
    classifier.predict(row)
}

/// Predict the water gap for each row in the regressor's column order.
pub fn predict_gap(regressor: &GapRegressor, rows: &[FeatureRow]) -> Result<Vec<f64>> {
    regressor.predict(rows)
}
