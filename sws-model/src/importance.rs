//! Permutation importance of the risk classifier's inputs.

use crate::features::Feature;
use crate::models::RiskClassifier;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use sws_core::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureImportance {
    pub feature: Feature,
    /// Drop in held-out accuracy when the column is shuffled
    pub importance: f64,
}

pub(crate) fn accuracy(predicted: &[u32], actual: &[u32]) -> f64 {
    if actual.is_empty() {
        return 0.0;
    }
    let hits = predicted.iter().zip(actual).filter(|(p, a)| p == a).count();
    hits as f64 / actual.len() as f64
}

/// Shuffle one column at a time across `rows` and measure how much the
/// classifier's accuracy on `labels` falls. Sorted most important first.
pub fn permutation_importance(
    classifier: &RiskClassifier,
    rows: &[Vec<f64>],
    labels: &[u32],
    seed: u64,
) -> Result<Vec<FeatureImportance>> {
    let baseline = accuracy(&classifier.predict_labels(rows)?, labels);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut importances = Vec::with_capacity(classifier.features().len());
    for (column, feature) in classifier.features().iter().enumerate() {
        let mut shuffled: Vec<f64> = rows.iter().map(|r| r[column]).collect();
        shuffled.shuffle(&mut rng);
        let permuted: Vec<Vec<f64>> = rows
            .iter()
            .zip(&shuffled)
            .map(|(row, value)| {
                let mut row = row.clone();
                row[column] = *value;
                row
            })
            .collect();
        let score = accuracy(&classifier.predict_labels(&permuted)?, labels);
        importances.push(FeatureImportance {
            feature: *feature,
            importance: baseline - score,
        });
    }

    importances.sort_by(|a, b| b.importance.total_cmp(&a.importance));
    Ok(importances)
}
