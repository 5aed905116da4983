/// Error types for the SWS engine
use thiserror::Error;

/// Main error type for dataset, model and forecast operations
#[derive(Error, Debug)]
pub enum EngineError {
    /// District identifier not present in the dataset or catalogue
    #[error("District not found: {0}")]
    DistrictNotFound(String),

    /// Dataset (or a district series) holds no records
    #[error("Dataset is empty")]
    EmptyDataset,

    /// Inference requested without a trained model
    #[error("Model unavailable: training has not completed")]
    ModelUnavailable,

    /// Feature row lacks a column the model was trained on
    #[error("Missing feature column: {0}")]
    MissingFeature(String),

    /// Feature row columns do not match the trained order
    #[error("Feature order mismatch (expected: {expected:?}, found: {found:?})")]
    FeatureOrder {
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// Forecast horizon outside the supported range
    #[error("Invalid forecast horizon {requested} (allowed: 1..={max})")]
    InvalidHorizon { requested: usize, max: usize },

    /// The learning backend rejected a fit or predict call
    #[error("Model backend failure: {0}")]
    Model(String),

    /// Failed to write CSV data
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying I/O failure
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using EngineError
pub type Result<T> = std::result::Result<T, EngineError>;
