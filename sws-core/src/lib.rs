//! Core types shared by every SWS crate: districts, daily records,
//! datasets, the ordinal risk scale and the engine error type.

pub mod category;
pub mod dataset;
pub mod date_range;
pub mod district;
pub mod error;
pub mod profile;
pub mod record;

pub use category::{GroundwaterStatus, RiskCategory};
pub use dataset::{Dataset, DistrictSeries, RawDataset};
pub use district::{District, DistrictProfile, RainfallRegime};
pub use error::{EngineError, Result};
pub use profile::{RechargeSource, ReservoirModel, SimulationProfile};
pub use record::{DailyRecord, RawRecord};
