//! Data processing for simulated district records.
//!
//! This crate turns the generator's raw daily series into the full
//! feature set (rolling means, lags, groundwater balance, supply and
//! gap) and applies the rule waterfalls that label each record with a
//! groundwater stress status and a drought risk category.

pub mod features;
pub mod rules;
pub mod series;

pub use features::derive_features;
pub use rules::drought::classify_drought_risk;
pub use rules::stress::classify_groundwater_stress;
