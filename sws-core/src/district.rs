use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Rainfall regime of a district, which also fixes the ranges its
/// well counts are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RainfallRegime {
    Wet,
    Dry,
}

impl RainfallRegime {
    /// Baseline annual rainfall in mm.
    pub fn base_rainfall_mm(&self) -> f64 {
        match self {
            RainfallRegime::Wet => 600.0,
            RainfallRegime::Dry => 450.0,
        }
    }

    /// Half-open range the extraction borewell count is drawn from.
    pub fn extraction_well_range(&self) -> Range<u32> {
        match self {
            RainfallRegime::Wet => 150..300,
            RainfallRegime::Dry => 300..500,
        }
    }

    /// Half-open range the recharge borewell count is drawn from.
    pub fn recharge_well_range(&self) -> Range<u32> {
        match self {
            RainfallRegime::Wet => 50..100,
            RainfallRegime::Dry => 20..60,
        }
    }
}

/// A district and its fixed climate/infrastructure characteristics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct District {
    pub name: String,
    pub regime: RainfallRegime,
    /// Baseline daily water demand in MLD before seasonal scaling
    pub base_demand_mld: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl District {
    pub fn new(
        name: &str,
        regime: RainfallRegime,
        base_demand_mld: f64,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        District {
            name: name.to_string(),
            regime,
            base_demand_mld,
            latitude,
            longitude,
        }
    }

    /// The eight districts of the Saurashtra region, in catalogue order.
    pub fn saurashtra() -> Vec<District> {
        use RainfallRegime::{Dry, Wet};
        vec![
            District::new("Rajkot", Dry, 200.0, 22.30, 70.80),
            District::new("Jamnagar", Dry, 100.0, 22.47, 70.05),
            District::new("Junagadh", Wet, 100.0, 21.52, 70.45),
            District::new("Amreli", Wet, 100.0, 21.60, 71.22),
            District::new("Bhavnagar", Dry, 200.0, 21.76, 72.15),
            District::new("Porbandar", Dry, 100.0, 21.64, 69.62),
            District::new("Morbi", Dry, 100.0, 22.81, 70.83),
            District::new("Dwarka", Dry, 100.0, 22.24, 68.96),
        ]
    }

    /// Look up a district by name (case-insensitive).
    pub fn find<'a>(districts: &'a [District], name: &str) -> Result<&'a District> {
        districts
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| EngineError::DistrictNotFound(name.to_string()))
    }
}

/// A district together with the well counts assigned to it at
/// generation time. Immutable once the dataset exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictProfile {
    pub district: District,
    pub extraction_wells: u32,
    pub recharge_wells: u32,
}
