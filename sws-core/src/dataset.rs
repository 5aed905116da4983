use crate::district::DistrictProfile;
use crate::error::{EngineError, Result};
use crate::profile::SimulationProfile;
use crate::record::{DailyRecord, RawRecord};
use chrono::NaiveDate;
use serde::Serialize;

/// All records of one district, in strictly increasing date order with
/// no gaps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistrictSeries<R> {
    pub profile: DistrictProfile,
    pub records: Vec<R>,
}

impl<R> DistrictSeries<R> {
    pub fn name(&self) -> &str {
        &self.profile.district.name
    }

    /// The most recent record of the series.
    pub fn latest(&self) -> Result<&R> {
        self.records.last().ok_or(EngineError::EmptyDataset)
    }
}

/// Records for a set of districts over one inclusive calendar range,
/// grouped by district and ordered by date within each group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset<R = DailyRecord> {
    /// Generator configuration the records were simulated with
    pub profile: SimulationProfile,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub series: Vec<DistrictSeries<R>>,
}

/// Generator output, before feature derivation.
pub type RawDataset = Dataset<RawRecord>;

impl<R> Dataset<R> {
    /// Look up a district's series by name (case-insensitive).
    pub fn district(&self, name: &str) -> Result<&DistrictSeries<R>> {
        self.series
            .iter()
            .find(|s| s.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| EngineError::DistrictNotFound(name.to_string()))
    }

    pub fn district_names(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.name()).collect()
    }

    /// Iterate every record, district by district.
    pub fn records(&self) -> impl Iterator<Item = &R> {
        self.series.iter().flat_map(|s| s.records.iter())
    }

    pub fn len(&self) -> usize {
        self.series.iter().map(|s| s.records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Latest record of the named district.
    pub fn latest(&self, name: &str) -> Result<&R> {
        self.district(name)?.latest()
    }
}
