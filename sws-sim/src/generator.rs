use crate::weather;
use chrono::NaiveDate;
use log::{debug, info};
use rand::Rng;
use sws_core::date_range::DateRange;
use sws_core::{
    District, DistrictProfile, DistrictSeries, RawDataset, RawRecord, SimulationProfile,
};

/// Simulate every district over `start..=end`.
///
/// Districts are processed in the given order; each one first draws its
/// well counts from its rainfall regime, then one record per day. The
/// result is grouped by district and ordered by date. An inverted range
/// yields empty series rather than an error.
pub fn generate_dataset<R: Rng + ?Sized>(
    districts: &[District],
    start: NaiveDate,
    end: NaiveDate,
    profile: &SimulationProfile,
    rng: &mut R,
) -> RawDataset {
    let days = DateRange(start, end).len_days();
    info!(
        "Simulating {} districts from {} to {} ({} days, {} profile)",
        districts.len(),
        start,
        end,
        days,
        profile.name
    );

    let series = districts
        .iter()
        .map(|district| simulate_district(district, start, end, profile, rng))
        .collect::<Vec<_>>();

    RawDataset {
        profile: profile.clone(),
        start,
        end,
        series,
    }
}

fn simulate_district<R: Rng + ?Sized>(
    district: &District,
    start: NaiveDate,
    end: NaiveDate,
    profile: &SimulationProfile,
    rng: &mut R,
) -> DistrictSeries<RawRecord> {
    let extraction_wells = rng.gen_range(district.regime.extraction_well_range());
    let recharge_wells = rng.gen_range(district.regime.recharge_well_range());
    debug!(
        "{}: {} extraction wells, {} recharge wells",
        district.name, extraction_wells, recharge_wells
    );

    let records = DateRange(start, end)
        .map(|date| RawRecord {
            date,
            district: district.name.clone(),
            rainfall_mm: weather::rainfall(rng, &date),
            temperature_c: weather::temperature(rng, &date),
            groundwater_mbgl: weather::groundwater(rng, &date),
            reservoir_pct: weather::reservoir(rng, &date, profile.reservoir),
            demand_mld: weather::demand(rng, &date, district.base_demand_mld),
            extraction_wells,
            recharge_wells,
        })
        .collect();

    DistrictSeries {
        profile: DistrictProfile {
            district: district.clone(),
            extraction_wells,
            recharge_wells,
        },
        records,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded_rng;
    use crate::weather::MIN_GROUNDWATER_MBGL;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_row_count_spans_leap_years() {
        let districts = District::saurashtra();
        let mut rng = seeded_rng(Some(42));
        let start = date(2020, 1, 1);
        let end = date(2025, 12, 31);
        let data = generate_dataset(&districts, start, end, &SimulationProfile::dashboard(), &mut rng);
        assert_eq!(data.series.len(), 8);
        for series in &data.series {
            assert_eq!(series.records.len(), 2192);
            assert_eq!(series.records.first().unwrap().date, start);
            assert_eq!(series.records.last().unwrap().date, end);
            // contiguous and strictly increasing
            for pair in series.records.windows(2) {
                assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
            }
        }
    }

    #[test]
    fn test_physical_bounds() {
        let districts = District::saurashtra();
        for profile in [SimulationProfile::dashboard(), SimulationProfile::export()] {
            let mut rng = seeded_rng(Some(1));
            let data = generate_dataset(&districts, date(2023, 1, 1), date(2024, 12, 31), &profile, &mut rng);
            for record in data.records() {
                assert!((0.0..=100.0).contains(&record.reservoir_pct));
                assert!(record.groundwater_mbgl >= MIN_GROUNDWATER_MBGL);
                assert!(record.rainfall_mm >= 0.0);
            }
        }
    }

    #[test]
    fn test_well_counts_fixed_per_district() {
        let districts = District::saurashtra();
        let mut rng = seeded_rng(Some(2));
        let data = generate_dataset(&districts, date(2022, 1, 1), date(2022, 3, 31), &SimulationProfile::dashboard(), &mut rng);
        for series in &data.series {
            let regime = series.profile.district.regime;
            assert!(regime.extraction_well_range().contains(&series.profile.extraction_wells));
            assert!(regime.recharge_well_range().contains(&series.profile.recharge_wells));
            assert!(series.records.iter().all(|r| {
                r.extraction_wells == series.profile.extraction_wells
                    && r.recharge_wells == series.profile.recharge_wells
            }));
        }
    }

    #[test]
    fn test_seeded_generation_reproducible() {
        let districts = District::saurashtra();
        let profile = SimulationProfile::dashboard();
        let a = generate_dataset(&districts, date(2022, 1, 1), date(2022, 6, 30), &profile, &mut seeded_rng(Some(5)));
        let b = generate_dataset(&districts, date(2022, 1, 1), date(2022, 6, 30), &profile, &mut seeded_rng(Some(5)));
        assert_eq!(a, b);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let districts = District::saurashtra();
        let mut rng = seeded_rng(Some(5));
        let data = generate_dataset(&districts, date(2022, 2, 1), date(2022, 1, 1), &SimulationProfile::dashboard(), &mut rng);
        assert!(data.is_empty());
        assert_eq!(data.series.len(), 8);
    }
}
