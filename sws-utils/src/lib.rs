//! Shared utility functions for SWS crates.

/// Date utility functions
pub mod dates {
    use chrono::{Datelike, NaiveDate};

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Date from its parts. Impossible combinations fall back to the
    /// Unix epoch rather than failing.
    pub fn calendar_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
    }

    /// Day of the calendar year, 1-based (Jan 1 = 1, Dec 31 = 365 or 366).
    pub fn day_of_year(date: &NaiveDate) -> u32 {
        date.ordinal()
    }

    /// Fraction of the seasonal cycle elapsed on `date`.
    ///
    /// Day 365 wraps to 0 and day 366 (leap years) to 1/365, so the
    /// value always lies in [0, 1).
    pub fn cycle_fraction(date: &NaiveDate) -> f64 {
        f64::from(day_of_year(date) % 365) / 365.0
    }

    /// Number of days from `start` through `end`, both inclusive.
    /// Returns 0 when `end` precedes `start`.
    pub fn days_inclusive(start: &NaiveDate, end: &NaiveDate) -> usize {
        let days = (*end - *start).num_days();
        if days < 0 {
            0
        } else {
            (days + 1) as usize
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_format_date() {
            assert_eq!(format_date(&calendar_date(2023, 6, 15)), "2023-06-15");
            assert_eq!(format_date(&calendar_date(2024, 2, 29)), "2024-02-29");
        }

        #[test]
        fn test_calendar_date() {
            assert_eq!(
                calendar_date(2024, 2, 29),
                NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
            );
            assert_eq!(calendar_date(2023, 2, 29), NaiveDate::default());
        }

        #[test]
        fn test_cycle_fraction_wraps() {
            let dec31 = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
            assert_eq!(cycle_fraction(&dec31), 0.0);

            let leap_dec31 = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
            assert_eq!(day_of_year(&leap_dec31), 366);
            assert!((cycle_fraction(&leap_dec31) - 1.0 / 365.0).abs() < 1e-12);

            let jan1 = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
            assert!((cycle_fraction(&jan1) - 1.0 / 365.0).abs() < 1e-12);
        }

        #[test]
        fn test_days_inclusive() {
            let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
            let end = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
            // 2020 and 2024 are leap years
            assert_eq!(days_inclusive(&start, &end), 365 * 6 + 2);
            assert_eq!(days_inclusive(&start, &start), 1);
            assert_eq!(days_inclusive(&end, &start), 0);
        }
    }
}

/// Calendar season gates used by the climate generator.
///
/// The monsoon window drives the rainfall and reservoir regimes; summer
/// and winter drive temperature and demand. They overlap freely.
pub mod seasons {
    /// Monsoon months, June through September.
    pub fn is_monsoon(month: u32) -> bool {
        (6..=9).contains(&month)
    }

    /// Summer months, March through May.
    pub fn is_summer(month: u32) -> bool {
        (3..=5).contains(&month)
    }

    /// Winter months, November through January.
    pub fn is_winter(month: u32) -> bool {
        matches!(month, 11 | 12 | 1)
    }

}
