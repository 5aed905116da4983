use chrono::NaiveDate;
use std::mem::replace;

/// A date range iterator that yields each date from the start date
/// through the end date (inclusive).
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct DateRange(pub NaiveDate, pub NaiveDate);

impl DateRange {
    /// Number of days the range will yield.
    pub fn len_days(&self) -> usize {
        sws_utils::dates::days_inclusive(&self.0, &self.1)
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 > self.1 {
            return None;
        }
        match self.0.succ_opt() {
            Some(next) => Some(replace(&mut self.0, next)),
            None => {
                // exhausted at the calendar maximum
                let last = self.0;
                *self = DateRange(NaiveDate::MAX, NaiveDate::MIN);
                Some(last)
            }
        }
    }
}
