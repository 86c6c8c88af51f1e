//! Holiday calendar port and the in-process implementations

use std::collections::HashSet;

use chrono::NaiveDate;

/// Answers whether a date is a toll-free holiday.
///
/// Weekends are handled by the engine, not by the calendar.
pub trait HolidayCalendar: Send + Sync {
    fn is_date_holiday(&self, date: NaiveDate) -> bool;
}

/// Calendar with no holidays at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn is_date_holiday(&self, _date: NaiveDate) -> bool {
        false
    }
}

/// Calendar backed by an explicit list of dates.
#[derive(Debug, Clone, Default)]
pub struct FixedHolidayCalendar {
    dates: HashSet<NaiveDate>,
}

impl FixedHolidayCalendar {
    pub fn new(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl HolidayCalendar for FixedHolidayCalendar {
    fn is_date_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn no_holidays_is_always_false() {
        assert!(!NoHolidays.is_date_holiday(date(2024, 12, 25)));
    }

    #[test]
    fn fixed_calendar_matches_listed_dates_only() {
        let calendar = FixedHolidayCalendar::new([date(2024, 12, 25), date(2024, 12, 26)]);
        assert_eq!(calendar.len(), 2);
        assert!(calendar.is_date_holiday(date(2024, 12, 25)));
        assert!(!calendar.is_date_holiday(date(2024, 12, 27)));
    }
}
