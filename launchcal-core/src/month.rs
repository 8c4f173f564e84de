//! Calendar month arithmetic.

use std::fmt;

use chrono::{Datelike, Local, Months, NaiveDate, Weekday};

use crate::error::{LaunchCalError, LaunchCalResult};

/// Years the calendar is willing to display.
pub const MIN_YEAR: i32 = 1000;
pub const MAX_YEAR: i32 = 9999;

/// Column headers, Sunday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// A calendar month. `month()` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    /// A displayable month: year in `[MIN_YEAR, MAX_YEAR]`, month in 1..=12.
    pub fn new(year: i32, month: u32) -> LaunchCalResult<Self> {
        Self::from_ymd(year, month)
            .filter(|ym| ym.is_displayable())
            .ok_or(LaunchCalError::InvalidMonth { year, month })
    }

    /// Any month chrono can represent, without the display range check.
    pub fn from_ymd(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| YearMonth { first })
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        YearMonth {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    /// The month of the local clock.
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn is_displayable(&self) -> bool {
        (MIN_YEAR..=MAX_YEAR).contains(&self.year())
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// The day before the 1st of the next month.
    pub fn last_day(&self) -> NaiveDate {
        self.first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(self.first)
    }

    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// Every day of the month, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.first.iter_days().take(self.days_in_month() as usize)
    }

    /// Column of the 1st: Sunday = 0 ... Saturday = 6.
    pub fn first_weekday_index(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    pub fn first_weekday(&self) -> Weekday {
        self.first.weekday()
    }

    /// Shift by whole months. `None` if the result leaves chrono's range.
    pub fn offset(&self, months: i32) -> Option<Self> {
        let shift = Months::new(months.unsigned_abs());
        let first = if months >= 0 {
            self.first.checked_add_months(shift)
        } else {
            self.first.checked_sub_months(shift)
        }?;
        Some(YearMonth { first })
    }

    /// Header label, e.g. "January 2021".
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    /// Route path, e.g. "/2021/1".
    pub fn path(&self) -> String {
        format!("/{}/{}", self.year(), self.month())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_january_2021_bounds() {
        let jan = ym(2021, 1);
        assert_eq!(jan.first_day(), NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
        assert_eq!(jan.last_day(), NaiveDate::from_ymd_opt(2021, 1, 31).unwrap());
        assert_eq!(jan.first_weekday(), Weekday::Fri);
        assert_eq!(jan.first_weekday_index(), 5);
        assert_eq!(jan.days().count(), 31);
    }

    #[test]
    fn test_february_leap_years() {
        assert_eq!(ym(2020, 2).days_in_month(), 29);
        assert_eq!(ym(2021, 2).days_in_month(), 28);
        assert_eq!(ym(1900, 2).days_in_month(), 28);
        assert_eq!(ym(2000, 2).days_in_month(), 29);
        assert_eq!(ym(2020, 2).last_day().to_string(), "2020-02-29");
    }

    #[test]
    fn test_month_lengths_across_a_year() {
        let lengths: Vec<u32> = (1..=12).map(|m| ym(2021, m).days_in_month()).collect();
        assert_eq!(lengths, [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]);
        assert_eq!(ym(2021, 12).last_day().to_string(), "2021-12-31");
        assert_eq!(ym(9999, 12).days().count(), 31);
    }

    #[test]
    fn test_offset_crosses_year_boundaries() {
        assert_eq!(ym(2021, 1).offset(-1), Some(ym(2020, 12)));
        assert_eq!(ym(2020, 12).offset(1), Some(ym(2021, 1)));
        assert_eq!(ym(2021, 3).offset(-14), Some(ym(2020, 1)));
        assert_eq!(ym(2021, 3).offset(0), Some(ym(2021, 3)));
    }

    #[test]
    fn test_offset_may_leave_display_range() {
        let shifted = ym(9999, 12).offset(1).unwrap();
        assert_eq!(shifted.year(), 10000);
        assert!(!shifted.is_displayable());
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(YearMonth::new(999, 5).is_err());
        assert!(YearMonth::new(10000, 5).is_err());
        assert!(YearMonth::new(2021, 0).is_err());
        assert!(YearMonth::new(2021, 13).is_err());
        assert!(YearMonth::new(1000, 1).is_ok());
        assert!(YearMonth::new(9999, 12).is_ok());
    }

    #[test]
    fn test_title_and_path() {
        assert_eq!(ym(2021, 1).title(), "January 2021");
        assert_eq!(ym(2021, 1).path(), "/2021/1");
        assert_eq!(ym(2020, 12).to_string(), "/2020/12");
    }
}
