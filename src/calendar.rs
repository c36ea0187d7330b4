//! Gregorian month grids for the year planner
//!
//! A [`MonthGrid`] enumerates the concrete dates of one month together with
//! the weekday offset of its first day. The planner lays every month out as
//! one horizontal strip, so the offset directly becomes the number of leading
//! empty columns.

use chrono::{Datelike, NaiveDate};

/// English month name for a 1-based month number.
///
/// Month and day names are not localized; callers wanting other languages
/// should map the number themselves.
pub fn month_name(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    NAMES[(month as usize - 1).min(11)]
}

/// Three-letter abbreviation of [`month_name`], used where a full name
/// would not fit.
pub fn month_abbrev(month: u32) -> &'static str {
    &month_name(month)[..3]
}

/// Whether a date falls on Saturday or Sunday (Monday-based index >= 5).
pub fn is_weekend(day: NaiveDate) -> bool {
    day.weekday().num_days_from_monday() >= 5
}

/// The dates of one calendar month plus its leading weekday offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    /// 1-based month number.
    pub month: u32,
    /// First day of the month.
    pub first: NaiveDate,
    /// Last day of the month (December rolls over into the next year to
    /// find it).
    pub last: NaiveDate,
    /// Monday-based weekday index of the first day, 0..=6.
    pub offset: u32,
}

impl MonthGrid {
    /// Build the grid for `(year, month)`, `month` in 1..=12.
    ///
    /// Returns `None` when the year is outside the range chrono can
    /// represent (including `year + 1` for the December rollover).
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next_month_first = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        let last = next_month_first.pred_opt()?;

        Some(Self {
            year,
            month,
            first,
            last,
            offset: first.weekday().num_days_from_monday(),
        })
    }

    /// Number of days in the month.
    pub fn num_days(&self) -> u32 {
        (self.last - self.first).num_days() as u32 + 1
    }

    /// Ordered dates from day 1 to the last day, inclusive.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.first.iter_days().take(self.num_days() as usize)
    }

    /// Whether `day` falls inside this month.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.first <= day && day <= self.last
    }

    /// Zero-based day column for a date of this month, counting the leading
    /// weekday offset.
    pub fn column(&self, day: NaiveDate) -> u32 {
        self.offset + day.day() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_lengths_2015() {
        let lengths: Vec<u32> = (1..=12)
            .map(|m| MonthGrid::new(2015, m).unwrap().num_days())
            .collect();
        assert_eq!(lengths, vec![31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]);
    }

    #[test]
    fn test_leap_year_february() {
        assert_eq!(MonthGrid::new(2016, 2).unwrap().num_days(), 29);
        assert_eq!(MonthGrid::new(2000, 2).unwrap().num_days(), 29);
        assert_eq!(MonthGrid::new(1900, 2).unwrap().num_days(), 28);
    }

    #[test]
    fn test_december_rollover() {
        let dec = MonthGrid::new(2015, 12).unwrap();
        assert_eq!(dec.last, date(2015, 12, 31));
        assert_eq!(dec.num_days(), 31);
    }

    #[test]
    fn test_month_offsets_2015() {
        // 2015-01-01 was a Thursday, 2015-03-01 a Sunday, 2015-06-01 a Monday.
        assert_eq!(MonthGrid::new(2015, 1).unwrap().offset, 3);
        assert_eq!(MonthGrid::new(2015, 3).unwrap().offset, 6);
        assert_eq!(MonthGrid::new(2015, 6).unwrap().offset, 0);
        assert_eq!(MonthGrid::new(2015, 8).unwrap().offset, 5);
    }

    #[test]
    fn test_days_are_ordered_and_inclusive() {
        let feb = MonthGrid::new(2015, 2).unwrap();
        let days: Vec<NaiveDate> = feb.days().collect();
        assert_eq!(days.len(), 28);
        assert_eq!(days[0], date(2015, 2, 1));
        assert_eq!(days[27], date(2015, 2, 28));
        assert!(days.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_contains() {
        let jun = MonthGrid::new(2015, 6).unwrap();
        assert!(jun.contains(date(2015, 6, 1)));
        assert!(jun.contains(date(2015, 6, 30)));
        assert!(!jun.contains(date(2015, 5, 31)));
        assert!(!jun.contains(date(2015, 7, 1)));
    }

    #[test]
    fn test_column_counts_leading_offset() {
        // March 2015 starts on a Sunday: day 1 sits in column 6.
        let mar = MonthGrid::new(2015, 3).unwrap();
        assert_eq!(mar.column(date(2015, 3, 1)), 6);
        assert_eq!(mar.column(date(2015, 3, 15)), 20);

        // June 2015 starts on a Monday: no leading columns.
        let jun = MonthGrid::new(2015, 6).unwrap();
        assert_eq!(jun.column(date(2015, 6, 1)), 0);
    }

    #[test]
    fn test_weekend_detection() {
        assert!(is_weekend(date(2015, 3, 7))); // Saturday
        assert!(is_weekend(date(2015, 3, 8))); // Sunday
        assert!(!is_weekend(date(2015, 3, 9))); // Monday
        assert!(!is_weekend(date(2015, 3, 6))); // Friday
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_abbrev(6), "Jun");
        assert_eq!(month_abbrev(9), "Sep");
    }
}
