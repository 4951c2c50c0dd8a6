// Date value module
// Immutable calendar day used for every date the picker holds

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::utils::date::{days_between, days_in_month};

/// A single calendar day.
///
/// Always valid by construction: out-of-range parts are clamped rather than
/// rejected. Months are zero-based (0 = January) to match the month grid the
/// picker drives. Values are replaced wholesale on every edit, never mutated
/// in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateValue(NaiveDate);

impl DateValue {
    /// Build a day, clamping month into 0..=11 and day into the month's length.
    ///
    /// # Examples
    /// ```
    /// use date_range_picker::models::date_value::DateValue;
    ///
    /// let date = DateValue::new(2023, 1, 31);
    /// assert_eq!(date.to_string(), "2023-02-28");
    /// ```
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        let year = year.clamp(NaiveDate::MIN.year(), NaiveDate::MAX.year());
        let month = month.min(11);
        let day = day.clamp(1, days_in_month(year, month));
        let date = NaiveDate::from_ymd_opt(year, month + 1, day).unwrap_or(if year < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        });
        Self(date)
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn naive(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Zero-based month (0 = January).
    pub fn month(self) -> u32 {
        self.0.month0()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Same month and day in another year; Feb 29 falls back to Feb 28.
    pub fn with_year(self, year: i32) -> Self {
        Self::new(year, self.month(), self.day())
    }

    /// Same day number in another month, clamped to the month's length.
    pub fn with_month(self, month: u32) -> Self {
        Self::new(self.year(), month, self.day())
    }

    pub fn with_day(self, day: u32) -> Self {
        Self::new(self.year(), self.month(), day)
    }

    /// Shift by `days`, saturating at chrono's representable range.
    pub fn add_days(self, days: i64) -> Self {
        let shifted = if days >= 0 {
            self.0.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        match shifted {
            Some(date) => Self(date),
            None if days >= 0 => Self(NaiveDate::MAX),
            None => Self(NaiveDate::MIN),
        }
    }

    /// Signed days from `self` to `other`.
    pub fn days_until(self, other: DateValue) -> i64 {
        days_between(self.0, other.0)
    }

    pub fn first_of_year(year: i32) -> Self {
        Self::new(year, 0, 1)
    }

    pub fn last_of_year(year: i32) -> Self {
        Self::new(year, 11, 31)
    }
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<DateValue> for NaiveDate {
    fn from(date: DateValue) -> Self {
        date.0
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DateValue {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map(Self)
    }
}
