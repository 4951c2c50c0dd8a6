// Date utility functions
// Small chrono helpers shared by the picker models and the month grid

use chrono::{Datelike, NaiveDate, Weekday};

/// Number of days in a month. `month0` is zero-based (0 = January).
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let month = month0.min(11) + 1;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        // December of the last representable year
        _ => 31,
    }
}

/// Signed number of days from `from` to `to` (same day = 0).
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Map a 0 = Sunday .. 6 = Saturday index to a chrono weekday.
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// Blank cells before day 1 in a month grid whose first column is `week_start`.
pub fn leading_blank_days(year: i32, month0: u32, week_start: Weekday) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month0.min(11) + 1, 1) else {
        return 0;
    };
    let first_col = week_start.num_days_from_sunday();
    let weekday = first.weekday().num_days_from_sunday();
    (weekday + 7 - first_col) % 7
}
