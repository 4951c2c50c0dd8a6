// Bounds module
// Year range, min/max date and optional allow-list of selectable days

use crate::error::ConfigError;
use crate::models::date_value::DateValue;

pub const DEFAULT_MIN_YEAR: i32 = 1900;
pub const DEFAULT_MAX_YEAR: i32 = 2100;

/// Limits on which days may be selected.
///
/// When `selectable_dates` is present it takes precedence over the year range
/// and min/max dates for every computation here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateBounds {
    min_year: i32,
    max_year: i32,
    min_date: Option<DateValue>,
    max_date: Option<DateValue>,
    /// Sorted and de-duplicated.
    selectable_dates: Option<Vec<DateValue>>,
}

impl Default for DateBounds {
    fn default() -> Self {
        Self {
            min_year: DEFAULT_MIN_YEAR,
            max_year: DEFAULT_MAX_YEAR,
            min_date: None,
            max_date: None,
            selectable_dates: None,
        }
    }
}

impl DateBounds {
    pub fn new(
        min_year: i32,
        max_year: i32,
        min_date: Option<DateValue>,
        max_date: Option<DateValue>,
        selectable_dates: Option<Vec<DateValue>>,
    ) -> Result<Self, ConfigError> {
        if max_year < min_year {
            return Err(ConfigError::InvalidYearRange {
                min: min_year,
                max: max_year,
            });
        }

        if let (Some(min), Some(max)) = (min_date, max_date) {
            if max < min {
                return Err(ConfigError::InvalidDateRange { min, max });
            }
        }

        let selectable_dates = match selectable_dates {
            Some(mut dates) => {
                dates.sort();
                dates.dedup();
                if dates.is_empty() {
                    return Err(ConfigError::EmptySelectableDates);
                }
                Some(dates)
            }
            None => None,
        };

        let bounds = Self {
            min_year,
            max_year,
            min_date,
            max_date,
            selectable_dates,
        };

        let (earliest, latest) = (bounds.earliest(), bounds.latest());
        if latest < earliest {
            return Err(ConfigError::EmptyBounds { earliest, latest });
        }

        Ok(bounds)
    }

    pub fn min_date(&self) -> Option<DateValue> {
        self.min_date
    }

    pub fn max_date(&self) -> Option<DateValue> {
        self.max_date
    }

    pub fn selectable_dates(&self) -> Option<&[DateValue]> {
        self.selectable_dates.as_deref()
    }

    /// Lowest year any list may offer.
    pub fn min_year(&self) -> i32 {
        if let Some(first) = self.first_selectable() {
            return first.year();
        }
        match self.min_date {
            Some(min) if min.year() > self.min_year => min.year(),
            _ => self.min_year,
        }
    }

    /// Lowest year offered when the list must not start before `floor`.
    ///
    /// The end-side year list passes the selected start date here (when the
    /// start side is enabled) so it never offers years before the start.
    pub fn effective_min_year(&self, floor: Option<DateValue>) -> i32 {
        if let Some(first) = self.first_selectable() {
            return first.year();
        }
        match floor {
            Some(floor) => floor.year().max(self.min_year),
            None => self.min_year(),
        }
    }

    pub fn effective_max_year(&self) -> i32 {
        if let Some(last) = self.last_selectable() {
            return last.year();
        }
        match self.max_date {
            Some(max) if max.year() < self.max_year => max.year(),
            _ => self.max_year,
        }
    }

    /// First legal day.
    pub fn earliest(&self) -> DateValue {
        if let Some(first) = self.first_selectable() {
            return first;
        }
        let year_start = DateValue::first_of_year(self.min_year);
        match self.min_date {
            Some(min) => min.max(year_start),
            None => year_start,
        }
    }

    /// Last legal day.
    pub fn latest(&self) -> DateValue {
        if let Some(last) = self.last_selectable() {
            return last;
        }
        let year_end = DateValue::last_of_year(self.max_year);
        match self.max_date {
            Some(max) => max.min(year_end),
            None => year_end,
        }
    }

    pub fn min_selectable_date(&self, floor: Option<DateValue>) -> DateValue {
        let earliest = self.earliest();
        match floor {
            Some(floor) => floor.max(earliest),
            None => earliest,
        }
    }

    /// Pull `date` into [earliest, latest]. An allow-list leaves the date as is;
    /// its day grid only ever offers listed days.
    pub fn clamp(&self, date: DateValue) -> DateValue {
        if self.selectable_dates.is_some() {
            return date;
        }
        let clamped = date.clamp(self.earliest(), self.latest());
        if clamped != date {
            log::debug!("Clamped {} into bounds as {}", date, clamped);
        }
        clamped
    }

    pub fn is_selectable(&self, date: DateValue) -> bool {
        match &self.selectable_dates {
            Some(dates) => dates.binary_search(&date).is_ok(),
            None => date >= self.earliest() && date <= self.latest(),
        }
    }

    fn first_selectable(&self) -> Option<DateValue> {
        self.selectable_dates
            .as_ref()
            .and_then(|dates| dates.first().copied())
    }

    fn last_selectable(&self) -> Option<DateValue> {
        self.selectable_dates
            .as_ref()
            .and_then(|dates| dates.last().copied())
    }
}
