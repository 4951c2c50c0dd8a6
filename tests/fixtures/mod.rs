// Test fixtures - reusable test data
// Dates and picker configurations shared by the integration and property tests

#![allow(dead_code)]

use date_range_picker::{DateValue, PickerConfig, ViewController};

/// Sample dates for testing. Months are zero-based like the rest of the API.
pub mod dates {
    use super::*;

    /// Jan 10, 2024
    pub fn jan_10_2024() -> DateValue {
        DateValue::new(2024, 0, 10)
    }

    /// Jun 1, 2024
    pub fn jun_1_2024() -> DateValue {
        DateValue::new(2024, 5, 1)
    }

    /// Jun 5, 2024
    pub fn jun_5_2024() -> DateValue {
        DateValue::new(2024, 5, 5)
    }

    /// Dec 30, 2024
    pub fn dec_30_2024() -> DateValue {
        DateValue::new(2024, 11, 30)
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> DateValue {
        DateValue::new(2024, 1, 29)
    }
}

/// Picker configurations for testing
pub mod configs {
    use super::*;

    pub fn range(start: DateValue, end: DateValue) -> PickerConfig {
        PickerConfig {
            start_date: Some(start),
            end_date: Some(end),
            ..Default::default()
        }
    }

    pub fn bounded(min: DateValue, max: DateValue, start: DateValue) -> PickerConfig {
        PickerConfig {
            start_date: Some(start),
            min_date: Some(min),
            max_date: Some(max),
            ..Default::default()
        }
    }

    pub fn start_only(start: DateValue) -> PickerConfig {
        PickerConfig {
            start_date: Some(start),
            end_enabled: false,
            ..Default::default()
        }
    }
}

/// Open a picker with a fixed "today" so tests don't depend on the clock.
pub fn open(config: PickerConfig) -> ViewController {
    let today = config.start_date.unwrap_or_else(dates::jan_10_2024);
    ViewController::with_today(config, today).expect("valid test configuration")
}
