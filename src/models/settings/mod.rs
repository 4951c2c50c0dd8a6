// Settings module
// Picker configuration supplied before the dialog is shown

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::bounds::{DateBounds, DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR};
use crate::models::date_value::DateValue;
use crate::utils::date::weekday_from_index;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Initial start date; today when absent.
    pub start_date: Option<DateValue>,
    /// Initial end date; the start date when absent.
    pub end_date: Option<DateValue>,
    pub min_date: Option<DateValue>,
    pub max_date: Option<DateValue>,
    /// When set, the only days that may be picked.
    pub selectable_dates: Option<Vec<DateValue>>,
    pub first_day_of_week: u8, // 0 = Sunday
    pub min_year: i32,
    pub max_year: i32,
    pub show_duration: bool,
    pub show_enable_toggle: bool,
    pub start_enabled: bool,
    pub end_enabled: bool,
    /// Close (as a cancel) instead of surviving a suspend.
    pub dismiss_on_pause: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            min_date: None,
            max_date: None,
            selectable_dates: None,
            first_day_of_week: 0, // Sunday
            min_year: DEFAULT_MIN_YEAR,
            max_year: DEFAULT_MAX_YEAR,
            show_duration: true,
            show_enable_toggle: false,
            start_enabled: true,
            end_enabled: true,
            dismiss_on_pause: false,
        }
    }
}

impl PickerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.start_enabled && !self.end_enabled {
            return Err(ConfigError::BothSidesDisabled);
        }
        if weekday_from_index(self.first_day_of_week).is_none() {
            return Err(ConfigError::InvalidFirstDayOfWeek(self.first_day_of_week));
        }
        self.bounds().map(|_| ())
    }

    pub fn bounds(&self) -> Result<DateBounds, ConfigError> {
        DateBounds::new(
            self.min_year,
            self.max_year,
            self.min_date,
            self.max_date,
            self.selectable_dates.clone(),
        )
    }

    /// First column of the month grid.
    pub fn week_start(&self) -> Weekday {
        weekday_from_index(self.first_day_of_week).unwrap_or(Weekday::Sun)
    }
}
