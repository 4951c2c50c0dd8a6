// Picker errors
// Configuration failures (fail fast) and rejected user intents (state unchanged)

use thiserror::Error;

use crate::models::date_value::DateValue;
use crate::models::side::Side;
use crate::services::picker::PickerView;

/// Invalid dialog configuration. Raised when the picker is built or
/// reconfigured, never during interaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("year range end {max} must be greater than or equal to year range start {min}")]
    InvalidYearRange { min: i32, max: i32 },
    #[error("max date {max} must not be before min date {min}")]
    InvalidDateRange { min: DateValue, max: DateValue },
    #[error("selectable dates must contain at least one date")]
    EmptySelectableDates,
    #[error("bounds leave no selectable day between {earliest} and {latest}")]
    EmptyBounds {
        earliest: DateValue,
        latest: DateValue,
    },
    #[error("at least one date must be enabled")]
    BothSidesDisabled,
    #[error("first day of week must be between 0 (Sunday) and 6 (Saturday), got {0}")]
    InvalidFirstDayOfWeek(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigError),
    #[error("{0} date is the only enabled date and cannot be disabled")]
    LastEnabledSide(Side),
    #[error("{0} date is disabled")]
    SideDisabled(Side),
    #[error("{0} view is not available")]
    ViewUnavailable(PickerView),
    #[error("duration digit must be between 0 and 9, got {0}")]
    InvalidDigit(u8),
    #[error("picker has already been closed")]
    Closed,
}

impl PickerError {
    /// True for rejected user intents; these leave the picker untouched.
    pub fn is_invalid_state(&self) -> bool {
        !matches!(self, PickerError::Configuration(_))
    }
}
