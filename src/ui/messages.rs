// UI Messages
// User intents relayed from the terminal into the picker

use crate::error::PickerError;
use crate::models::date_value::DateValue;
use crate::models::range::RangeSelection;
use crate::models::side::Side;
use crate::services::picker::{PickerView, ViewController};

/// Messages for the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Pick a year in a side's year list
    SelectYear(Side, i32),
    /// Pick a day in a side's month grid
    SelectDay(Side, DateValue),
    /// Flip a side's enable switch
    ToggleEnabled(Side),
    /// Number pad digit
    DurationDigit(u8),
    /// Number pad delete
    DurationBackspace,
    /// Number pad long-press delete
    DurationClear,
    /// Tap a header field
    ShowView(PickerView),
    /// Tap the arrow beside the duration
    DurationArrow,
    Confirm,
    Cancel,
}

impl Message {
    /// Parse one line of terminal input, e.g. `day end 2024-01-05` or `digit 7`.
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let command = words.next().ok_or_else(|| "empty command".to_string())?;
        let args: Vec<&str> = words.collect();

        match (command, args.as_slice()) {
            ("day", [side, date]) => {
                let date = date
                    .parse::<DateValue>()
                    .map_err(|e| format!("bad date '{}': {}", date, e))?;
                Ok(Message::SelectDay(parse_side(side)?, date))
            }
            ("year", [side, year]) => {
                let year = year
                    .parse::<i32>()
                    .map_err(|_| format!("bad year '{}'", year))?;
                Ok(Message::SelectYear(parse_side(side)?, year))
            }
            ("toggle", [side]) => Ok(Message::ToggleEnabled(parse_side(side)?)),
            ("digit", [digit]) => digit
                .parse::<u8>()
                .map(Message::DurationDigit)
                .map_err(|_| format!("bad digit '{}'", digit)),
            ("back", []) => Ok(Message::DurationBackspace),
            ("clear", []) => Ok(Message::DurationClear),
            ("view", [view]) => Ok(Message::ShowView(parse_view(view)?)),
            ("arrow", []) => Ok(Message::DurationArrow),
            ("ok" | "confirm", []) => Ok(Message::Confirm),
            ("cancel", []) => Ok(Message::Cancel),
            _ => Err(format!("unknown command '{}'", line.trim())),
        }
    }
}

/// Apply a message. Returns the final selection once the user confirms.
pub fn update(
    picker: &mut ViewController,
    message: Message,
) -> Result<Option<RangeSelection>, PickerError> {
    match message {
        Message::SelectYear(side, year) => picker.select_year(side, year)?,
        Message::SelectDay(side, date) => {
            picker.select_day(side, date.year(), date.month(), date.day())?
        }
        Message::ToggleEnabled(side) => picker.toggle_enabled(side)?,
        Message::DurationDigit(digit) => picker.enter_duration_digit(digit)?,
        Message::DurationBackspace => picker.duration_backspace()?,
        Message::DurationClear => picker.duration_clear()?,
        Message::ShowView(view) => picker.request_view(view)?,
        Message::DurationArrow => picker.tap_duration_arrow()?,
        Message::Confirm => return picker.confirm().map(Some),
        Message::Cancel => picker.cancel(),
    }
    Ok(None)
}

fn parse_side(word: &str) -> Result<Side, String> {
    match word {
        "start" => Ok(Side::Start),
        "end" => Ok(Side::End),
        other => Err(format!("unknown side '{}'", other)),
    }
}

fn parse_view(word: &str) -> Result<PickerView, String> {
    match word {
        "start-day" => Ok(PickerView::StartDay),
        "start-year" => Ok(PickerView::StartYear),
        "end-day" => Ok(PickerView::EndDay),
        "end-year" => Ok(PickerView::EndYear),
        "duration" => Ok(PickerView::Duration),
        other => Err(format!("unknown view '{}'", other)),
    }
}
