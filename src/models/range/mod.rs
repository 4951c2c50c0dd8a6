// Range module
// Start/end selection with enablement flags and derived duration

mod duration;

pub use duration::DurationPad;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, PickerError};
use crate::models::bounds::DateBounds;
use crate::models::date_value::DateValue;
use crate::models::side::Side;

/// Plain copy of the selection used for rendering, comparison and persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSnapshot {
    pub start: DateValue,
    pub end: DateValue,
    pub start_enabled: bool,
    pub end_enabled: bool,
}

impl RangeSnapshot {
    pub fn duration(&self) -> i64 {
        self.start.days_until(self.end)
    }
}

/// Final result of the dialog. A disabled side is reported as `None`; at most
/// one side is ever `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSelection {
    pub start: Option<DateValue>,
    pub end: Option<DateValue>,
}

impl RangeSelection {
    /// Days between the two ends when both were selected.
    pub fn days(&self) -> Option<i64> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(start.days_until(end)),
            _ => None,
        }
    }
}

/// Selected range with its invariants enforced after every mutation:
/// at least one side enabled, `start <= end`, both ends inside the bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeState {
    start: DateValue,
    end: DateValue,
    start_enabled: bool,
    end_enabled: bool,
    bounds: DateBounds,
    pad: DurationPad,
}

impl RangeState {
    /// Both sides enabled; dates are clamped and `end` is pulled up to
    /// `start` if it precedes it.
    pub fn new(start: DateValue, end: DateValue, bounds: DateBounds) -> Self {
        let start = bounds.clamp(start);
        let end = bounds.clamp(end).max(start);
        let mut state = Self {
            start,
            end,
            start_enabled: true,
            end_enabled: true,
            bounds,
            pad: DurationPad::default(),
        };
        state.pad = DurationPad::primed(state.duration());
        state
    }

    pub fn with_enabled(mut self, start_enabled: bool, end_enabled: bool) -> Result<Self, ConfigError> {
        if !start_enabled && !end_enabled {
            return Err(ConfigError::BothSidesDisabled);
        }
        self.start_enabled = start_enabled;
        self.end_enabled = end_enabled;
        Ok(self)
    }

    /// Rebuild from a trusted snapshot, re-applying the bounds.
    pub fn from_snapshot(snapshot: RangeSnapshot, bounds: DateBounds) -> Result<Self, ConfigError> {
        Self::new(snapshot.start, snapshot.end, bounds)
            .with_enabled(snapshot.start_enabled, snapshot.end_enabled)
    }

    pub fn start(&self) -> DateValue {
        self.start
    }

    pub fn end(&self) -> DateValue {
        self.end
    }

    pub fn date(&self, side: Side) -> DateValue {
        match side {
            Side::Start => self.start,
            Side::End => self.end,
        }
    }

    pub fn is_enabled(&self, side: Side) -> bool {
        match side {
            Side::Start => self.start_enabled,
            Side::End => self.end_enabled,
        }
    }

    pub fn both_enabled(&self) -> bool {
        self.start_enabled && self.end_enabled
    }

    pub fn bounds(&self) -> &DateBounds {
        &self.bounds
    }

    /// Days from start to end; a single-day range is 0.
    pub fn duration(&self) -> i64 {
        self.start.days_until(self.end)
    }

    pub fn duration_buffer(&self) -> i64 {
        self.pad.value()
    }

    pub fn pad(&self) -> DurationPad {
        self.pad
    }

    pub fn snapshot(&self) -> RangeSnapshot {
        RangeSnapshot {
            start: self.start,
            end: self.end,
            start_enabled: self.start_enabled,
            end_enabled: self.end_enabled,
        }
    }

    pub fn selection(&self) -> RangeSelection {
        RangeSelection {
            start: self.start_enabled.then_some(self.start),
            end: self.end_enabled.then_some(self.end),
        }
    }

    pub fn set_start_date(&mut self, date: DateValue) {
        self.start = self.bounds.clamp(date);
        if self.start > self.end {
            self.end = self.start;
        }
    }

    pub fn set_end_date(&mut self, date: DateValue) {
        self.end = self.bounds.clamp(date);
        if self.start > self.end {
            self.start = self.end;
        }
    }

    pub fn set_date(&mut self, side: Side, date: DateValue) {
        match side {
            Side::Start => self.set_start_date(date),
            Side::End => self.set_end_date(date),
        }
    }

    /// Largest duration reachable while `anchor` stays fixed.
    pub fn max_duration(&self, anchor: Side) -> i64 {
        let limit = match anchor {
            Side::Start => self.start.days_until(self.bounds.latest()),
            Side::End => self.bounds.earliest().days_until(self.end),
        };
        limit.max(0)
    }

    /// Move the side opposite `anchor` so the range spans `days`.
    /// Returns the duration actually applied after clamping.
    pub fn set_duration(&mut self, days: i64, anchor: Side) -> i64 {
        let days = days.clamp(0, self.max_duration(anchor));
        match anchor {
            Side::Start => self.end = self.start.add_days(days),
            Side::End => self.start = self.end.add_days(-days),
        }
        days
    }

    pub fn set_enabled(&mut self, side: Side, enabled: bool) -> Result<(), PickerError> {
        if !enabled && !self.is_enabled(side.other()) {
            return Err(PickerError::LastEnabledSide(side));
        }
        match side {
            Side::Start => self.start_enabled = enabled,
            Side::End => self.end_enabled = enabled,
        }
        if enabled && self.start > self.end {
            self.end = self.start;
        }
        Ok(())
    }

    /// Return to an earlier snapshot of this state, e.g. when edits are cancelled.
    pub fn restore(&mut self, snapshot: RangeSnapshot) {
        self.start = self.bounds.clamp(snapshot.start);
        self.end = self.bounds.clamp(snapshot.end).max(self.start);
        if snapshot.start_enabled || snapshot.end_enabled {
            self.start_enabled = snapshot.start_enabled;
            self.end_enabled = snapshot.end_enabled;
        }
        self.pad = DurationPad::primed(self.duration());
    }

    pub(crate) fn set_pad(&mut self, pad: DurationPad) {
        self.pad = pad;
    }

    /// Show the current duration on the pad, ready to be overwritten.
    pub fn begin_duration_entry(&mut self) {
        self.pad = DurationPad::primed(self.duration());
    }

    pub fn append_digit(&mut self, digit: u8, anchor: Side) -> i64 {
        let limit = self.max_duration(anchor);
        let value = self.pad.push_digit(digit, limit);
        self.apply_pad(value, anchor)
    }

    pub fn backspace(&mut self, anchor: Side) -> i64 {
        let value = self.pad.pop_digit();
        self.apply_pad(value, anchor)
    }

    pub fn clear_all(&mut self, anchor: Side) -> i64 {
        let value = self.pad.clear();
        self.apply_pad(value, anchor)
    }

    fn apply_pad(&mut self, value: i64, anchor: Side) -> i64 {
        let applied = self.set_duration(value, anchor);
        self.pad.set_value(applied);
        applied
    }
}
