//! Numeric entry buffer behind the duration pad.

use serde::{Deserialize, Serialize};

/// In-progress duration typed on the number pad.
///
/// After the pad is opened the current duration is shown "selected", so the
/// first digit replaces the buffer instead of extending it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DurationPad {
    value: i64,
    replace_next: bool,
}

impl DurationPad {
    /// Pad showing `current` with the next digit replacing it.
    pub fn primed(current: i64) -> Self {
        Self {
            value: current.max(0),
            replace_next: true,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn replaces_next(&self) -> bool {
        self.replace_next
    }

    /// Shift `digit` in from the right, capped at `limit`.
    pub fn push_digit(&mut self, digit: u8, limit: i64) -> i64 {
        let digit = i64::from(digit);
        let candidate = if self.replace_next {
            digit
        } else {
            self.value.saturating_mul(10).saturating_add(digit)
        };
        self.value = candidate.min(limit.max(0));
        self.replace_next = false;
        self.value
    }

    /// Drop the last digit.
    pub fn pop_digit(&mut self) -> i64 {
        self.value /= 10;
        self.replace_next = false;
        self.value
    }

    pub fn clear(&mut self) -> i64 {
        self.value = 0;
        self.replace_next = false;
        self.value
    }

    /// Record the duration actually applied after clamping.
    pub(crate) fn set_value(&mut self, value: i64) {
        self.value = value;
    }
}
