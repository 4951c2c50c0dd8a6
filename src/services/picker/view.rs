//! Sub-views the picker can display.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::side::Side;

/// Sub-view shown in the picker body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickerView {
    StartDay,
    StartYear,
    EndDay,
    EndYear,
    Duration,
}

impl PickerView {
    pub fn day(side: Side) -> Self {
        match side {
            Side::Start => PickerView::StartDay,
            Side::End => PickerView::EndDay,
        }
    }

    pub fn year(side: Side) -> Self {
        match side {
            Side::Start => PickerView::StartYear,
            Side::End => PickerView::EndYear,
        }
    }

    /// Side whose date this view edits; `None` for the duration pad.
    pub fn side(self) -> Option<Side> {
        match self {
            PickerView::StartDay | PickerView::StartYear => Some(Side::Start),
            PickerView::EndDay | PickerView::EndYear => Some(Side::End),
            PickerView::Duration => None,
        }
    }

    pub fn is_year_list(self) -> bool {
        matches!(self, PickerView::StartYear | PickerView::EndYear)
    }

    pub fn label(self) -> &'static str {
        match self {
            PickerView::StartDay => "start day",
            PickerView::StartYear => "start year",
            PickerView::EndDay => "end day",
            PickerView::EndYear => "end year",
            PickerView::Duration => "duration",
        }
    }
}

impl fmt::Display for PickerView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
