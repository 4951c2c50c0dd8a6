//! Days marked as part of the current selection in the day grid.

use crate::models::date_value::DateValue;
use crate::models::range::RangeSnapshot;

/// Sorted list of highlighted days.
///
/// Both sides enabled: every day from start to end inclusive. Otherwise only
/// the enabled side's day. Linear in the range length.
pub fn highlighted_days(range: &RangeSnapshot) -> Vec<DateValue> {
    match (range.start_enabled, range.end_enabled) {
        (true, true) => {
            let span = range.start.days_until(range.end).max(0);
            (0..=span).map(|offset| range.start.add_days(offset)).collect()
        }
        (true, false) => vec![range.start],
        _ => vec![range.end],
    }
}

/// Membership test over a list produced by [`highlighted_days`].
pub fn is_highlighted(highlighted: &[DateValue], date: DateValue) -> bool {
    highlighted.binary_search(&date).is_ok()
}
