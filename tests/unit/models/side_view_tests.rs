// Side and view helpers

use date_range_picker::{PickerView, Side};
use test_case::test_case;

#[test_case(PickerView::StartDay, Some(Side::Start), false)]
#[test_case(PickerView::StartYear, Some(Side::Start), true)]
#[test_case(PickerView::EndDay, Some(Side::End), false)]
#[test_case(PickerView::EndYear, Some(Side::End), true)]
#[test_case(PickerView::Duration, None, false)]
fn test_view_side(view: PickerView, side: Option<Side>, year_list: bool) {
    assert_eq!(view.side(), side);
    assert_eq!(view.is_year_list(), year_list);
}

#[test_case(Side::Start, PickerView::StartDay, PickerView::StartYear)]
#[test_case(Side::End, PickerView::EndDay, PickerView::EndYear)]
fn test_views_for_side(side: Side, day: PickerView, year: PickerView) {
    assert_eq!(PickerView::day(side), day);
    assert_eq!(PickerView::year(side), year);
    assert_eq!(side.other().other(), side);
}
