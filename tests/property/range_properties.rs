use date_range_picker::models::range::RangeState;
use date_range_picker::models::bounds::DateBounds;
use date_range_picker::services::picker::highlight::highlighted_days;
use date_range_picker::{DateValue, PickerConfig, PickerView, Side, ViewController};
use proptest::prelude::*;

/// Commands a user can issue against an open picker.
#[derive(Debug, Clone)]
enum Command {
    Year(Side, i32),
    Day(Side, u32, u32),
    Toggle(Side),
    View(PickerView),
    Arrow,
    Digit(u8),
    Backspace,
    Clear,
}

fn any_side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Start), Just(Side::End)]
}

fn any_view() -> impl Strategy<Value = PickerView> {
    prop_oneof![
        Just(PickerView::StartDay),
        Just(PickerView::StartYear),
        Just(PickerView::EndDay),
        Just(PickerView::EndYear),
        Just(PickerView::Duration),
    ]
}

fn any_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        (any_side(), 2015..2035i32).prop_map(|(side, year)| Command::Year(side, year)),
        (any_side(), 0..12u32, 1..=31u32).prop_map(|(side, m, d)| Command::Day(side, m, d)),
        any_side().prop_map(Command::Toggle),
        any_view().prop_map(Command::View),
        Just(Command::Arrow),
        (0..10u8).prop_map(Command::Digit),
        Just(Command::Backspace),
        Just(Command::Clear),
    ]
}

fn any_date() -> impl Strategy<Value = DateValue> {
    (2018..2030i32, 0..12u32, 1..=31u32).prop_map(|(y, m, d)| DateValue::new(y, m, d))
}

fn apply(picker: &mut ViewController, command: Command) {
    // Rejections are part of the model; only the invariants matter here
    let _ = match command {
        Command::Year(side, year) => picker.select_year(side, year),
        Command::Day(side, month, day) => picker.select_day(side, 2024, month, day),
        Command::Toggle(side) => picker.toggle_enabled(side),
        Command::View(view) => picker.request_view(view),
        Command::Arrow => picker.tap_duration_arrow(),
        Command::Digit(digit) => picker.enter_duration_digit(digit),
        Command::Backspace => picker.duration_backspace(),
        Command::Clear => picker.duration_clear(),
    };
}

proptest! {
    /// Property: start never passes end and at least one side stays enabled,
    /// whatever the user does
    #[test]
    fn prop_invariants_hold_under_any_commands(
        start in any_date(),
        end in any_date(),
        commands in prop::collection::vec(any_command(), 0..40),
    ) {
        let config = PickerConfig {
            start_date: Some(start),
            end_date: Some(end),
            min_year: 2015,
            max_year: 2035,
            ..Default::default()
        };
        let mut picker = ViewController::with_today(config, start).unwrap();

        for command in commands {
            apply(&mut picker, command);
            let snapshot = picker.snapshot();
            prop_assert!(snapshot.start <= snapshot.end);
            prop_assert!(snapshot.start_enabled || snapshot.end_enabled);
            prop_assert!(picker.is_view_available(picker.current_view()));
            prop_assert!(snapshot.start >= DateValue::new(2015, 0, 1));
            prop_assert!(snapshot.end <= DateValue::new(2035, 11, 31));
        }
    }

    /// Property: moving the end by a duration lands exactly that many days
    /// after the start, unless the bounds cut it short
    #[test]
    fn prop_set_duration_round_trips(start in any_date(), days in 0..5000i64) {
        let mut range = RangeState::new(start, start, DateBounds::default());
        let applied = range.set_duration(days, Side::Start);

        prop_assert_eq!(range.start(), start);
        prop_assert_eq!(range.duration(), applied);
        prop_assert_eq!(applied, days.min(range.max_duration(Side::Start)));
    }

    /// Property: holding the end fixed moves the start backwards
    #[test]
    fn prop_set_duration_from_end(end in any_date(), days in 0..5000i64) {
        let mut range = RangeState::new(end, end, DateBounds::default());
        let applied = range.set_duration(days, Side::End);

        prop_assert_eq!(range.end(), end);
        prop_assert_eq!(range.start().add_days(applied), end);
    }

    /// Property: picking the day that is already selected changes nothing
    #[test]
    fn prop_reselecting_day_keeps_duration(start in any_date(), span in 0..400i64) {
        let config = PickerConfig {
            start_date: Some(start),
            end_date: Some(start.add_days(span)),
            ..Default::default()
        };
        let mut picker = ViewController::with_today(config, start).unwrap();
        let before = picker.duration();

        let date = picker.snapshot().start;
        picker.select_day(Side::Start, date.year(), date.month(), date.day()).unwrap();

        prop_assert_eq!(picker.duration(), before);
    }

    /// Property: a range highlights duration + 1 consecutive days
    #[test]
    fn prop_highlight_covers_range(start in any_date(), span in 0..1000i64) {
        let range = RangeState::new(start, start.add_days(span), DateBounds::default());
        let days = highlighted_days(&range.snapshot());

        prop_assert_eq!(days.len() as i64, span + 1);
        prop_assert!(days.windows(2).all(|pair| pair[0].days_until(pair[1]) == 1));
    }
}
