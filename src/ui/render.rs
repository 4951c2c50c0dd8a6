//! Plain-text rendering of the picker for the terminal driver.

use std::fmt::Write;

use chrono::{Datelike, Weekday};

use crate::models::date_value::DateValue;
use crate::models::side::Side;
use crate::services::picker::{PickerView, ViewController};
use crate::utils::date::{days_in_month, leading_blank_days};

/// Years shown either side of the selected one in a year list.
const YEAR_LIST_RADIUS: i32 = 3;

/// Header line: both dates and the duration, the active field in brackets.
pub fn render_header(picker: &ViewController) -> String {
    let snapshot = picker.snapshot();
    let view = picker.current_view();

    let field = |side: Side, date: DateValue| {
        if !picker.is_enabled(side) {
            return format!(" {}: off ", side);
        }
        let text = format!("{}: {}", side, date);
        if view.side() == Some(side) {
            format!("[{}]", text)
        } else {
            format!(" {} ", text)
        }
    };

    let mut header = format!(
        "{} - {}",
        field(Side::Start, snapshot.start),
        field(Side::End, snapshot.end)
    );

    if picker.is_duration_available() {
        let days = picker.duration();
        let unit = if days == 1 { "day" } else { "days" };
        if view == PickerView::Duration {
            let _ = write!(
                header,
                "  [{} {}, moving {}]",
                picker.duration_buffer(),
                unit,
                picker.focused_side()
            );
        } else {
            let _ = write!(header, "   {} {}", days, unit);
        }
    }
    header
}

/// Body for the active sub-view.
pub fn render_body(picker: &ViewController) -> String {
    match picker.current_view() {
        PickerView::StartDay | PickerView::EndDay => {
            let day = picker.selected_day();
            render_month_grid(picker, day.year(), day.month())
        }
        PickerView::StartYear | PickerView::EndYear => render_year_list(picker),
        PickerView::Duration => render_number_pad(),
    }
}

/// Month grid with highlighted days starred and unselectable days dotted.
pub fn render_month_grid(picker: &ViewController, year: i32, month: u32) -> String {
    let first = DateValue::new(year, month, 1);
    let week_start = picker.first_day_of_week();
    let floor = picker.min_selectable_date(picker.focused_side());

    let mut out = format!("{}\n", first.naive().format("%B %Y"));
    for offset in 0..7 {
        let _ = write!(out, "{:>4}", weekday_short(weekday_after(week_start, offset)));
    }
    out.push('\n');

    let blanks = leading_blank_days(year, month, week_start);
    for _ in 0..blanks {
        out.push_str("    ");
    }

    for day in 1..=days_in_month(year, month) {
        let date = DateValue::new(year, month, day);
        let cell = if !picker.is_selectable(date) || date < floor {
            "   .".to_string()
        } else if picker.is_highlighted(date) {
            format!("{:>4}", format!("*{}", day))
        } else {
            format!("  {:>2}", day)
        };
        out.push_str(&cell);
        if (blanks + day) % 7 == 0 {
            out.push('\n');
        }
    }
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn render_year_list(picker: &ViewController) -> String {
    let range = picker.selectable_year_range(picker.focused_side());
    let selected = picker.selected_day().year();
    // An allow-list leaves dates unclamped, so the selection may sit outside
    let center = selected.max(*range.start()).min(*range.end());
    let from = (center - YEAR_LIST_RADIUS).max(*range.start());
    let to = (center + YEAR_LIST_RADIUS).min(*range.end());

    (from..=to)
        .map(|year| {
            if year == selected {
                format!("> {}\n", year)
            } else {
                format!("  {}\n", year)
            }
        })
        .collect()
}

fn render_number_pad() -> String {
    " 1  2  3\n 4  5  6\n 7  8  9\n    0  <\n".to_string()
}

fn weekday_after(start: Weekday, offset: u32) -> Weekday {
    (0..offset).fold(start, |day, _| day.succ())
}

fn weekday_short(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Su",
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
    }
}
