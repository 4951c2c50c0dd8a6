// DateBounds validation, clamping and year queries

use date_range_picker::models::bounds::DateBounds;
use date_range_picker::{ConfigError, DateValue};
use test_case::test_case;

fn d(text: &str) -> DateValue {
    text.parse().unwrap()
}

fn bounds(min: Option<&str>, max: Option<&str>) -> DateBounds {
    DateBounds::new(1900, 2100, min.map(d), max.map(d), None).unwrap()
}

#[test_case("1999-06-01", "2000-01-01" ; "before min date")]
#[test_case("2030-06-01", "2024-12-31" ; "after max date")]
#[test_case("2010-06-01", "2010-06-01" ; "inside untouched")]
fn test_clamp_to_min_max_date(input: &str, expected: &str) {
    let bounds = bounds(Some("2000-01-01"), Some("2024-12-31"));
    assert_eq!(bounds.clamp(d(input)), d(expected));
}

#[test_case("1850-03-03", "1900-01-01" ; "before first year")]
#[test_case("2200-03-03", "2100-12-31" ; "after last year")]
fn test_clamp_to_year_range(input: &str, expected: &str) {
    assert_eq!(bounds(None, None).clamp(d(input)), d(expected));
}

#[test_case(None, 1900 ; "no floor uses year range")]
#[test_case(Some("2024-06-01"), 2024 ; "floor raises start year")]
#[test_case(Some("1800-06-01"), 1900 ; "floor below range ignored")]
fn test_effective_min_year(floor: Option<&str>, expected: i32) {
    assert_eq!(bounds(None, None).effective_min_year(floor.map(d)), expected);
}

#[test_case(2020, 2010, ConfigError::InvalidYearRange { min: 2020, max: 2010 } ; "inverted years")]
fn test_rejects_inverted_years(min: i32, max: i32, expected: ConfigError) {
    assert_eq!(DateBounds::new(min, max, None, None, None), Err(expected));
}

#[test]
fn test_rejects_inverted_dates() {
    let result = DateBounds::new(1900, 2100, Some(d("2024-05-01")), Some(d("2024-04-01")), None);
    assert!(matches!(result, Err(ConfigError::InvalidDateRange { .. })));
}

#[test]
fn test_rejects_dates_outside_years() {
    let result = DateBounds::new(2000, 2010, Some(d("2015-01-01")), None, None);
    assert!(matches!(result, Err(ConfigError::EmptyBounds { .. })));
}

#[test]
fn test_rejects_empty_allow_list() {
    assert_eq!(
        DateBounds::new(1900, 2100, None, None, Some(Vec::new())),
        Err(ConfigError::EmptySelectableDates)
    );
}

#[test_case("2024-06-03", true ; "listed")]
#[test_case("2024-06-04", false ; "gap between listed")]
#[test_case("2023-01-01", false ; "before list")]
fn test_allow_list_membership(date: &str, expected: bool) {
    let bounds = DateBounds::new(
        1900,
        2100,
        None,
        None,
        Some(vec![d("2024-06-10"), d("2024-06-03"), d("2024-06-03")]),
    )
    .unwrap();
    assert_eq!(bounds.selectable_dates().map(|dates| dates.len()), Some(2));
    assert_eq!(bounds.is_selectable(d(date)), expected);
}
