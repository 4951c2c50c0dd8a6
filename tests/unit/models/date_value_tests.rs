// DateValue construction and arithmetic
// Months are zero-based throughout

use date_range_picker::DateValue;
use test_case::test_case;

#[test_case(2024, 0, 31, "2024-01-31" ; "last day of january")]
#[test_case(2023, 1, 31, "2023-02-28" ; "day clamps to short february")]
#[test_case(2024, 1, 30, "2024-02-29" ; "day clamps to leap february")]
#[test_case(2024, 14, 5, "2024-12-05" ; "month clamps to december")]
#[test_case(2024, 3, 0, "2024-04-01" ; "day zero clamps to first")]
fn test_new_clamps_parts(year: i32, month: u32, day: u32, expected: &str) {
    assert_eq!(DateValue::new(year, month, day).to_string(), expected);
}

#[test_case("2024-01-31", 1, "2024-02-01" ; "crosses month end")]
#[test_case("2023-12-31", 1, "2024-01-01" ; "crosses year end")]
#[test_case("2024-02-28", 1, "2024-02-29" ; "lands on leap day")]
#[test_case("2024-03-01", -1, "2024-02-29" ; "backwards into leap day")]
#[test_case("2024-06-15", 0, "2024-06-15" ; "zero is identity")]
#[test_case("2024-01-01", 366, "2025-01-01" ; "whole leap year")]
fn test_add_days(start: &str, days: i64, expected: &str) {
    let start: DateValue = start.parse().unwrap();
    assert_eq!(start.add_days(days).to_string(), expected);
}

#[test_case("2024-01-10", "2024-01-10", 0 ; "same day")]
#[test_case("2024-01-10", "2024-01-05", -5 ; "earlier day")]
#[test_case("2024-02-27", "2024-03-02", 4 ; "across leap day")]
#[test_case("2023-12-25", "2024-01-01", 7 ; "across year end")]
fn test_days_until(from: &str, to: &str, expected: i64) {
    let from: DateValue = from.parse().unwrap();
    let to: DateValue = to.parse().unwrap();
    assert_eq!(from.days_until(to), expected);
}

#[test_case(2023, "2023-02-28" ; "non leap year")]
#[test_case(2028, "2028-02-29" ; "leap year")]
fn test_with_year_from_leap_day(year: i32, expected: &str) {
    let leap_day = DateValue::new(2024, 1, 29);
    assert_eq!(leap_day.with_year(year).to_string(), expected);
}

#[test_case("2024-13-01" ; "month out of range")]
#[test_case("2024/01/01" ; "wrong separator")]
#[test_case("" ; "empty")]
fn test_parse_rejects(input: &str) {
    assert!(input.parse::<DateValue>().is_err());
}
