use crate::metrics::types::WeekKey;
use chrono::{TimeZone, Utc};

fn key(y: i32, m: u32, d: u32) -> WeekKey {
    WeekKey::of(&Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap())
}

#[test]
fn jan_first_before_first_thursday_belongs_to_previous_year() {
    // 2021-01-01 is a Friday
    assert_eq!(key(2021, 1, 1), WeekKey { year: 2020, week: 53 });
    // 2023-01-01 is a Sunday
    assert_eq!(key(2023, 1, 1), WeekKey { year: 2022, week: 52 });
}

#[test]
fn jan_first_on_or_before_thursday_is_week_one() {
    // 2020-01-01 is a Wednesday
    assert_eq!(key(2020, 1, 1), WeekKey { year: 2020, week: 1 });
    // 2024-01-01 is a Monday
    assert_eq!(key(2024, 1, 1), WeekKey { year: 2024, week: 1 });
}

#[test]
fn late_december_can_belong_to_next_year() {
    // 2024-12-30 is a Monday
    assert_eq!(key(2024, 12, 30), WeekKey { year: 2025, week: 1 });
}

#[test]
fn weeks_start_on_monday() {
    // 2024-03-10 is a Sunday, 2024-03-11 a Monday
    assert_eq!(key(2024, 3, 10).week, 10);
    assert_eq!(key(2024, 3, 11).week, 11);
}

#[test]
fn display_pads_week_number() {
    assert_eq!(WeekKey { year: 2024, week: 5 }.to_string(), "2024-W05");
    assert_eq!(WeekKey { year: 2020, week: 53 }.to_string(), "2020-W53");
}

#[test]
fn keys_order_chronologically() {
    let mut keys = vec![key(2024, 3, 4), key(2023, 12, 1), key(2024, 1, 8)];
    keys.sort();

    let rendered: Vec<_> = keys.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["2023-W48", "2024-W02", "2024-W10"]);
}
