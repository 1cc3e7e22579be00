// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    millisecond = { "millisecond", TimeUnit::Millisecond },
    second = { "second", TimeUnit::Second },
    minute = { "minute", TimeUnit::Minute },
    hour = { "hour", TimeUnit::Hour },
    day = { "day", TimeUnit::Day },
    week = { "week", TimeUnit::Week },
    year = { "year", TimeUnit::Year },
)]
fn unit_round_trips_through_name(name: &str, unit: TimeUnit) {
    assert_eq!(name.parse::<TimeUnit>().unwrap(), unit);
    assert_eq!(unit.to_string(), name);
}

#[parameterized(
    plural = { "seconds" },
    capitalized = { "Second" },
    month = { "month" },
    empty = { "" },
)]
fn unknown_units_are_rejected(name: &str) {
    let err = name.parse::<TimeUnit>().unwrap_err();
    assert!(err.to_string().contains("valid units"));
}

#[test]
fn default_unit_is_second() {
    assert_eq!(TimeUnit::default(), TimeUnit::Second);
}

// ─────────────────────────────────────────────────────────────────────────────
// compute
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn seconds_rounds_half_away_from_zero() {
    let result = compute(1_000_000, 1_005_500, Some(TimeUnit::Second), false);
    assert_eq!(result.seconds, 5.5);
    assert_eq!(result.value, Some(6));
    assert_eq!(result.output(), DurationValue::Number(6));
}

#[test]
fn negative_intervals_are_kept() {
    let result = compute(1_005_500, 1_000_000, Some(TimeUnit::Second), false);
    assert_eq!(result.seconds, -5.5);
    assert_eq!(result.output(), DurationValue::Number(-6));
}

#[test]
fn milliseconds_are_exact() {
    let result = compute(1000, 4000, Some(TimeUnit::Millisecond), false);
    assert_eq!(result.output(), DurationValue::Number(3000));
}

#[parameterized(
    minute = { TimeUnit::Minute, 90 * 60, 90 },
    hour = { TimeUnit::Hour, 5 * 3600, 5 },
    day = { TimeUnit::Day, 3 * 86_400, 3 },
    week = { TimeUnit::Week, 2 * 604_800, 2 },
    year = { TimeUnit::Year, 365 * 86_400, 1 },
    hour_rounds_up = { TimeUnit::Hour, 5400, 2 },
    day_rounds_down = { TimeUnit::Day, 86_400 + 3600, 1 },
)]
fn unit_conversion(unit: TimeUnit, seconds: i64, expected: i64) {
    let result = compute(0, seconds * 1000, Some(unit), false);
    assert_eq!(result.value, Some(expected));
}

#[test]
fn minute_matches_rounded_seconds() {
    for millis in [0, 59_000, 61_000, 3_599_000, 7_260_000, -125_000] {
        let seconds = compute(0, millis, Some(TimeUnit::Second), false).value.unwrap();
        let minutes = compute(0, millis, Some(TimeUnit::Minute), false).value.unwrap();
        assert_eq!(minutes, (seconds as f64 / 60.0).round() as i64, "{millis}");
    }
}

#[test]
fn unrecognized_unit_falls_back_to_seconds() {
    let result = compute(0, 2_400, None, false);
    assert_eq!(result.value, None);
    assert_eq!(result.output(), DurationValue::Number(2));
}

#[test]
fn extreme_operands_do_not_overflow() {
    let result = compute(i64::MIN, i64::MAX, Some(TimeUnit::Millisecond), false);
    assert!(result.seconds > 0.0);
    assert_eq!(result.value, Some(i64::MAX));
}

// ─────────────────────────────────────────────────────────────────────────────
// prettify
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    zero = { 0.0, "00:00:00" },
    one_of_each = { 3661.0, "01:01:01" },
    fraction_floors = { 59.999, "00:00:59" },
    last_second = { 86_399.0, "23:59:59" },
    wraps_at_a_day = { 90_061.0, "01:01:01" },
    negative = { -6.0, "23:59:54" },
    negative_fraction = { -0.5, "23:59:59" },
)]
fn prettify_clock(seconds: f64, expected: &str) {
    assert_eq!(prettify(seconds), expected);
}

#[test]
fn pretty_replaces_numeric_output() {
    let result = compute(0, 3_661_000, Some(TimeUnit::Minute), true);
    assert_eq!(result.value, Some(61));
    assert_eq!(result.pretty.as_deref(), Some("01:01:01"));
    assert_eq!(result.output(), DurationValue::Text("01:01:01".into()));
}

#[test]
fn pretty_ignores_unit() {
    let in_days = compute(0, 3_661_000, Some(TimeUnit::Day), true);
    let in_ms = compute(0, 3_661_000, Some(TimeUnit::Millisecond), true);
    assert_eq!(in_days.output(), in_ms.output());
}

#[test]
fn duration_value_json() {
    assert_eq!(DurationValue::Number(-6).to_json(), serde_json::json!(-6));
    assert_eq!(
        DurationValue::Text("01:01:01".into()).to_json(),
        serde_json::json!("01:01:01")
    );
    assert_eq!(DurationValue::Number(3000).to_string(), "3000");
}
