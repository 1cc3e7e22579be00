// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::{NaiveDate, TimeZone, Utc};
use yare::parameterized;

fn utc_ms(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> i64 {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
        .single()
        .unwrap()
        .timestamp_millis()
}

// ─────────────────────────────────────────────────────────────────────────────
// Compilation
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    date_time = { "yyyy-MM-dd HH:mm:ss", "%Y-%m-%d %H:%M:%S" },
    short_year = { "yy/MM/dd", "%y/%m/%d" },
    month_names = { "MMM dd MMMM", "%b %d %B" },
    quoted_t = { "yyyy-MM-dd'T'HH:mm:ss", "%Y-%m-%dT%H:%M:%S" },
    escaped_quote = { "HH'h'mm''", "%Hh%M'" },
    dotted_fraction = { "ss.SSS", "%S%.f" },
    dotted_micros = { "ss.SSSSSS", "%S%.f" },
    comma_fraction = { "ss,SSS", "%S,%3f" },
    offsets = { "Z ZZ", "%#z %#z" },
    twelve_hour = { "hh:mm a", "%I:%M %p" },
    weekday = { "EEE EEEE", "%a %A" },
)]
fn joda_compiles_to_strftime(joda: &str, expected: &str) {
    let pattern = Pattern::compile(joda).unwrap();
    assert_eq!(pattern.strftime(), expected);
}

#[test]
fn strftime_patterns_are_kept_verbatim() {
    let pattern = Pattern::compile("%d/%b/%Y:%H:%M:%S %z").unwrap();
    assert_eq!(pattern.strftime(), "%d/%b/%Y:%H:%M:%S %z");
}

#[parameterized(
    empty = { "" },
    blank = { "   " },
    unknown_letter = { "yyyy-QQ" },
    zone_name = { "yyyy-MM-dd z" },
    zone_id = { "yyyy-MM-dd ZZZ" },
    unterminated_quote = { "yyyy 'at" },
    too_many_fraction_digits = { "ss.SSSSSSSSSS" },
    bad_strftime = { "%Y-%Q" },
)]
fn invalid_patterns_are_unsupported(source: &str) {
    let err = Pattern::compile(source).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { .. }), "{err:?}");
}

// ─────────────────────────────────────────────────────────────────────────────
// Parsing
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn parses_full_date_time_as_utc() {
    let pattern = Pattern::compile("yyyy-MM-dd HH:mm:ss").unwrap();
    let ms = pattern.parse("2024-03-05 10:20:30", None, 2000).unwrap();
    assert_eq!(ms, utc_ms(2024, 3, 5, 10, 20, 30));
}

#[test]
fn parses_fractional_seconds() {
    let pattern = Pattern::compile("yyyy-MM-dd HH:mm:ss.SSS").unwrap();
    let ms = pattern.parse("2024-03-05 10:20:30.250", None, 2000).unwrap();
    assert_eq!(ms, utc_ms(2024, 3, 5, 10, 20, 30) + 250);
}

#[parameterized(
    one_digit = { "2024-03-05 10:20:30.5", 500 },
    three_digits = { "2024-03-05 10:20:30.123", 123 },
    six_digits = { "2024-03-05 10:20:30.123456", 123 },
    nine_digits = { "2024-03-05 10:20:30.999999999", 999 },
)]
fn dotted_fraction_accepts_any_width(raw: &str, extra_ms: i64) {
    let pattern = Pattern::compile("yyyy-MM-dd HH:mm:ss.SSS").unwrap();
    let ms = pattern.parse(raw, None, 2000).unwrap();
    assert_eq!(ms, utc_ms(2024, 3, 5, 10, 20, 30) + extra_ms);
}

#[test]
fn undotted_fraction_keeps_run_width() {
    let pattern = Pattern::compile("HH:mm:ss,SSS").unwrap();
    let ms = pattern.parse("10:20:30,250", None, 2024).unwrap();
    assert_eq!(ms, utc_ms(2024, 1, 1, 10, 20, 30) + 250);
    assert!(pattern.parse("10:20:30,5", None, 2024).is_err());
}

#[parameterized(
    utc_designator = { "yyyy-MM-dd'T'HH:mm:ssZ", "2024-03-05T10:20:30Z" },
    compact_offset = { "yyyy-MM-dd'T'HH:mm:ssZ", "2024-03-05T10:20:30+0000" },
    colon_designator = { "yyyy-MM-dd'T'HH:mm:ssZZ", "2024-03-05T10:20:30Z" },
    colon_offset = { "yyyy-MM-dd'T'HH:mm:ssZZ", "2024-03-05T10:20:30+00:00" },
)]
fn offset_letters_accept_utc_designator(joda: &str, raw: &str) {
    let pattern = Pattern::compile(joda).unwrap();
    let zone: Tz = "Asia/Tokyo".parse().unwrap();
    let ms = pattern.parse(raw, Some(zone), 2000).unwrap();
    assert_eq!(ms, utc_ms(2024, 3, 5, 10, 20, 30));
}

#[test]
fn embedded_offset_wins_over_zone() {
    let pattern = Pattern::compile("yyyy-MM-dd HH:mm:ss Z").unwrap();
    let zone: Tz = "Asia/Tokyo".parse().unwrap();
    let ms = pattern
        .parse("2024-03-05 10:20:30 +0200", Some(zone), 2000)
        .unwrap();
    assert_eq!(ms, utc_ms(2024, 3, 5, 8, 20, 30));
}

#[test]
fn configured_zone_applies_to_local_time() {
    let pattern = Pattern::compile("yyyy-MM-dd HH:mm:ss").unwrap();
    let zone: Tz = "Europe/Paris".parse().unwrap();
    // CET is UTC+1 in January
    let ms = pattern.parse("2024-01-15 12:00:00", Some(zone), 2000).unwrap();
    assert_eq!(ms, utc_ms(2024, 1, 15, 11, 0, 0));
}

#[test]
fn missing_year_uses_current_year() {
    let pattern = Pattern::compile("MMM dd HH:mm:ss").unwrap();
    let ms = pattern.parse("Mar 05 10:20:30", None, 2031).unwrap();
    assert_eq!(ms, utc_ms(2031, 3, 5, 10, 20, 30));

    let ms = pattern.parse("Mar 05 10:20:30", None, 2032).unwrap();
    assert_eq!(ms, utc_ms(2032, 3, 5, 10, 20, 30));
}

#[test]
fn explicit_year_ignores_current_year() {
    let pattern = Pattern::compile("dd/MM/yyyy").unwrap();
    let ms = pattern.parse("05/03/2024", None, 1999).unwrap();
    assert_eq!(ms, utc_ms(2024, 3, 5, 0, 0, 0));
}

#[test]
fn time_only_defaults_to_january_first() {
    let pattern = Pattern::compile("HH:mm:ss").unwrap();
    let ms = pattern.parse("01:01:01", None, 2024).unwrap();
    assert_eq!(ms, utc_ms(2024, 1, 1, 1, 1, 1));
}

#[test]
fn twelve_hour_clock_without_marker_is_morning() {
    let pattern = Pattern::compile("yyyy-MM-dd hh:mm").unwrap();
    let ms = pattern.parse("2024-03-05 07:45", None, 2000).unwrap();
    assert_eq!(ms, utc_ms(2024, 3, 5, 7, 45, 0));
}

#[test]
fn twelve_hour_clock_with_marker() {
    let pattern = Pattern::compile("yyyy-MM-dd hh:mm a").unwrap();
    let ms = pattern.parse("2024-03-05 07:45 PM", None, 2000).unwrap();
    assert_eq!(ms, utc_ms(2024, 3, 5, 19, 45, 0));
}

#[test]
fn epoch_directive_ignores_zone() {
    let pattern = Pattern::compile("%s").unwrap();
    let zone: Tz = "America/New_York".parse().unwrap();
    let ms = pattern.parse("1700000000", Some(zone), 2000).unwrap();
    assert_eq!(ms, 1_700_000_000_000);
}

#[test]
fn day_of_year_pattern() {
    let pattern = Pattern::compile("yyyy DDD").unwrap();
    let ms = pattern.parse("2024 060", None, 2000).unwrap();
    let expected = NaiveDate::from_yo_opt(2024, 60)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
        .timestamp_millis();
    assert_eq!(ms, expected);
}

#[parameterized(
    wrong_separator = { "2024/03/05 10:20:30" },
    trailing_garbage = { "2024-03-05 10:20:30 extra" },
    truncated = { "2024-03-05" },
    out_of_range = { "2024-13-05 10:20:30" },
    empty = { "" },
)]
fn mismatched_input_fails(raw: &str) {
    let pattern = Pattern::compile("yyyy-MM-dd HH:mm:ss").unwrap();
    assert!(pattern.parse(raw, None, 2000).is_err());
}

#[test]
fn nonexistent_local_time_fails() {
    let pattern = Pattern::compile("yyyy-MM-dd HH:mm").unwrap();
    let zone: Tz = "Europe/Paris".parse().unwrap();
    // Clocks jump from 02:00 to 03:00 on 2024-03-31
    assert!(pattern.parse("2024-03-31 02:30", Some(zone), 2000).is_err());
}
