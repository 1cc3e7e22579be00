// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interval computation between two resolved timestamps.
//!
//! The raw interval is `(second - first) / 1000.0` seconds. It may be
//! negative when `second` precedes `first`. The numeric output is the raw
//! interval converted to a [`TimeUnit`] and rounded half away from zero; the
//! pretty output is an `HH:MM:SS` clock reading of the raw interval.

use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_WEEK: f64 = 604_800.0;
/// A fixed 365-day year.
const SECONDS_PER_YEAR: f64 = 31_536_000.0;

/// Unit of the numeric duration output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeUnit {
    Millisecond,
    #[default]
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Year,
}

impl TimeUnit {
    /// Returns the unit name used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Millisecond => "millisecond",
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Year => "year",
        }
    }

    /// Returns valid unit names for error messages.
    pub fn valid_names() -> &'static str {
        "millisecond, second, minute, hour, day, week, year"
    }

    /// Converts a number of seconds into this unit.
    pub fn from_seconds(&self, seconds: f64) -> f64 {
        match self {
            TimeUnit::Millisecond => seconds * 1000.0,
            TimeUnit::Second => seconds,
            TimeUnit::Minute => seconds / SECONDS_PER_MINUTE,
            TimeUnit::Hour => seconds / SECONDS_PER_HOUR,
            TimeUnit::Day => seconds / SECONDS_PER_DAY as f64,
            TimeUnit::Week => seconds / SECONDS_PER_WEEK,
            TimeUnit::Year => seconds / SECONDS_PER_YEAR,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "millisecond" => Ok(TimeUnit::Millisecond),
            "second" => Ok(TimeUnit::Second),
            "minute" => Ok(TimeUnit::Minute),
            "hour" => Ok(TimeUnit::Hour),
            "day" => Ok(TimeUnit::Day),
            "week" => Ok(TimeUnit::Week),
            "year" => Ok(TimeUnit::Year),
            _ => Err(Error::Configuration(format!(
                "unknown time unit '{s}'\n  hint: valid units are: {}",
                TimeUnit::valid_names()
            ))),
        }
    }
}

/// The value written into the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationValue {
    /// A rounded number in the configured unit.
    Number(i64),
    /// An `HH:MM:SS` rendering.
    Text(String),
}

impl DurationValue {
    /// Converts to a JSON value for writing into an event.
    pub fn to_json(&self) -> Value {
        match self {
            DurationValue::Number(n) => Value::from(*n),
            DurationValue::Text(s) => Value::String(s.clone()),
        }
    }
}

impl fmt::Display for DurationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationValue::Number(n) => write!(f, "{n}"),
            DurationValue::Text(s) => f.write_str(s),
        }
    }
}

/// The interval between two timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationResult {
    /// Signed seconds from the first timestamp to the second.
    pub seconds: f64,
    /// The rounded value in the requested unit. `None` when no unit was recognized.
    pub value: Option<i64>,
    /// The `HH:MM:SS` rendering, when requested.
    pub pretty: Option<String>,
}

impl DurationResult {
    /// The value to write: the pretty string when present, otherwise the
    /// converted value, otherwise the rounded raw seconds.
    pub fn output(&self) -> DurationValue {
        if let Some(pretty) = &self.pretty {
            return DurationValue::Text(pretty.clone());
        }
        DurationValue::Number(
            self.value
                .unwrap_or_else(|| round_to_i64(self.seconds)),
        )
    }
}

/// Computes the interval from `first_ms` to `second_ms`.
///
/// `unit` is `None` when the configured unit was not recognized.
pub fn compute(first_ms: i64, second_ms: i64, unit: Option<TimeUnit>, pretty: bool) -> DurationResult {
    let seconds = (i128::from(second_ms) - i128::from(first_ms)) as f64 / 1000.0;
    DurationResult {
        seconds,
        value: unit.map(|u| round_to_i64(u.from_seconds(seconds))),
        pretty: pretty.then(|| prettify(seconds)),
    }
}

/// Renders seconds as an `HH:MM:SS` UTC clock reading of `floor(seconds)`.
///
/// Only meaningful below 24 hours: hours wrap modulo 24, and negative
/// intervals read as the clock time before midnight.
pub fn prettify(seconds: f64) -> String {
    let clock = (seconds.floor() as i64).rem_euclid(SECONDS_PER_DAY);
    format!(
        "{:02}:{:02}:{:02}",
        clock / 3600,
        clock % 3600 / 60,
        clock % 60
    )
}

/// Rounds half away from zero. Out-of-range values saturate.
fn round_to_i64(value: f64) -> i64 {
    value.round() as i64
}

#[cfg(test)]
#[path = "interval_tests.rs"]
mod tests;
