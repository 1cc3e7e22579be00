// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Format parser registry.
//!
//! A [`FormatToken`] names how a raw timestamp string is written. Each token
//! compiles once, at configuration time, into a [`TimestampParser`] that turns
//! raw strings into epoch milliseconds.
//!
//! # Tokens
//!
//! - `ISO8601` - generic ISO-8601 date-time
//! - `UNIX` - decimal seconds since the epoch, fractions allowed
//! - `UNIX_MS` - integer milliseconds since the epoch
//! - `TAI64N` - 24 hex digits, optionally prefixed with `@`
//! - anything else - a custom pattern (Joda-style or strftime-style)

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

use crate::error::{Error, Result};
use crate::iso8601;
use crate::pattern::Pattern;

/// Bias added to seconds in a TAI64 label.
const TAI64_BIAS: i128 = 1 << 62;

/// Fixed approximation of the TAI-UTC leap-second offset, in milliseconds.
///
/// This does not follow the historical leap-second table. It is kept constant
/// so that configured pipelines keep producing the same intervals.
pub const TAI64N_LEAP_OFFSET_MS: i64 = 10_000;

/// A declared timestamp format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormatToken {
    /// Generic ISO-8601 date-time.
    Iso8601,
    /// Decimal seconds since the epoch.
    Unix,
    /// Integer milliseconds since the epoch.
    UnixMs,
    /// TAI64N external representation.
    Tai64n,
    /// A custom date-time pattern.
    Pattern(String),
}

impl FormatToken {
    /// Returns the token as it is written in configuration.
    pub fn as_str(&self) -> &str {
        match self {
            FormatToken::Iso8601 => "ISO8601",
            FormatToken::Unix => "UNIX",
            FormatToken::UnixMs => "UNIX_MS",
            FormatToken::Tai64n => "TAI64N",
            FormatToken::Pattern(p) => p,
        }
    }

    /// Returns the symbolic keywords, for help and error messages.
    pub fn keywords() -> &'static str {
        "ISO8601, UNIX, UNIX_MS, TAI64N"
    }
}

impl From<&str> for FormatToken {
    fn from(s: &str) -> Self {
        match s {
            "ISO8601" => FormatToken::Iso8601,
            "UNIX" => FormatToken::Unix,
            "UNIX_MS" => FormatToken::UnixMs,
            "TAI64N" => FormatToken::Tai64n,
            other => FormatToken::Pattern(other.to_string()),
        }
    }
}

impl FromStr for FormatToken {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(FormatToken::from(s))
    }
}

impl fmt::Display for FormatToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a compiled parser reads its input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Compiled {
    Iso8601,
    Unix,
    UnixMs,
    Tai64n,
    Pattern(Pattern),
}

/// A format token compiled into a parser.
///
/// Parsers are immutable after compilation and can be shared across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampParser {
    token: FormatToken,
    compiled: Compiled,
    zone: Option<Tz>,
}

impl TimestampParser {
    /// Compiles `token`. `zone` applies to zone-less `ISO8601` and pattern input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] if a custom pattern cannot be compiled.
    pub fn compile(token: &FormatToken, zone: Option<Tz>) -> Result<Self> {
        let compiled = match token {
            FormatToken::Iso8601 => Compiled::Iso8601,
            FormatToken::Unix => Compiled::Unix,
            FormatToken::UnixMs => Compiled::UnixMs,
            FormatToken::Tai64n => Compiled::Tai64n,
            FormatToken::Pattern(source) => Compiled::Pattern(Pattern::compile(source)?),
        };
        Ok(TimestampParser {
            token: token.clone(),
            compiled,
            zone,
        })
    }

    /// The token this parser was compiled from.
    pub fn token(&self) -> &FormatToken {
        &self.token
    }

    /// The configured time zone, if any.
    pub fn zone(&self) -> Option<Tz> {
        self.zone
    }

    /// The chrono strftime string a custom pattern compiled to.
    pub fn compiled_pattern(&self) -> Option<&str> {
        match &self.compiled {
            Compiled::Pattern(p) => Some(p.strftime()),
            _ => None,
        }
    }

    /// Parses `raw` into epoch milliseconds.
    ///
    /// Patterns without a year take the current local year, read at each call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedTimestamp`] if `raw` does not match.
    pub fn parse(&self, raw: &str) -> Result<i64> {
        self.parse_with(raw, || Local::now().year())
    }

    /// Parses `raw`, substituting `current_year` for patterns without a year.
    pub fn parse_in_year(&self, raw: &str, current_year: i32) -> Result<i64> {
        self.parse_with(raw, || current_year)
    }

    fn parse_with(&self, raw: &str, current_year: impl FnOnce() -> i32) -> Result<i64> {
        let parsed = match &self.compiled {
            Compiled::Iso8601 => iso8601::parse(raw, self.zone),
            Compiled::Unix => parse_unix(raw),
            Compiled::UnixMs => parse_unix_ms(raw),
            Compiled::Tai64n => parse_tai64n(raw),
            Compiled::Pattern(pattern) => pattern.parse(raw, self.zone, current_year()),
        };
        parsed.map_err(|reason| Error::malformed(raw, self.token.as_str(), reason))
    }
}

/// Looks up an IANA time zone by name.
///
/// # Errors
///
/// Returns [`Error::UnknownTimeZone`] if the name is not in the zone database.
pub fn parse_time_zone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| Error::UnknownTimeZone(name.to_string()))
}

/// Places a zone-less date-time in `zone` (UTC when `None`).
///
/// Ambiguous local times resolve to the earlier instant; local times skipped
/// by a transition are rejected.
pub(crate) fn localize(naive: NaiveDateTime, zone: Option<Tz>) -> std::result::Result<i64, String> {
    let Some(zone) = zone else {
        return Ok(naive.and_utc().timestamp_millis());
    };
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt.timestamp_millis()),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.timestamp_millis()),
        LocalResult::None => Err(format!("{naive} does not exist in time zone {zone}")),
    }
}

fn parse_unix(raw: &str) -> std::result::Result<i64, String> {
    let seconds: f64 = raw
        .trim()
        .parse()
        .map_err(|_| "not a decimal number of seconds".to_string())?;
    if !seconds.is_finite() {
        return Err("seconds must be a finite number".to_string());
    }
    let millis = (seconds * 1000.0).round();
    if millis < i64::MIN as f64 || millis >= i64::MAX as f64 {
        return Err("seconds out of range".to_string());
    }
    Ok(millis as i64)
}

fn parse_unix_ms(raw: &str) -> std::result::Result<i64, String> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| "not an integer number of milliseconds".to_string())
}

fn parse_tai64n(raw: &str) -> std::result::Result<i64, String> {
    let hex = raw.strip_prefix('@').unwrap_or(raw);
    if hex.len() != 24 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err("expected 24 hexadecimal digits".to_string());
    }

    let label = u64::from_str_radix(&hex[..16], 16).map_err(|e| e.to_string())?;
    let nanos = u32::from_str_radix(&hex[16..], 16).map_err(|e| e.to_string())?;
    if nanos >= 1_000_000_000 {
        return Err(format!("nanoseconds out of range: {nanos}"));
    }

    let seconds = i128::from(label) - TAI64_BIAS;
    let millis =
        seconds * 1000 - i128::from(TAI64N_LEAP_OFFSET_MS) + i128::from(nanos / 1_000_000);
    i64::try_from(millis).map_err(|_| "label out of range".to_string())
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
