// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Custom timestamp patterns.
//!
//! Patterns come in two dialects:
//!
//! - Joda-style letters, e.g. `yyyy-MM-dd'T'HH:mm:ss.SSSZ` or `MMM dd HH:mm:ss`
//! - strftime-style directives, e.g. `%Y-%m-%d %H:%M:%S` (any pattern containing `%`)
//!
//! Both are compiled to a chrono strftime string once, at configuration time.
//! Parsing fills in the components the pattern does not carry the same way a
//! Joda parser does: the current year, January, the 1st, midnight, AM.

use chrono::format::{self, Item, Parsed, StrftimeItems};
use chrono_tz::Tz;

use crate::error::{Error, Result};
use crate::format::localize;

/// A pattern compiled to chrono's strftime syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Pattern {
    source: String,
    strftime: String,
}

impl Pattern {
    /// Compiles a Joda-style or strftime-style pattern.
    pub(crate) fn compile(source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Err(unsupported(source, "pattern is empty"));
        }

        let strftime = if source.contains('%') {
            source.to_string()
        } else {
            joda_to_strftime(source)?
        };

        if StrftimeItems::new(&strftime).any(|item| matches!(item, Item::Error)) {
            return Err(unsupported(source, "invalid strftime directive"));
        }

        Ok(Pattern {
            source: source.to_string(),
            strftime,
        })
    }

    /// The chrono strftime string this pattern compiled to.
    pub(crate) fn strftime(&self) -> &str {
        &self.strftime
    }

    /// Parses `raw` into epoch milliseconds.
    ///
    /// `current_year` is substituted when the pattern has no year component.
    /// An offset parsed from the input wins over `zone`; otherwise the local
    /// date-time is placed in `zone`, or UTC when no zone is configured.
    pub(crate) fn parse(
        &self,
        raw: &str,
        zone: Option<Tz>,
        current_year: i32,
    ) -> std::result::Result<i64, String> {
        let mut parsed = Parsed::new();
        format::parse(&mut parsed, raw, StrftimeItems::new(&self.strftime))
            .map_err(|e| e.to_string())?;

        if parsed.offset().is_some() {
            fill_defaults(&mut parsed, current_year).map_err(|e| e.to_string())?;
            let dt = parsed.to_datetime().map_err(|e| e.to_string())?;
            return Ok(dt.timestamp_millis());
        }

        if parsed.timestamp().is_some() {
            let naive = parsed
                .to_naive_datetime_with_offset(0)
                .map_err(|e| e.to_string())?;
            return Ok(naive.and_utc().timestamp_millis());
        }

        fill_defaults(&mut parsed, current_year).map_err(|e| e.to_string())?;
        let naive = parsed
            .to_naive_datetime_with_offset(0)
            .map_err(|e| e.to_string())?;
        localize(naive, zone)
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

fn unsupported(source: &str, reason: impl Into<String>) -> Error {
    Error::UnsupportedFormat {
        token: source.to_string(),
        reason: reason.into(),
    }
}

/// Fills the components a pattern left out.
fn fill_defaults(parsed: &mut Parsed, current_year: i32) -> format::ParseResult<()> {
    let has_year = parsed.year().is_some()
        || parsed.year_div_100().is_some()
        || parsed.year_mod_100().is_some()
        || parsed.isoyear().is_some();
    if !has_year {
        parsed.set_year(i64::from(current_year))?;
    }

    let has_week = parsed.isoweek().is_some()
        || parsed.week_from_mon().is_some()
        || parsed.week_from_sun().is_some();
    if parsed.month().is_none() && parsed.ordinal().is_none() && !has_week {
        parsed.set_month(1)?;
    }
    if parsed.day().is_none() && parsed.ordinal().is_none() && !has_week {
        parsed.set_day(1)?;
    }

    match (parsed.hour_div_12(), parsed.hour_mod_12()) {
        (None, None) => parsed.set_hour(0)?,
        (None, Some(_)) => parsed.set_ampm(false)?,
        (Some(_), None) => parsed.set_hour12(12)?,
        (Some(_), Some(_)) => {}
    }
    if parsed.minute().is_none() {
        parsed.set_minute(0)?;
    }

    Ok(())
}

/// Translates Joda pattern letters into strftime directives.
fn joda_to_strftime(source: &str) -> Result<String> {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len() * 2);
    let mut idx = 0;

    while idx < chars.len() {
        let ch = chars[idx];

        if ch == '\'' {
            // '' is an escaped quote, otherwise a quoted literal runs to the next quote
            if chars.get(idx + 1) == Some(&'\'') {
                out.push('\'');
                idx += 2;
                continue;
            }
            let mut look = idx + 1;
            loop {
                match chars.get(look) {
                    None => return Err(unsupported(source, "unterminated quoted literal")),
                    Some('\'') if chars.get(look + 1) == Some(&'\'') => {
                        out.push('\'');
                        look += 2;
                    }
                    Some('\'') => break,
                    Some(c) => {
                        out.push(*c);
                        look += 1;
                    }
                }
            }
            idx = look + 1;
            continue;
        }

        if ch.is_ascii_alphabetic() {
            let mut count = 1;
            while chars.get(idx + count) == Some(&ch) {
                count += 1;
            }
            let directive = joda_letter(source, ch, count)?;
            if ch == 'S' && out.ends_with('.') {
                // a dotted fraction takes 1 to 9 digits whatever the run length
                out.pop();
                out.push_str("%.f");
            } else {
                out.push_str(directive);
            }
            idx += count;
            continue;
        }

        out.push(ch);
        idx += 1;
    }

    Ok(out)
}

/// Maps one run of a Joda pattern letter to its strftime directive.
fn joda_letter(source: &str, letter: char, count: usize) -> Result<&'static str> {
    let directive = match (letter, count) {
        ('y' | 'Y' | 'u', 2) => "%y",
        ('y' | 'Y' | 'u', _) => "%Y",
        ('M', 1 | 2) => "%m",
        ('M', 3) => "%b",
        ('M', _) => "%B",
        ('d', 1 | 2) => "%d",
        ('D', 1..=3) => "%j",
        ('H', 1 | 2) => "%H",
        ('h', 1 | 2) => "%I",
        ('m', 1 | 2) => "%M",
        ('s', 1 | 2) => "%S",
        ('S', 1..=3) => "%3f",
        ('S', 4..=6) => "%6f",
        ('S', 7..=9) => "%9f",
        ('a', _) => "%p",
        ('E', 1..=3) => "%a",
        ('E', _) => "%A",
        // both accept the UTC designator `Z` as well as numeric offsets
        ('Z', 1 | 2) => "%#z",
        ('Z' | 'z', _) => {
            return Err(unsupported(
                source,
                "time zone names cannot be parsed; use Z or ZZ for numeric offsets",
            ))
        }
        _ => {
            let run: String = std::iter::repeat(letter).take(count).collect();
            return Err(unsupported(
                source,
                format!("pattern letters '{run}' are not supported"),
            ));
        }
    };
    Ok(directive)
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
