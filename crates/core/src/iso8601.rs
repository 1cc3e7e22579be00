// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Generic ISO-8601 date-time parsing.
//!
//! Accepts the forms a lenient ISO-8601 date-time parser accepts:
//!
//! ```text
//! 2024-03-05                     calendar date
//! 2024-03 / 2024                 reduced precision
//! 2024-065                       ordinal date
//! 2024-W10-2                     week date
//! 2024-03-05T10:20               date and time
//! 2024-03-05T10:20:30.123456789  fractional seconds ('.' or ',')
//! 2024-03-05 10:20:30Z           space separator, UTC designator
//! 2024-03-05T10:20:30+02:00      offset (+hh, +hhmm, +hh:mm)
//! T10:20:30                      time only, on 1970-01-01
//! ```

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use chrono_tz::Tz;

use crate::format::localize;

/// Parses an ISO-8601 string into epoch milliseconds.
///
/// An offset in the string wins; without one the date-time is placed in
/// `zone`, or UTC when no zone is configured.
pub(crate) fn parse(raw: &str, zone: Option<Tz>) -> Result<i64, String> {
    let mut cur = Cursor::new(raw);

    let date = if cur.peek() == Some(b'T') {
        NaiveDate::from_ymd_opt(1970, 1, 1).ok_or("invalid epoch date")?
    } else {
        parse_date(&mut cur)?
    };

    let mut time = NaiveTime::MIN;
    let mut offset_secs = None;
    if !cur.is_done() {
        if !(cur.eat(b'T') || cur.eat(b' ')) {
            return Err(cur.unexpected("date/time separator 'T'"));
        }
        if !cur.is_done() && !matches!(cur.peek(), Some(b'Z' | b'+' | b'-')) {
            time = parse_time(&mut cur)?;
        }
        if !cur.is_done() {
            offset_secs = Some(parse_offset(&mut cur)?);
        }
    }

    if !cur.is_done() {
        return Err(cur.unexpected("end of input"));
    }

    let naive = NaiveDateTime::new(date, time);
    match offset_secs {
        Some(secs) => Ok(naive.and_utc().timestamp_millis() - i64::from(secs) * 1000),
        None => localize(naive, zone),
    }
}

fn parse_date(cur: &mut Cursor<'_>) -> Result<NaiveDate, String> {
    let year = cur.digits(4).ok_or_else(|| cur.unexpected("4-digit year"))? as i32;

    if !cur.eat(b'-') {
        return NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| "invalid year".to_string());
    }

    // Week date: yyyy-Www[-d]
    if cur.eat(b'W') {
        let week = cur.digits(2).ok_or_else(|| cur.unexpected("2-digit week"))?;
        let weekday = if cur.eat(b'-') {
            let day = cur.digits(1).ok_or_else(|| cur.unexpected("day of week"))?;
            weekday_from_iso(day)?
        } else {
            Weekday::Mon
        };
        return NaiveDate::from_isoywd_opt(year, week, weekday)
            .ok_or_else(|| format!("week {week} does not exist in {year}"));
    }

    // Ordinal date: yyyy-ddd
    if cur.digit_run() == 3 {
        let ordinal = cur.digits(3).ok_or_else(|| cur.unexpected("day of year"))?;
        return NaiveDate::from_yo_opt(year, ordinal)
            .ok_or_else(|| format!("day {ordinal} does not exist in {year}"));
    }

    let month = cur.digits(2).ok_or_else(|| cur.unexpected("2-digit month"))?;
    let day = if cur.eat(b'-') {
        cur.digits(2).ok_or_else(|| cur.unexpected("2-digit day"))?
    } else {
        1
    };
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| format!("{year:04}-{month:02}-{day:02} is not a valid date"))
}

fn weekday_from_iso(day: u32) -> Result<Weekday, String> {
    match day {
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        7 => Ok(Weekday::Sun),
        _ => Err(format!("day of week must be 1-7, got {day}")),
    }
}

fn parse_time(cur: &mut Cursor<'_>) -> Result<NaiveTime, String> {
    let hour = cur.digits(2).ok_or_else(|| cur.unexpected("2-digit hour"))?;
    let mut minute = 0;
    let mut second = 0;
    let mut nano = 0;

    if cur.eat(b':') {
        minute = cur.digits(2).ok_or_else(|| cur.unexpected("2-digit minute"))?;
        if cur.eat(b':') {
            second = cur.digits(2).ok_or_else(|| cur.unexpected("2-digit second"))?;
            if cur.eat(b'.') || cur.eat(b',') {
                nano = parse_fraction(cur)?;
            }
        }
    }

    NaiveTime::from_hms_nano_opt(hour, minute, second, nano)
        .ok_or_else(|| format!("{hour:02}:{minute:02}:{second:02} is not a valid time"))
}

/// Reads fractional-second digits as nanoseconds. Digits past the ninth are dropped.
fn parse_fraction(cur: &mut Cursor<'_>) -> Result<u32, String> {
    let run = cur.digit_run();
    if run == 0 {
        return Err(cur.unexpected("fractional seconds"));
    }
    let kept = run.min(9);
    let digits = cur.digits(kept).ok_or_else(|| cur.unexpected("fractional seconds"))?;
    cur.skip(run - kept);
    Ok(digits * 10u32.pow((9 - kept) as u32))
}

/// Parses `Z`, `+hh`, `+hhmm` or `+hh:mm` into seconds east of UTC.
fn parse_offset(cur: &mut Cursor<'_>) -> Result<i32, String> {
    if cur.eat(b'Z') {
        return Ok(0);
    }
    let sign = if cur.eat(b'+') {
        1
    } else if cur.eat(b'-') {
        -1
    } else {
        return Err(cur.unexpected("offset"));
    };

    let hours = cur.digits(2).ok_or_else(|| cur.unexpected("2-digit offset hours"))?;
    let minutes = if cur.is_done() {
        0
    } else {
        cur.eat(b':');
        cur.digits(2).ok_or_else(|| cur.unexpected("2-digit offset minutes"))?
    };
    if hours > 23 || minutes > 59 {
        return Err(format!("offset {hours:02}:{minutes:02} is out of range"));
    }
    Ok(sign * (hours * 3600 + minutes * 60) as i32)
}

/// Byte cursor over an ASCII timestamp.
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Cursor {
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn is_done(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn skip(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.bytes.len());
    }

    /// Number of consecutive ASCII digits at the cursor.
    fn digit_run(&self) -> usize {
        self.bytes[self.pos..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    }

    /// Consumes exactly `n` digits.
    fn digits(&mut self, n: usize) -> Option<u32> {
        let end = self.pos + n;
        let slice = self.bytes.get(self.pos..end)?;
        if !slice.iter().all(u8::is_ascii_digit) {
            return None;
        }
        let value = slice
            .iter()
            .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
        self.pos = end;
        Some(value)
    }

    fn unexpected(&self, expected: &str) -> String {
        if self.is_done() {
            return format!("expected {expected}, found end of input");
        }
        let rest = String::from_utf8_lossy(&self.bytes[self.pos..]);
        format!("expected {expected} at position {}, found '{rest}'", self.pos)
    }
}

#[cfg(test)]
#[path = "iso8601_tests.rs"]
mod tests;
