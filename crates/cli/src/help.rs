// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = fg(colors::codes::HEADER);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(fg(colors::codes::LITERAL))
        .placeholder(fg(colors::codes::CONTEXT))
        .valid(fg(colors::codes::CONTEXT))
}

/// Format keywords and pattern syntax, shown after the help of commands
/// that take `-f`.
pub fn formats() -> String {
    colors::examples(
        "\
Formats:
  ISO8601     2024-03-05T10:20:30.250+01:00, 2024-065, 2024-W10-2
  UNIX        seconds since the epoch, fractions allowed
  UNIX_MS     integer milliseconds since the epoch
  TAI64N      @4000000065e6f5ce00000000
  <pattern>   yyyy-MM-dd HH:mm:ss.SSS Z, dd/MMM/yyyy:HH:mm:ss, %Y-%m-%d %H:%M",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
