// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for help output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers: steel blue
    pub const HEADER: u8 = 74;
    /// Commands and flags: light grey
    pub const LITERAL: u8 = 250;
    /// Placeholders and quoted values: medium grey
    pub const CONTEXT: u8 = 245;
}

const RESET: &str = "\x1b[0m";

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn paint(code: u8, text: &str) -> String {
    format!("\x1b[38;5;{code}m{text}{RESET}")
}

pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Colorize an examples help block when colors are enabled.
pub fn examples(text: &str) -> String {
    if should_colorize() {
        colorize_examples(text)
    } else {
        text.to_string()
    }
}

/// Colorize an examples block:
///
/// ```text
/// Examples:
///   lapse run -c lapse.toml    Description here
/// ```
///
/// Lines ending with `:` are headers. On example lines the command, up to
/// the first run of two spaces, is colored; the description is left plain.
pub fn colorize_examples(text: &str) -> String {
    let mut lines = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            lines.push(format!("{indent}{}", header(trimmed)));
        } else if let Some(end) = find_description_start(trimmed) {
            let (cmd, desc) = trimmed.split_at(end);
            lines.push(format!("{indent}{}{desc}", colorize_command(cmd)));
        } else if !trimmed.is_empty() && indent.len() >= 2 {
            lines.push(format!("{indent}{}", colorize_command(trimmed)));
        } else {
            lines.push(line.to_string());
        }
    }
    lines.join("\n")
}

/// Colorize one command: quoted strings and `<placeholders>` as context,
/// everything else as literal.
pub fn colorize_command(cmd: &str) -> String {
    cmd.split(' ')
        .map(|word| {
            if word.is_empty() {
                String::new()
            } else if word.starts_with('"') || word.starts_with('<') || word.starts_with('\'') {
                context(word)
            } else {
                literal(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Find where the description starts (after 2+ spaces following the command).
pub fn find_description_start(line: &str) -> Option<usize> {
    let start = line.find("  ")?;
    let rest = &line[start..];
    if rest.trim().is_empty() {
        return None;
    }
    Some(start)
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
