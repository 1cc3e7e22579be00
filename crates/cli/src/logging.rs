// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging setup.
//!
//! Logs go to stderr, or to `--log-file` when given, so stdout stays free for
//! events. `RUST_LOG` overrides the level chosen by `-v`.

use std::fs;
use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::env;

/// Level used when `RUST_LOG` is unset.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn env_filter(verbose: u8) -> EnvFilter {
    env::log_filter()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber. A log file that cannot be opened falls
/// back to stderr. Calling this more than once keeps the first subscriber.
pub fn init(log_file: Option<&Path>, verbose: u8) {
    let filter = env_filter(verbose);

    let file = log_file.and_then(|path| {
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| eprintln!("warning: cannot open log file {}: {}", path.display(), e))
            .ok()
    });

    // Ignore the error when a subscriber is already installed.
    let _ = match file {
        Some(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(file)
            .with_ansi(false)
            .try_init(),
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
