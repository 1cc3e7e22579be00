// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{BufRead, Write};
use std::path::Path;

use lapse_core::{DurationFilter, FilterOutcome};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::time_phase;

use super::{load_config, open_input, open_output};

/// Counts reported by `--stats`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stats {
    pub events: usize,
    pub matched: usize,
    pub passed_through: usize,
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} events: {} matched, {} passed through",
            self.events, self.matched, self.passed_through
        )
    }
}

pub fn run(config: Option<&Path>, input: &str, output: &str, stats: bool) -> Result<()> {
    let (_, config) = load_config(config)?;
    let filter = time_phase!("filter::compile", DurationFilter::new(&config.filter))?;

    let reader = open_input(input)?;
    let mut writer = open_output(output)?;
    let summary = time_phase!("filter::events", process(&filter, reader, &mut writer))?;
    writer.flush()?;

    if stats {
        eprintln!("{summary}");
    }
    Ok(())
}

/// Filter every JSON Lines event from `reader` into `writer`.
///
/// Blank lines are skipped. A line that is not a JSON object aborts with its
/// line number; events the filter cannot process are written unchanged.
pub fn process<R: BufRead, W: Write>(
    filter: &DurationFilter,
    reader: R,
    writer: &mut W,
) -> Result<Stats> {
    let mut stats = Stats::default();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let value: Value = serde_json::from_str(line).map_err(|e| Error::ParseLineError {
            line: line_num + 1,
            reason: e.to_string(),
        })?;
        let Value::Object(mut event) = value else {
            return Err(Error::ParseLineError {
                line: line_num + 1,
                reason: "expected a JSON object".to_string(),
            });
        };

        stats.events += 1;
        match filter.filter(&mut event) {
            FilterOutcome::Matched(_) => stats.matched += 1,
            FilterOutcome::PassedThrough(_) => stats.passed_through += 1,
        }

        serde_json::to_writer(&mut *writer, &event)?;
        writer.write_all(b"\n")?;
    }

    tracing::info!("{stats}");
    Ok(stats)
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
