// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use lapse_core::{FieldBinding, ParseOutcome};
use serde::Serialize;

use crate::cli::{FormatArgs, OutputFormat};
use crate::error::{Error, Result};

use super::binding;

/// One resolved value in `--output json`.
#[derive(Debug, Serialize)]
struct ResolvedValue<'a> {
    value: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    epoch_ms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn run(formats: &FormatArgs, values: &[String], output: OutputFormat) -> Result<()> {
    let binding = binding(formats)?;
    let (rendered, failed) = resolve_values(&binding, values, output)?;
    println!("{rendered}");

    if failed > 0 {
        return Err(Error::Unresolved {
            failed,
            total: values.len(),
        });
    }
    Ok(())
}

/// Resolve every value and render the report. Returns the report and the
/// number of values that failed.
pub(crate) fn resolve_values(
    binding: &FieldBinding,
    values: &[String],
    output: OutputFormat,
) -> Result<(String, usize)> {
    let outcomes = binding.resolve_each(values.iter().map(String::as_str));
    let failed = outcomes.iter().filter(|o| !o.is_resolved()).count();

    let rendered = match output {
        OutputFormat::Text => values
            .iter()
            .zip(&outcomes)
            .map(|(value, outcome)| match outcome {
                ParseOutcome::Resolved(ms) => format!("{value}\t{ms}"),
                ParseOutcome::Failed(e) => format!("{value}\terror: {e}"),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => {
            let rows: Vec<ResolvedValue<'_>> = values
                .iter()
                .zip(&outcomes)
                .map(|(value, outcome)| match outcome {
                    ParseOutcome::Resolved(ms) => ResolvedValue {
                        value,
                        epoch_ms: Some(*ms),
                        error: None,
                    },
                    ParseOutcome::Failed(e) => ResolvedValue {
                        value,
                        epoch_ms: None,
                        error: Some(e.to_string()),
                    },
                })
                .collect();
            serde_json::to_string_pretty(&rows)?
        }
    };

    Ok((rendered, failed))
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
