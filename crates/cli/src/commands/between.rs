// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use lapse_core::{interval, DurationResult, FieldBinding, TimeUnit};
use serde::Serialize;

use crate::cli::{FormatArgs, OutputFormat};
use crate::error::Result;

use super::binding;

#[derive(Debug, Serialize)]
struct IntervalReport<'a> {
    first_ms: i64,
    second_ms: i64,
    seconds: f64,
    unit: &'a str,
    value: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pretty: Option<&'a str>,
}

pub fn run(
    formats: &FormatArgs,
    first: &str,
    second: &str,
    unit: TimeUnit,
    pretty: bool,
    output: OutputFormat,
) -> Result<()> {
    let binding = binding(formats)?;
    println!("{}", between(&binding, first, second, unit, pretty, output)?);
    Ok(())
}

/// Resolve both values and render their interval.
pub(crate) fn between(
    binding: &FieldBinding,
    first: &str,
    second: &str,
    unit: TimeUnit,
    pretty: bool,
    output: OutputFormat,
) -> Result<String> {
    let first_ms = resolve_one(binding, "first", first)?;
    let second_ms = resolve_one(binding, "second", second)?;
    let result = interval::compute(first_ms, second_ms, Some(unit), pretty);

    match output {
        OutputFormat::Text => Ok(result.output().to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report(
            first_ms, second_ms, unit, &result,
        ))?),
    }
}

fn resolve_one(binding: &FieldBinding, label: &str, raw: &str) -> Result<i64> {
    binding.resolve(raw).into_result().map_err(|source| {
        lapse_core::Error::UnresolvableTimestamp {
            field: label.to_string(),
            source: Box::new(source),
        }
        .into()
    })
}

fn report<'a>(
    first_ms: i64,
    second_ms: i64,
    unit: TimeUnit,
    result: &'a DurationResult,
) -> IntervalReport<'a> {
    IntervalReport {
        first_ms,
        second_ms,
        seconds: result.seconds,
        unit: unit.as_str(),
        value: result.value.unwrap_or_default(),
        pretty: result.pretty.as_deref(),
    }
}

#[cfg(test)]
#[path = "between_tests.rs"]
mod tests;
