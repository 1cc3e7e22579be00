// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Field resolution: one field name, an ordered list of compiled parsers.
//!
//! Formats are tried in declared order. The first success wins and later
//! formats are never tried. When every format fails only the most recent
//! error is kept.

use chrono_tz::Tz;

use crate::error::{Error, Result};
use crate::format::{FormatToken, TimestampParser};

/// Result of resolving one raw value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// Epoch milliseconds from the first format that matched.
    Resolved(i64),
    /// The error from the last format tried.
    Failed(Error),
}

impl ParseOutcome {
    pub fn is_resolved(&self) -> bool {
        matches!(self, ParseOutcome::Resolved(_))
    }

    /// Converts into a `Result`, keeping the last error on failure.
    pub fn into_result(self) -> Result<i64> {
        match self {
            ParseOutcome::Resolved(ms) => Ok(ms),
            ParseOutcome::Failed(e) => Err(e),
        }
    }
}

/// A field name paired with its compiled format list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding {
    field: String,
    parsers: Vec<TimestampParser>,
}

impl FieldBinding {
    /// Compiles `formats` for `field`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the field name is empty or no format
    /// is given, and [`Error::UnsupportedFormat`] if a pattern fails to compile.
    pub fn new(field: &str, formats: &[FormatToken], zone: Option<Tz>) -> Result<Self> {
        if field.is_empty() {
            return Err(Error::Configuration("field name cannot be empty".into()));
        }
        if formats.is_empty() {
            return Err(Error::Configuration(format!(
                "field '{field}' needs at least one format\n  hint: use one of {} or a date pattern",
                FormatToken::keywords()
            )));
        }

        tracing::info!("generating date parser for field {field}: {formats:?}");
        let parsers = formats
            .iter()
            .map(|token| TimestampParser::compile(token, zone))
            .collect::<Result<Vec<_>>>()?;

        Ok(FieldBinding {
            field: field.to_string(),
            parsers,
        })
    }

    /// Builds a binding from a `[name, format, ...]` declaration.
    ///
    /// `label` names the declaration in error messages (e.g. `first_date`).
    pub fn from_declaration(label: &str, declaration: &[String], zone: Option<Tz>) -> Result<Self> {
        match declaration {
            [] => Err(Error::Configuration(format!(
                "{label} is required\n  hint: {label} = [\"<field>\", \"<format>\", ...]"
            ))),
            [field] => Err(Error::Configuration(format!(
                "{label} '{field}' declares no format\n  hint: {label} = [\"{field}\", \"ISO8601\"]"
            ))),
            [field, formats @ ..] => {
                let tokens: Vec<FormatToken> =
                    formats.iter().map(|f| FormatToken::from(f.as_str())).collect();
                FieldBinding::new(field, &tokens, zone)
            }
        }
    }

    /// The event field this binding reads.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The declared formats, in order.
    pub fn formats(&self) -> impl Iterator<Item = &FormatToken> {
        self.parsers.iter().map(TimestampParser::token)
    }

    /// Resolves one raw value against the format list.
    pub fn resolve(&self, raw: &str) -> ParseOutcome {
        let mut last_error = None;
        for parser in &self.parsers {
            match parser.parse(raw) {
                Ok(ms) => {
                    tracing::debug!("{}: '{raw}' resolved as {} to {ms}", self.field, parser.token());
                    return ParseOutcome::Resolved(ms);
                }
                Err(e) => last_error = Some(e),
            }
        }
        // new() guarantees at least one parser
        ParseOutcome::Failed(last_error.unwrap_or_else(|| {
            Error::Configuration(format!("field '{}' has no formats", self.field))
        }))
    }

    /// Resolves every value in source order.
    ///
    /// A failing element is logged and reported in place; it does not stop
    /// the remaining elements from being resolved.
    pub fn resolve_each<'a, I>(&self, values: I) -> Vec<ParseOutcome>
    where
        I: IntoIterator<Item = &'a str>,
    {
        values
            .into_iter()
            .map(|raw| {
                let outcome = self.resolve(raw);
                if let ParseOutcome::Failed(e) = &outcome {
                    tracing::warn!("{}: skipping '{raw}': {e}", self.field);
                }
                outcome
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
