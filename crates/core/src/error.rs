// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for lapse-core operations.
//!
//! Setup-time errors ([`Error::Configuration`], [`Error::UnsupportedFormat`]) abort filter
//! construction. Per-event errors ([`Error::MissingField`], [`Error::UnresolvableTimestamp`])
//! are caught at the filter boundary. [`Error::MalformedTimestamp`] is recovered from inside
//! the field resolver by trying the next format.

use thiserror::Error;

/// All possible errors that can occur in lapse-core operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("unsupported format '{token}': {reason}")]
    UnsupportedFormat { token: String, reason: String },

    #[error("malformed timestamp '{value}' for format '{format}': {reason}")]
    MalformedTimestamp {
        value: String,
        format: String,
        reason: String,
    },

    #[error("field not found in event: {0}")]
    MissingField(String),

    #[error("unable to resolve timestamp in field '{field}'\n  caused by: {source}")]
    UnresolvableTimestamp {
        field: String,
        #[source]
        source: Box<Error>,
    },

    #[error("unknown time zone '{0}'\n  hint: use an IANA name such as 'UTC' or 'Europe/Paris'")]
    UnknownTimeZone(String),

    #[error("json error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}

impl Error {
    /// Builds a [`Error::MalformedTimestamp`] for `value` tried against `format`.
    pub(crate) fn malformed(value: &str, format: &str, reason: impl Into<String>) -> Self {
        Error::MalformedTimestamp {
            value: value.to_string(),
            format: format.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns true for errors that must be reported before any event is processed.
    pub fn is_setup_error(&self) -> bool {
        matches!(
            self,
            Error::Configuration(_) | Error::UnsupportedFormat { .. } | Error::UnknownTimeZone(_)
        )
    }
}

/// A specialized Result type for lapse-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
