// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use thiserror::Error;

/// All possible errors that can occur in the lapse CLI.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] lapse_core::Error),

    #[error("no configuration file found\n  hint: pass --config <path>, set LAPSE_CONFIG, or run 'lapse config init'")]
    ConfigNotFound,

    #[error("config file already exists: {}\n  hint: use --force to overwrite it", .0.display())]
    ConfigExists(PathBuf),

    #[error("line {line}: {reason}")]
    ParseLineError { line: usize, reason: String },

    #[error("{failed} of {total} values could not be resolved")]
    Unresolved { failed: usize, total: usize },

    #[error("{0}")]
    InvalidInput(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// A specialized Result type for lapse CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::Config(e.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
