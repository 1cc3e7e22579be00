// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration file management.
//!
//! The filter is configured in a TOML file with a `[filter]` table. The file
//! is looked up in order:
//! - the `--config` argument
//! - `LAPSE_CONFIG`
//! - `./lapse.toml`
//! - `<config dir>/lapse/lapse.toml`

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use lapse_core::FilterConfig;

use crate::env;
use crate::error::{Error, Result};

const CONFIG_FILE_NAME: &str = "lapse.toml";
const CONFIG_DIR_NAME: &str = "lapse";

/// Contents of `lapse.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Duration filter options.
    #[serde(default)]
    pub filter: FilterConfig,
}

impl Config {
    /// Load configuration from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::parse(&content).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Default file written by `lapse config init`.
pub fn template() -> &'static str {
    r#"# lapse configuration

[filter]
# Field the duration is written to (default "duration").
# field_name = "duration"

# [field, format, ...]. Formats are tried in order until one matches:
# ISO8601, UNIX, UNIX_MS, TAI64N, or a pattern such as "yyyy-MM-dd HH:mm:ss".
first_date = ["started_at", "ISO8601", "UNIX"]
second_date = ["finished_at", "ISO8601", "UNIX"]

# IANA zone for timestamps without an offset.
# timezone = "UTC"

# millisecond, second, minute, hour, day, week or year (default second).
# time_unit = "second"

# Write HH:MM:SS instead of a number.
# prettify_duration = false

# Applied only when a duration was written.
# add_tag = ["timed"]
# add_field = { source = "lapse" }
"#
}

/// The per-user config file location.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Resolve which config file to use.
///
/// An explicit path is returned as-is, even when it does not exist, so that
/// loading reports it. Otherwise the first existing candidate wins.
pub fn find_config(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = env::config_path() {
        return Ok(path);
    }
    search_paths()
        .into_iter()
        .find(|p| p.is_file())
        .ok_or(Error::ConfigNotFound)
}

/// Where `lapse config init` writes when no path is given.
pub fn default_init_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .or_else(env::config_path)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

/// Implicit lookup candidates, in order.
fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    paths.extend(user_config_path());
    paths
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
