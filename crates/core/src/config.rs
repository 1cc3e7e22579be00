// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Duration filter options.
//!
//! Field declarations are written as `[name, format, ...]`:
//!
//! ```toml
//! field_name = "elapsed"
//! first_date = ["started_at", "ISO8601", "UNIX"]
//! second_date = ["finished_at", "ISO8601", "UNIX"]
//! time_unit = "minute"
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Output field used when none is configured.
pub const DEFAULT_FIELD_NAME: &str = "duration";

/// Options for one duration filter instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    /// Field the duration is written to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,

    /// Start of the interval: field name followed by formats.
    #[serde(default)]
    pub first_date: Vec<String>,

    /// End of the interval: field name followed by formats.
    #[serde(default)]
    pub second_date: Vec<String>,

    /// IANA zone for timestamps that carry no offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// Unit of the numeric output. Kept as text so that unknown units
    /// degrade to rounded seconds instead of failing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_unit: Option<String>,

    #[serde(default)]
    pub prettify_duration: bool,

    /// Tags appended to the event after a successful match.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add_tag: Vec<String>,

    /// Fields set on the event after a successful match.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub add_field: BTreeMap<String, String>,
}

impl FilterConfig {
    /// The configured output field, or [`DEFAULT_FIELD_NAME`].
    pub fn output_field(&self) -> &str {
        self.field_name.as_deref().unwrap_or(DEFAULT_FIELD_NAME)
    }

    /// Checks the shape of the declarations without compiling any format.
    pub fn validate(&self) -> Result<()> {
        if self.output_field().is_empty() {
            return Err(Error::Configuration("field_name cannot be empty".into()));
        }
        for (label, declaration) in [("first_date", &self.first_date), ("second_date", &self.second_date)] {
            if declaration.len() < 2 {
                return Err(Error::Configuration(format!(
                    "{label} must name a field and at least one format\n  hint: {label} = [\"<field>\", \"ISO8601\"]"
                )));
            }
        }
        if self.add_tag.iter().any(String::is_empty) {
            return Err(Error::Configuration("add_tag entries cannot be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
