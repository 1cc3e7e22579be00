// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The duration filter.
//!
//! Each event goes through a fixed sequence: resolve the first field, resolve
//! the second field, compute the interval, write it, then apply the on-match
//! decorations (`add_tag`, `add_field`). A failure in either resolution step
//! ends processing for that event and nothing is written.

use std::collections::BTreeMap;

use chrono_tz::Tz;
use serde_json::Value;

use crate::config::FilterConfig;
use crate::error::{Error, Result};
use crate::event::Event;
use crate::format::parse_time_zone;
use crate::interval::{self, DurationResult, DurationValue, TimeUnit};
use crate::resolve::FieldBinding;

/// What happened to one event.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome {
    /// The duration was written and the event marked as matched.
    Matched(DurationValue),
    /// The event was left unchanged because of a per-event error.
    PassedThrough(Error),
}

impl FilterOutcome {
    pub fn is_matched(&self) -> bool {
        matches!(self, FilterOutcome::Matched(_))
    }
}

/// A configured duration filter.
///
/// Construction compiles every declared format; afterwards the filter is
/// read-only and can be shared across threads.
#[derive(Debug, Clone)]
pub struct DurationFilter {
    output_field: String,
    first: FieldBinding,
    second: FieldBinding,
    zone: Option<Tz>,
    unit: Option<TimeUnit>,
    prettify: bool,
    add_tag: Vec<String>,
    add_field: BTreeMap<String, String>,
}

impl DurationFilter {
    /// Validates `config` and compiles its format declarations.
    ///
    /// An unrecognized `time_unit` is not fatal: it is logged and the output
    /// falls back to rounded seconds.
    ///
    /// # Errors
    ///
    /// Returns a setup error ([`Error::is_setup_error`]) for incomplete
    /// declarations, uncompilable formats and unknown time zones.
    pub fn new(config: &FilterConfig) -> Result<Self> {
        config.validate()?;

        let zone = config.timezone.as_deref().map(parse_time_zone).transpose()?;
        let first = FieldBinding::from_declaration("first_date", &config.first_date, zone)?;
        let second = FieldBinding::from_declaration("second_date", &config.second_date, zone)?;

        let unit = match config.time_unit.as_deref() {
            None => Some(TimeUnit::default()),
            Some(name) => match name.parse::<TimeUnit>() {
                Ok(unit) => Some(unit),
                Err(e) => {
                    tracing::warn!("{e}; writing rounded seconds");
                    None
                }
            },
        };

        Ok(DurationFilter {
            output_field: config.output_field().to_string(),
            first,
            second,
            zone,
            unit,
            prettify: config.prettify_duration,
            add_tag: config.add_tag.clone(),
            add_field: config.add_field.clone(),
        })
    }

    pub fn output_field(&self) -> &str {
        &self.output_field
    }

    pub fn first(&self) -> &FieldBinding {
        &self.first
    }

    pub fn second(&self) -> &FieldBinding {
        &self.second
    }

    pub fn zone(&self) -> Option<Tz> {
        self.zone
    }

    /// The output unit. `None` when the configured unit was not recognized.
    pub fn unit(&self) -> Option<TimeUnit> {
        self.unit
    }

    /// Computes the interval for `event` without modifying it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] if either field is absent and
    /// [`Error::UnresolvableTimestamp`] if no declared format matches.
    pub fn compute(&self, event: &impl Event) -> Result<DurationResult> {
        let first = resolve_field(&self.first, event)?;
        let second = resolve_field(&self.second, event)?;
        Ok(interval::compute(first, second, self.unit, self.prettify))
    }

    /// Writes the duration into `event` and applies the on-match decorations.
    ///
    /// On error the event is left unchanged.
    pub fn try_filter(&self, event: &mut impl Event) -> Result<DurationValue> {
        let value = self.compute(&*event)?.output();
        event.set(&self.output_field, value.to_json());
        for tag in &self.add_tag {
            event.add_tag(tag);
        }
        for (field, text) in &self.add_field {
            event.set(field, Value::String(text.clone()));
        }
        Ok(value)
    }

    /// Processes one event. Per-event errors are logged and the event
    /// passes through unchanged; they never escape this boundary.
    pub fn filter(&self, event: &mut impl Event) -> FilterOutcome {
        match self.try_filter(event) {
            Ok(value) => {
                tracing::debug!("{} = {value}", self.output_field);
                FilterOutcome::Matched(value)
            }
            Err(e) => {
                tracing::warn!("passing event through: {e}");
                FilterOutcome::PassedThrough(e)
            }
        }
    }
}

/// Resolves the single timestamp a binding points at.
///
/// A multi-valued field contributes its first element.
fn resolve_field(binding: &FieldBinding, event: &impl Event) -> Result<i64> {
    let field = binding.field();
    let raw = event
        .get(field)
        .ok_or_else(|| Error::MissingField(field.to_string()))?;
    let value = raw
        .first()
        .ok_or_else(|| Error::MissingField(field.to_string()))?;

    binding
        .resolve(value)
        .into_result()
        .map_err(|source| Error::UnresolvableTimestamp {
            field: field.to_string(),
            source: Box::new(source),
        })
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
