// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The event abstraction the duration filter reads from and writes to.
//!
//! Events are JSON objects in practice; the [`Event`] trait keeps the filter
//! independent of how a host pipeline stores them.

use serde_json::{Map, Value};

/// Field that collects tags added on match.
pub const TAGS_FIELD: &str = "tags";

/// A raw field value as handed to the field resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// A single scalar value.
    Single(String),
    /// A sequence of values, in source order.
    Many(Vec<String>),
}

impl RawValue {
    /// Returns the first value in source order.
    pub fn first(&self) -> Option<&str> {
        match self {
            RawValue::Single(s) => Some(s),
            RawValue::Many(values) => values.first().map(String::as_str),
        }
    }

    /// Returns every value in source order.
    pub fn values(&self) -> Vec<&str> {
        match self {
            RawValue::Single(s) => vec![s.as_str()],
            RawValue::Many(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

/// A structured event record.
pub trait Event {
    /// Returns true if the event carries a non-null value for `field`.
    fn has(&self, field: &str) -> bool;

    /// Returns the raw value(s) of `field`.
    fn get(&self, field: &str) -> Option<RawValue>;

    /// Sets `field`, replacing any existing value.
    fn set(&mut self, field: &str, value: Value);

    /// Appends `tag` to the event's tags unless already present.
    fn add_tag(&mut self, tag: &str);
}

impl Event for Map<String, Value> {
    fn has(&self, field: &str) -> bool {
        self.get(field).is_some_and(|v| !v.is_null())
    }

    fn get(&self, field: &str) -> Option<RawValue> {
        match Map::get(self, field)? {
            Value::Null => None,
            Value::Array(items) => Some(RawValue::Many(items.iter().map(scalar_text).collect())),
            other => Some(RawValue::Single(scalar_text(other))),
        }
    }

    fn set(&mut self, field: &str, value: Value) {
        self.insert(field.to_string(), value);
    }

    fn add_tag(&mut self, tag: &str) {
        let tags = self
            .entry(TAGS_FIELD)
            .or_insert_with(|| Value::Array(Vec::new()));
        match tags {
            Value::Array(items) => {
                if !items.iter().any(|t| t.as_str() == Some(tag)) {
                    items.push(Value::String(tag.to_string()));
                }
            }
            Value::String(existing) if existing == tag => {}
            Value::Null => *tags = Value::Array(vec![Value::String(tag.to_string())]),
            other => {
                let previous = std::mem::take(other);
                *other = Value::Array(vec![previous, Value::String(tag.to_string())]);
            }
        }
    }
}

/// Renders a JSON value as timestamp text. Strings are taken verbatim,
/// numbers in their decimal form, anything else as JSON.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
