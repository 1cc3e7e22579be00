// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use serde_json::{json, Value};

fn unix_binding() -> FieldBinding {
    binding(&FormatArgs {
        formats: vec!["ISO8601".into(), "UNIX".into()],
        timezone: None,
    })
    .unwrap()
}

fn values(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_text_output_reports_each_value() {
    let (text, failed) = resolve_values(
        &unix_binding(),
        &values(&["1970-01-01T00:00:01Z", "bad", "2.5"]),
        OutputFormat::Text,
    )
    .unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "1970-01-01T00:00:01Z\t1000");
    assert!(lines[1].starts_with("bad\terror: "));
    assert_eq!(lines[2], "2.5\t2500");
    assert_eq!(failed, 1);
}

#[test]
fn test_json_output() {
    let (text, failed) =
        resolve_values(&unix_binding(), &values(&["2.5", "bad"]), OutputFormat::Json).unwrap();
    let rows: Value = serde_json::from_str(&text).unwrap();

    assert_eq!(rows[0], json!({"value": "2.5", "epoch_ms": 2500}));
    assert_eq!(rows[1]["value"], json!("bad"));
    assert!(rows[1]["error"].is_string());
    assert!(rows[1].get("epoch_ms").is_none());
    assert_eq!(failed, 1);
}

#[test]
fn test_all_resolved() {
    let (_, failed) =
        resolve_values(&unix_binding(), &values(&["1", "2"]), OutputFormat::Text).unwrap();
    assert_eq!(failed, 0);
}
