// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

use serde_json::{json, Value};

fn events(stdout: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn run_writes_duration_in_seconds() {
    let temp = with_config(UNIX_FILTER);
    let output = lapse(temp.path())
        .arg("run")
        .write_stdin("{\"start\": \"1000.000\", \"end\": \"1005.500\"}\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        events(&output.stdout),
        vec![json!({"start": "1000.000", "end": "1005.500", "duration": 6})]
    );
}

#[test]
fn run_swapped_operands_are_negative() {
    let temp = with_config(UNIX_FILTER);
    let output = lapse(temp.path())
        .arg("run")
        .write_stdin("{\"start\": \"1005.500\", \"end\": \"1000.000\"}\n")
        .output()
        .unwrap();
    assert_eq!(events(&output.stdout)[0]["duration"], json!(-6));
}

#[test]
fn run_milliseconds() {
    let temp = with_config(
        r#"
first_date = ["start", "UNIX_MS"]
second_date = ["end", "UNIX_MS"]
time_unit = "millisecond"
"#,
    );
    let output = lapse(temp.path())
        .arg("run")
        .write_stdin("{\"start\": \"1000\", \"end\": \"4000\"}\n")
        .output()
        .unwrap();
    assert_eq!(events(&output.stdout)[0]["duration"], json!(3000));
}

#[test]
fn run_prettify_and_custom_field() {
    let temp = with_config(
        r#"
field_name = "elapsed"
first_date = ["start", "UNIX"]
second_date = ["end", "UNIX"]
prettify_duration = true
add_tag = ["timed"]
"#,
    );
    let output = lapse(temp.path())
        .arg("run")
        .write_stdin("{\"start\": 0, \"end\": 3661}\n")
        .output()
        .unwrap();
    assert_eq!(
        events(&output.stdout),
        vec![json!({"start": 0, "end": 3661, "elapsed": "01:01:01", "tags": ["timed"]})]
    );
}

#[test]
fn run_passes_failed_events_through() {
    let temp = with_config(UNIX_FILTER);
    let output = lapse(temp.path())
        .args(["run", "--stats"])
        .write_stdin("{\"start\": \"1000\"}\n{\"start\": \"x\", \"end\": \"2\"}\n{\"start\": \"1\", \"end\": \"2\"}\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        events(&output.stdout),
        vec![
            json!({"start": "1000"}),
            json!({"start": "x", "end": "2"}),
            json!({"start": "1", "end": "2", "duration": 1}),
        ]
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("3 events: 1 matched, 2 passed through"));
    assert!(stderr.contains("field not found in event: end"));
}

#[test]
fn run_reads_and_writes_files() {
    let temp = with_config(UNIX_FILTER);
    std::fs::write(
        temp.path().join("in.jsonl"),
        "{\"start\": \"1\", \"end\": \"3\"}\n",
    )
    .unwrap();

    lapse(temp.path())
        .args(["run", "-i", "in.jsonl", "-o", "out.jsonl"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let out = std::fs::read(temp.path().join("out.jsonl")).unwrap();
    assert_eq!(events(&out)[0]["duration"], json!(2));
}

#[test]
fn run_rejects_non_object_lines() {
    let temp = with_config(UNIX_FILTER);
    lapse(temp.path())
        .arg("run")
        .write_stdin("{\"start\": \"1\", \"end\": \"3\"}\n\"just a string\"\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn run_uses_lapse_config_env() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("elsewhere.toml");
    std::fs::write(&config, format!("[filter]\n{UNIX_FILTER}")).unwrap();

    let output = lapse(temp.path())
        .env("LAPSE_CONFIG", &config)
        .arg("run")
        .write_stdin("{\"start\": \"1\", \"end\": \"3\"}\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(events(&output.stdout)[0]["duration"], json!(2));
}

#[test]
fn run_without_config_fails_with_hint() {
    let temp = TempDir::new().unwrap();
    lapse(temp.path())
        .arg("run")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no configuration file found"))
        .stderr(predicate::str::contains("lapse config init"));
}

#[test]
fn run_fails_at_setup_on_bad_pattern() {
    let temp = with_config(
        r#"
first_date = ["start", "yyyy-QQ"]
second_date = ["end", "UNIX"]
"#,
    );
    lapse(temp.path())
        .arg("run")
        .write_stdin("{\"start\": \"1\", \"end\": \"3\"}\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unsupported format 'yyyy-QQ'"));
}
