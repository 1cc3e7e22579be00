// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// A `lapse` command isolated from the caller's environment: no
/// `LAPSE_CONFIG`, no user config directory, logs at the default level.
pub fn lapse(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("lapse");
    cmd.env_remove("LAPSE_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("LAPSE_TIMINGS")
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .current_dir(home);
    cmd
}

/// Temp directory holding a `lapse.toml` with the given `[filter]` body.
pub fn with_config(filter: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("lapse.toml"),
        format!("[filter]\n{filter}\n"),
    )
    .unwrap();
    temp
}

pub const UNIX_FILTER: &str = r#"
first_date = ["start", "UNIX"]
second_date = ["end", "UNIX"]
"#;
