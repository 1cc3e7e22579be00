// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lapse - compute durations between timestamp fields of structured events.
//!
//! This crate provides the `lapse` command line tool on top of
//! [`lapse_core`]: configuration files, JSON Lines event I/O and logging.
//!
//! # Main Components
//!
//! - [`Cli`] - command line definition
//! - [`Config`] - `lapse.toml` contents and lookup
//! - [`Error`] - error types for all operations

mod cli;
pub mod colors;
mod commands;
pub mod config;
pub mod env;
pub mod error;
pub mod help;
pub mod logging;
pub mod timings;

pub use cli::{Cli, Command, ConfigCommand, FormatArgs, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let config = cli.config.as_deref();
    match cli.command {
        Command::Run {
            input,
            output,
            stats,
        } => commands::run::run(config, &input, &output, stats),
        Command::Resolve {
            formats,
            values,
            output,
        } => commands::resolve::run(&formats, &values, output),
        Command::Between {
            formats,
            first,
            second,
            unit,
            pretty,
            output,
        } => commands::between::run(&formats, &first, &second, unit, pretty, output),
        Command::Config(cmd) => commands::config::run(cmd, config),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "lapse", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
