// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use lapse_core::TimeUnit;

pub use args::FormatArgs;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Parse a time unit name.
fn time_unit(s: &str) -> Result<TimeUnit, String> {
    s.parse::<TimeUnit>().map_err(|_| {
        format!("valid units are: {}", TimeUnit::valid_names())
    })
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "lapse")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Compute durations between timestamp fields of structured events")]
#[command(
    long_about = "Compute durations between timestamp fields of structured events.\n\n\
    Each event names a start and an end timestamp in any of several formats; \
    lapse resolves both and writes the interval into the event."
)]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Configuration file (default: $LAPSE_CONFIG, ./lapse.toml, then the user config dir)
    #[arg(short = 'c', long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Append diagnostic logs to a file instead of stderr
    #[arg(long, global = true, value_name = "path")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print version
    #[arg(short = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Filter JSON Lines events, writing the duration into each
    #[command(after_help = colors::examples("\
Examples:
  lapse run < events.jsonl                 Filter stdin to stdout
  lapse run -c lapse.toml -i in.jsonl      Read events from a file
  lapse run -o out.jsonl --stats           Write to a file, print a summary"))]
    Run {
        /// Input file ("-" for stdin)
        #[arg(short, long, default_value = "-")]
        input: String,

        /// Output file ("-" for stdout)
        #[arg(short, long, default_value = "-")]
        output: String,

        /// Print a summary to stderr when done
        #[arg(long)]
        stats: bool,
    },

    /// Resolve timestamps to epoch milliseconds
    #[command(after_help = format!("{}\n\n{}", colors::examples("\
Examples:
  lapse resolve -f UNIX 1700000000.5
  lapse resolve -f ISO8601 -f UNIX_MS 2024-03-05T10:20:30Z 1709634030000
  lapse resolve -f \"dd/MMM/yyyy:HH:mm:ss\" -z Europe/Paris 05/Mar/2024:10:20:30"), help::formats()))]
    Resolve {
        #[command(flatten)]
        formats: FormatArgs,

        /// Raw timestamp values
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Compute the duration between two timestamps
    #[command(after_help = format!("{}\n\n{}", colors::examples("\
Examples:
  lapse between -f UNIX 1000 1005.5                   Prints 6
  lapse between -f UNIX_MS --unit millisecond 1000 4000
  lapse between -f ISO8601 --pretty 2024-03-05T10:00:00Z 2024-03-05T11:01:01Z"), help::formats()))]
    Between {
        #[command(flatten)]
        formats: FormatArgs,

        /// Start timestamp
        #[arg(allow_negative_numbers = true)]
        first: String,

        /// End timestamp
        #[arg(allow_negative_numbers = true)]
        second: String,

        /// Unit of the result
        #[arg(short, long, value_parser = time_unit, default_value = "second")]
        unit: TimeUnit,

        /// Print HH:MM:SS instead of a number
        #[arg(long)]
        pretty: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  lapse completion bash > ~/.local/share/bash-completion/completions/lapse
  lapse completion zsh > ~/.zfunc/_lapse
  lapse completion fish > ~/.config/fish/completions/lapse.fish")
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Validate the configuration and compile its formats
    Check,

    /// Write a commented default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the resolved configuration path and contents
    Show,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
