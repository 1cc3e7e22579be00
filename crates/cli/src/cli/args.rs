// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` by the commands that
//! resolve timestamps directly from the command line.

use clap::Args;

/// Format list and time zone for ad-hoc resolution.
#[derive(Args, Clone, Debug, Default)]
pub struct FormatArgs {
    /// Timestamp format, tried in the order given (repeatable)
    #[arg(
        short = 'f',
        long = "format",
        value_name = "FORMAT",
        required = true,
        value_parser = super::non_empty_string
    )]
    pub formats: Vec<String>,

    /// IANA time zone for timestamps without an offset
    #[arg(short = 'z', long, value_name = "ZONE")]
    pub timezone: Option<String>,
}
