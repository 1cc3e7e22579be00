// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use lapse::Cli;

fn main() {
    let cli = Cli::parse();
    lapse::logging::init(cli.log_file.as_deref(), cli.verbose);
    if let Err(e) = lapse::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
