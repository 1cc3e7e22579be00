// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod between;
pub mod config;
pub mod resolve;
pub mod run;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use lapse_core::{parse_time_zone, FieldBinding, FormatToken};

use crate::cli::FormatArgs;
use crate::config::{find_config, Config};
use crate::error::{Error, Result};

/// Field label used for values given on the command line.
const ARGUMENT_FIELD: &str = "argument";

/// Compile the `-f`/`-z` arguments into a binding.
pub(crate) fn binding(args: &FormatArgs) -> Result<FieldBinding> {
    let zone = args.timezone.as_deref().map(parse_time_zone).transpose()?;
    let tokens: Vec<FormatToken> = args
        .formats
        .iter()
        .map(|f| FormatToken::from(f.as_str()))
        .collect();
    Ok(FieldBinding::new(ARGUMENT_FIELD, &tokens, zone)?)
}

/// Locate and load the configuration file.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<(std::path::PathBuf, Config)> {
    let path = find_config(explicit)?;
    tracing::debug!("loading config from {}", path.display());
    let config = Config::load(&path)?;
    Ok((path, config))
}

/// Open an input path, `-` meaning stdin.
pub(crate) fn open_input(path: &str) -> Result<Box<dyn BufRead>> {
    if path == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(path).map_err(|e| {
        Error::Io(io::Error::new(e.kind(), format!("cannot open {}: {}", path, e)))
    })?;
    Ok(Box::new(BufReader::new(file)))
}

/// Open an output path, `-` meaning stdout.
pub(crate) fn open_output(path: &str) -> Result<Box<dyn Write>> {
    if path == "-" {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    let file = File::create(path).map_err(|e| {
        Error::Io(io::Error::new(e.kind(), format!("cannot create {}: {}", path, e)))
    })?;
    Ok(Box::new(BufWriter::new(file)))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
