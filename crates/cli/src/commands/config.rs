// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs;
use std::path::Path;

use lapse_core::DurationFilter;

use crate::cli::ConfigCommand;
use crate::config::{default_init_path, template, Config};
use crate::error::{Error, Result};

use super::load_config;

/// Execute a config subcommand.
pub fn run(cmd: ConfigCommand, explicit: Option<&Path>) -> Result<()> {
    match cmd {
        ConfigCommand::Check => {
            let (path, config) = load_config(explicit)?;
            println!("{}", check(&config)?);
            println!("config ok: {}", path.display());
            Ok(())
        }
        ConfigCommand::Init { force } => {
            let path = default_init_path(explicit);
            init(&path, force)?;
            println!("wrote {}", path.display());
            Ok(())
        }
        ConfigCommand::Show => {
            let (path, config) = load_config(explicit)?;
            println!("# {}", path.display());
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

/// Compile the filter and describe it.
pub(crate) fn check(config: &Config) -> Result<String> {
    let filter = DurationFilter::new(&config.filter)?;
    let describe = |binding: &lapse_core::FieldBinding| {
        let formats: Vec<String> = binding.formats().map(|f| f.to_string()).collect();
        format!("{} [{}]", binding.field(), formats.join(", "))
    };

    let unit = match filter.unit() {
        Some(unit) => unit.to_string(),
        None => "rounded seconds (unknown time_unit)".to_string(),
    };
    let zone = filter
        .zone()
        .map_or_else(|| "UTC".to_string(), |z| z.name().to_string());

    Ok(format!(
        "first:  {}\nsecond: {}\noutput: {} ({}, zone {})",
        describe(filter.first()),
        describe(filter.second()),
        filter.output_field(),
        if config.filter.prettify_duration { "HH:MM:SS".to_string() } else { unit },
        zone
    ))
}

/// Write the default configuration to `path`.
pub(crate) fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::ConfigExists(path.to_path_buf()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, template())?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
