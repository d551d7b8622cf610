//! Declaration validation
//!
//! This module checks a parsed declaration before it is built into an
//! [`App`](crate::model::App).

use crate::config::types::{CommandDecl, Config, OptionDecl};
use crate::error::{ConfigError, ConfigResult};
use crate::parser::{is_option, is_valid_option_name};
use crate::value::{Value, ValueKind};
use std::collections::HashSet;

/// Validate a complete declaration
pub fn validate_config(config: &Config) -> ConfigResult<()> {
    validate_options(&config.options)?;
    validate_commands(&config.commands)
}

/// Validate the commands of one scope and everything below them
fn validate_commands(commands: &[CommandDecl]) -> ConfigResult<()> {
    let mut names = HashSet::new();

    for command in commands {
        validate_command(command)?;

        if !names.insert(command.name.as_str()) {
            return Err(ConfigError::DuplicateCommand(command.name.clone()));
        }
    }

    Ok(())
}

/// Validate a single command
pub fn validate_command(command: &CommandDecl) -> ConfigResult<()> {
    if command.name.is_empty() {
        return Err(ConfigError::Invalid("Command name cannot be empty".to_string()));
    }
    if is_option(&command.name) {
        return Err(ConfigError::Invalid(format!(
            "Command name '{}' looks like an option",
            command.name
        )));
    }
    if command.name.contains(char::is_whitespace) {
        return Err(ConfigError::Invalid(format!(
            "Command name '{}' contains whitespace",
            command.name
        )));
    }

    validate_options(&command.options)?;
    validate_commands(&command.commands)
}

/// Validate the options of one scope
fn validate_options(options: &[OptionDecl]) -> ConfigResult<()> {
    let mut longs = HashSet::new();

    for option in options {
        validate_option(option)?;

        if let Some(long) = &option.long {
            if !longs.insert(long.as_str()) {
                return Err(ConfigError::DuplicateOption(long.clone()));
            }
        }
    }

    Ok(())
}

/// Validate a single option
pub fn validate_option(option: &OptionDecl) -> ConfigResult<()> {
    let invalid = |reason: String| ConfigError::InvalidOption {
        name: option.display_name(),
        reason,
    };

    if option.long.is_none() && option.short.is_none() {
        return Err(invalid("an option needs a long or a short name".to_string()));
    }

    if let Some(long) = &option.long {
        if !is_valid_option_name(long) {
            return Err(invalid(format!("'{}' is not a valid long name", long)));
        }
    }

    if let Some(short) = &option.short {
        let mut chars = short.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphanumeric() => {}
            _ => {
                return Err(invalid(format!(
                    "short name '{}' must be a single letter or digit",
                    short
                )))
            }
        }
    }

    let kind: ValueKind = option
        .option_type
        .parse()
        .map_err(|e| invalid(format!("{}", e)))?;

    if let Some(default) = &option.default {
        Value::with_default_text(kind, default).map_err(|e| invalid(format!("bad default: {}", e)))?;
    }

    Ok(())
}
