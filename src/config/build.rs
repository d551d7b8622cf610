//! Turning a declaration into a command tree

use crate::config::schema::validate_config;
use crate::config::types::{CommandDecl, Config, OptionDecl};
use crate::error::Result;
use crate::model::{App, Command, Flag, Scope};
use crate::value::{Value, ValueKind};
use tracing::debug;

/// Validate a declaration and build the [`App`] it describes
pub fn build_app(config: &Config) -> Result<App> {
    validate_config(config)?;

    let mut app = App::new(
        config.name.clone().unwrap_or_default(),
        config.description.clone().unwrap_or_default(),
    )
    .with_version(config.version.clone().unwrap_or_default());

    for option in &config.options {
        app.add_option(build_flag(option)?);
    }
    if config.help {
        app.add_option(Flag::help());
    }
    for command in &config.commands {
        app.add_command(build_command(command)?);
    }

    debug!(
        options = app.options().len(),
        commands = app.commands().len(),
        "built app from declaration"
    );
    Ok(app)
}

fn build_command(decl: &CommandDecl) -> Result<Command> {
    let mut command = Command::new(
        decl.name.clone(),
        decl.description.clone().unwrap_or_default(),
    );

    for option in &decl.options {
        command.add_option(build_flag(option)?);
    }
    for sub in &decl.commands {
        command.add_command(build_command(sub)?);
    }

    Ok(command)
}

fn build_flag(decl: &OptionDecl) -> Result<Flag> {
    let kind: ValueKind = decl.option_type.parse()?;
    let value = match &decl.default {
        Some(text) => Value::with_default_text(kind, text)?,
        None => Value::zero(kind),
    };

    Ok(Flag::with_value(
        decl.long.as_deref().unwrap_or(""),
        decl.short.as_deref().and_then(|s| s.chars().next()),
        decl.description.as_deref().unwrap_or(""),
        value,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use crate::error::{ConfigError, FlagtreeError};

    #[test]
    fn test_build_app() {
        let yaml = r#"
name: AppName
version: 1.0.0
description: Application description.
help: true
options:
  - long: bool
    short: b
    type: bool
    description: Bool value
commands:
  - name: cmd
    description: This is the description
    options:
      - long: count
        type: int32
        default: 3
"#;
        let app = build_app(&parse_config(yaml, None).unwrap()).unwrap();

        assert_eq!(app.name(), "AppName");
        assert_eq!(app.version(), "1.0.0");
        assert_eq!(app.options().len(), 2);
        assert!(app.options()[1].is_help());

        let cmd = app.command("cmd").unwrap();
        assert_eq!(cmd.description(), "This is the description");
        assert_eq!(cmd.option("count").unwrap().get::<i32>().unwrap(), 3);
    }

    #[test]
    fn test_build_short_only_option() {
        let yaml = "options:\n  - short: z\n    type: float64\n    default: 1.5\n";
        let app = build_app(&parse_config(yaml, None).unwrap()).unwrap();

        let z = app.option_by_short('z').unwrap();
        assert_eq!(z.long(), None);
        assert_eq!(z.get::<f64>().unwrap(), 1.5);
    }

    #[test]
    fn test_build_rejects_invalid_declaration() {
        let yaml = "commands:\n  - name: a\n  - name: a\n";
        let result = build_app(&parse_config(yaml, None).unwrap());
        assert!(matches!(
            result,
            Err(FlagtreeError::Config(ConfigError::DuplicateCommand(_)))
        ));
    }
}
