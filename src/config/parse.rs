//! Declaration file parsing and discovery

use crate::config::types::{CommandDecl, Config};
use crate::error::{ConfigError, ConfigResult, FlagtreeError};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default declaration file names to search for
pub const CONFIG_FILE_NAMES: &[&str] = &["flagtree.yml", "flagtree.yaml"];

/// Find the declaration file by searching current and parent directories
pub fn find_config_file() -> ConfigResult<PathBuf> {
    find_config_file_from(env::current_dir().map_err(|e| {
        ConfigError::Invalid(format!("Failed to get current directory: {}", e))
    })?)
}

/// Find the declaration file starting from a specific directory
pub fn find_config_file_from(start_dir: PathBuf) -> ConfigResult<PathBuf> {
    let mut current_dir = start_dir;
    let mut searched_paths = Vec::new();

    loop {
        for file_name in CONFIG_FILE_NAMES {
            let config_path = current_dir.join(file_name);
            searched_paths.push(config_path.display().to_string());

            if config_path.is_file() {
                debug!(path = %config_path.display(), "found declaration file");
                return Ok(config_path);
            }
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => return Err(ConfigError::NotFound(searched_paths.join(", "))),
        }
    }
}

/// Parse a declaration file from a path
pub fn parse_config_file(path: &Path) -> Result<Config, FlagtreeError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ConfigError::Invalid(format!("Failed to read {}: {}", path.display(), e)))?;

    parse_config(&contents, Some(path))
}

/// Parse a declaration from a string.
///
/// `include` directives are resolved relative to `config_path`; without a
/// path they are left untouched.
pub fn parse_config(yaml: &str, config_path: Option<&Path>) -> Result<Config, FlagtreeError> {
    let mut config: Config = serde_yaml::from_str(yaml)?;

    if let Some(path) = config_path {
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let root = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        let mut stack = vec![root];
        process_includes(&mut config.commands, base_dir, &mut stack)?;
    }

    Ok(config)
}

/// Parse with automatic file discovery
pub fn parse_config_auto() -> Result<(Config, PathBuf), FlagtreeError> {
    let config_path = find_config_file()?;
    let config = parse_config_file(&config_path)?;
    Ok((config, config_path))
}

fn process_includes(
    commands: &mut [CommandDecl],
    base_dir: &Path,
    stack: &mut Vec<PathBuf>,
) -> ConfigResult<()> {
    for command in commands.iter_mut() {
        resolve_include(command, base_dir, stack)?;
    }
    Ok(())
}

/// Replace an including command with the file's content.
/// The name always comes from the including declaration.
fn resolve_include(
    command: &mut CommandDecl,
    base_dir: &Path,
    stack: &mut Vec<PathBuf>,
) -> ConfigResult<()> {
    let Some(include) = command.include.take() else {
        return process_includes(&mut command.commands, base_dir, stack);
    };

    // Canonical paths so `sub/../a.yml` and symlinks compare equal
    let joined = base_dir.join(include);
    let path = fs::canonicalize(&joined).map_err(|e| ConfigError::IncludeFile {
        path: joined,
        error: e.to_string(),
    })?;
    if stack.contains(&path) {
        return Err(ConfigError::IncludeFile {
            path,
            error: "circular include".to_string(),
        });
    }

    debug!(command = %command.name, path = %path.display(), "including command");
    let mut included = load_included_command(&path)?;
    included.name = command.name.clone();

    let nested_dir = path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
    stack.push(path);
    resolve_include(&mut included, &nested_dir, stack)?;
    stack.pop();

    *command = included;
    Ok(())
}

/// Load a command from an included file
fn load_included_command(path: &Path) -> ConfigResult<CommandDecl> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::IncludeFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    serde_yaml::from_str(&contents).map_err(|e| ConfigError::IncludeFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}
