//! Common test utilities

use flagtree::{App, Command, Flag};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory with a flagtree.yml file
pub fn create_test_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("flagtree.yml");
    fs::write(&config_path, content).unwrap();
    (temp_dir, config_path)
}

/// Write an extra file next to a test declaration
pub fn write_sibling(temp_dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = temp_dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Root `--bool/-b` option and a single `cmd` command
pub fn main_help_app() -> App {
    App::new("AppName", "Application description.")
        .with_version("1.0.0")
        .with_options([Flag::bool("bool", Some('b'), "Bool value", false)])
        .with_commands([Command::new("cmd", "This is the description")])
}

/// Three nested commands, the middle one carrying options
pub fn nested_help_app() -> App {
    let cmd3 = Command::new("cmd-3", "This is the description of cmd-3");
    let cmd2 = Command::new("cmd-2", "This is the description of cmd-2")
        .with_options([
            Flag::string("str", Some('s'), "String option example", "default"),
            Flag::bool("bool", Some('b'), "Bool option example", false),
        ])
        .with_commands([cmd3]);
    let cmd1 = Command::new("cmd-1", "This is the description of cmd-1").with_commands([cmd2]);

    App::new("AppName", "Application description.")
        .with_version("1.0.0")
        .with_options([Flag::bool("bool", Some('b'), "Bool value", false)])
        .with_commands([cmd1])
}
