//! Flagtree - command trees, typed options and contextual help
//!
//! Flagtree resolves a flat command-line argument list against a tree of
//! commands. Each level of the tree carries its own typed options, packed
//! short flags are expanded, boolean options may take an explicit
//! `true`/`false`, and help is rendered for the command chain a user named.
//! Trees are built in code or declared in a `flagtree.yml` file.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod help;
pub mod model;
pub mod parser;
pub mod value;

// Re-export commonly used types
pub use error::{ConfigError, FlagtreeError, ParseError, Result, ValueError};
pub use model::{App, Command, Flag, Scope};
pub use value::{OptionType, Value, ValueKind};

/// Current version of flagtree
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
