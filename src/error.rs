//! Error types for flagtree

use crate::value::ValueKind;
use std::io;
use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for flagtree operations
pub type Result<T> = std::result::Result<T, FlagtreeError>;

/// Main error type for flagtree
#[derive(Error, Debug)]
pub enum FlagtreeError {
    /// Argument resolution errors
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Typed value errors
    #[error("Value error: {0}")]
    Value(#[from] ValueError),

    /// Declaration file errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors produced while resolving an argument list against a command tree
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("\"{0}\" is not a registered command nor an option")]
    UnregisteredToken(String),

    #[error("Option '{0}' expects a value")]
    OptionExpectsValue(String),

    #[error("\"{0}\" is not a valid option name")]
    MalformedOptionName(String),

    #[error("Invalid value for option '{option}': {source}")]
    Conversion {
        option: String,
        #[source]
        source: ValueError,
    },
}

impl ParseError {
    /// Whether this error renders help and exits when auto-help is enabled.
    ///
    /// Conversion errors always reach the caller.
    pub fn triggers_help(&self) -> bool {
        !matches!(self, ParseError::Conversion { .. })
    }
}

/// Typed value conversion and access errors
#[derive(Error, Debug)]
pub enum ValueError {
    #[error("'{text}' is not a valid {kind}: {source}")]
    InvalidInteger {
        kind: ValueKind,
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("'{text}' is not a valid {kind}: {source}")]
    InvalidFloat {
        kind: ValueKind,
        text: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Not a {expected} option (holds a {actual} value)")]
    TypeMismatch {
        expected: ValueKind,
        actual: ValueKind,
    },

    #[error("Unknown option type: {0}. Must be one of: string, bool, int32, int64, uint32, uint64, float32, float64")]
    UnknownKind(String),
}

/// Declaration file parsing and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to find declaration file (searched: {0})")]
    NotFound(String),

    #[error("Invalid declaration: {0}")]
    Invalid(String),

    #[error("Invalid option '{name}': {reason}")]
    InvalidOption { name: String, reason: String },

    #[error("Command '{0}' is declared more than once in the same scope")]
    DuplicateCommand(String),

    #[error("Option '{0}' is declared more than once in the same scope")]
    DuplicateOption(String),

    #[error("Failed to include file '{path}': {error}")]
    IncludeFile { path: PathBuf, error: String },
}

/// Specialized result type for argument resolution
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Specialized result type for typed values
pub type ValueResult<T> = std::result::Result<T, ValueError>;

/// Specialized result type for declaration files
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_conversion_errors_skip_help() {
        assert!(ParseError::UnregisteredToken("nope".to_string()).triggers_help());
        assert!(ParseError::OptionExpectsValue("--str".to_string()).triggers_help());
        assert!(ParseError::MalformedOptionName("--opt=value".to_string()).triggers_help());

        let conversion = ParseError::Conversion {
            option: "--port".to_string(),
            source: ValueError::UnknownKind("complex".to_string()),
        };
        assert!(!conversion.triggers_help());
    }
}
