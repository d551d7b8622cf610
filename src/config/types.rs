//! Declaration file types
//!
//! This module defines the data structures that represent a flagtree.yml
//! declaration: application metadata, options and a tree of commands.

use serde::{Deserialize, Serialize};

/// Top-level declaration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Application name (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Application version (optional)
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_scalar"
    )]
    pub version: Option<String>,

    /// Application description (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Register the -h/--help option at the root
    #[serde(default)]
    pub help: bool,

    /// Application-level options, in help order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionDecl>,

    /// Top-level commands, in help order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<CommandDecl>,
}

/// A command definition
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CommandDecl {
    /// Name matched on the command line
    #[serde(default)]
    pub name: String,

    /// Description for help text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Options bound to the command
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionDecl>,

    /// Sub-commands
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<CommandDecl>,

    /// Load the rest of this command from another file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
}

/// An option (flag) definition
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OptionDecl {
    /// Long name, without dashes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,

    /// Short flag (single character)
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_scalar"
    )]
    pub short: Option<String>,

    /// Option type (string, bool, int32, ...)
    #[serde(rename = "type", default = "default_option_type")]
    pub option_type: String,

    /// Default value, converted to the option type
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_scalar"
    )]
    pub default: Option<String>,

    /// Description for help text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl OptionDecl {
    /// Name used in error messages
    pub fn display_name(&self) -> String {
        match (&self.long, &self.short) {
            (Some(long), _) => format!("--{}", long),
            (None, Some(short)) => format!("-{}", short),
            (None, None) => "<unnamed>".to_string(),
        }
    }
}

fn default_option_type() -> String {
    "string".to_string()
}

/// Accept any YAML scalar (`default: false`, `default: 8080`, `short: 1`) as text
fn deserialize_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    use serde_yaml::Value;

    let value = Value::deserialize(deserializer)?;

    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::String(s) => Ok(Some(s)),
        _ => Err(D::Error::custom("expected a scalar value")),
    }
}
