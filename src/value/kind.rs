//! Value kinds
//!
//! The fieldless discriminant of [`Value`](crate::value::Value), used in error
//! messages and to name option types in declaration files.

use crate::error::ValueError;
use std::fmt;
use std::str::FromStr;

/// The closed set of option value types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Bool,
    Int32,
    Int64,
    UInt32,
    UInt64,
    Float32,
    Float64,
}

impl ValueKind {
    /// Canonical type name, as written in declaration files
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Bool => "bool",
            ValueKind::Int32 => "int32",
            ValueKind::Int64 => "int64",
            ValueKind::UInt32 => "uint32",
            ValueKind::UInt64 => "uint64",
            ValueKind::Float32 => "float32",
            ValueKind::Float64 => "float64",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueKind {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" | "str" => Ok(ValueKind::String),
            "bool" | "boolean" => Ok(ValueKind::Bool),
            "int" | "int32" | "integer" => Ok(ValueKind::Int32),
            "int64" => Ok(ValueKind::Int64),
            "uint" | "uint32" => Ok(ValueKind::UInt32),
            "uint64" => Ok(ValueKind::UInt64),
            "float" | "float32" => Ok(ValueKind::Float32),
            "float64" | "double" => Ok(ValueKind::Float64),
            other => Err(ValueError::UnknownKind(other.to_string())),
        }
    }
}
