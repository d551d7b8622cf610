//! Typed option values
//!
//! This module defines the closed set of value kinds an option can hold,
//! how each kind parses itself from text and how it renders.

pub mod kind;
pub mod types;

// Re-export main types
pub use kind::*;
pub use types::*;
