//! Command tree declaration
//!
//! This module defines options, command nodes and the root scope an
//! application builds before parsing.

pub mod app;
pub mod command;
pub mod flag;
pub mod scope;

// Re-export main types
pub use app::*;
pub use command::*;
pub use flag::*;
pub use scope::*;
