//! Help rendering
//!
//! This module formats the help screen: application header, the details of
//! the invoked command, and tab-aligned tables of options and sub-commands.

pub mod render;
pub mod table;
pub mod wrap;

// Re-export main types
pub use render::*;
pub use table::*;
pub use wrap::*;
