//! Demo binary driver
//!
//! This module loads a command tree, resolves the process arguments against
//! it and reports what was invoked.

pub mod app;

// Re-export main types
pub use app::*;
