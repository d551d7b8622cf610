//! Argument parsing
//!
//! This module classifies raw argument tokens and resolves them against a
//! command tree, setting option values and marking invoked commands.

pub mod session;
pub mod token;

// Re-export main types
pub use session::*;
pub use token::*;
