//! Declaration files
//!
//! This module handles parsing of flagtree.yml declarations, their
//! validation and building them into an [`App`](crate::model::App).

pub mod build;
pub mod parse;
pub mod schema;
pub mod types;

// Re-export main types
pub use build::*;
pub use parse::*;
pub use schema::*;
pub use types::*;
