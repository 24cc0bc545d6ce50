//! docpost - doc-comment post-processing
//!
//! docpost takes a tree of already-parsed documentation comments attached to
//! TypeScript declarations and prepares it for rendering: it infers property
//! tags for type aliases and interfaces from their declared shape, and
//! filters out comments and properties whose access level should not be
//! published.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Comment tree, inference, filtering and the pipeline tying them together

pub mod cli;
pub mod config;
pub mod core;
