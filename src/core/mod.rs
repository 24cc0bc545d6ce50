//! Core post-processing engine.
//!
//! ## Module Structure
//!
//! - `comment`, `property`: the parsed doc-comment tree
//! - `doctrine`: type descriptors converted from TypeScript types
//! - `walk`: depth-first traversal over member scopes
//! - `filter_access`: access level filtering
//! - `infer`: property and access inference
//! - `parsers`: TypeScript source parsing (swc)
//! - `pipeline`: load, infer, filter

pub mod comment;
pub mod doctrine;
pub mod filter_access;
pub mod infer;
pub mod parsers;
pub mod pipeline;
pub mod property;
pub mod walk;

pub use comment::{Access, Comment, CommentContext, CommentKind, Members, Scope};
pub use doctrine::{TypeDescriptor, type_descriptor};
pub use filter_access::{AccessLevels, filter_access};
pub use infer::{Declarations, SourceSet, infer_access, infer_properties};
pub use pipeline::{Pipeline, PipelineOptions, PipelineResult};
pub use property::Property;
pub use walk::{walk, walk_mut};
