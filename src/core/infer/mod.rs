//! Inference passes run over comments before filtering.
//!
//! - `properties`: property tags from type alias and interface shapes
//! - `access`: private access from a naming pattern
//! - `finders`: locating the declaration a comment documents

pub mod access;
pub mod finders;
pub mod properties;

pub use access::infer_access;
pub use finders::{Declarations, SourceSet, Target, TargetDecl};
pub use properties::infer_properties;
