//! Private access inference by naming convention.
//!
//! With a pattern such as `^_`, a comment named `_cache` that does not state
//! its access is treated as `@private`, and so is a property `options._raw`.
//! Explicit access levels are never changed.

use regex::Regex;

use crate::core::comment::{Access, Comment};
use crate::core::walk::walk_mut;

/// Mark unset-access comments and properties whose name matches `pattern`
/// as private, at every depth. No pattern leaves the tree unchanged.
pub fn infer_access(pattern: Option<&Regex>, comments: &mut [Comment]) {
    let Some(pattern) = pattern else {
        return;
    };

    walk_mut(comments, &mut |comment: &mut Comment| {
        if comment.access.is_undefined()
            && comment.name.as_deref().is_some_and(|name| pattern.is_match(name))
        {
            comment.access = Access::Private;
        }

        for property in &mut comment.properties {
            if property.access.is_undefined() && pattern.is_match(property.short_name()) {
                property.access = Access::Private;
            }
        }
    });
}
