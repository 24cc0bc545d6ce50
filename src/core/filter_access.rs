//! Access filtering.
//!
//! Removes comments whose access level the user does not want published,
//! at every depth of the tree, and strips properties explicitly marked
//! private. Private members can then be documented with `@private` and
//! still be left out of the output.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::comment::{Access, Comment};
use super::walk::walk;

/// Set of access levels that survive filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessLevels(BTreeSet<Access>);

impl AccessLevels {
    pub fn contains(&self, access: Access) -> bool {
        self.0.contains(&access)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// `public`, `undefined` and `protected`: everything but private.
impl Default for AccessLevels {
    fn default() -> Self {
        [Access::Public, Access::Undefined, Access::Protected]
            .into_iter()
            .collect()
    }
}

impl FromIterator<Access> for AccessLevels {
    fn from_iter<I: IntoIterator<Item = Access>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn is_visible(comment: &Comment, levels: &AccessLevels) -> bool {
    comment.is_note() || (!comment.ignore && levels.contains(comment.access))
}

/// Keep only comments visible under `levels` (default: [`AccessLevels::default`]).
///
/// Notes are always kept. Ignored comments are always dropped. Surviving
/// comments keep their relative order. When `private` is not allowed,
/// properties marked `private` are stripped too; properties without an
/// access level are kept whatever the levels.
pub fn filter_access(levels: Option<&AccessLevels>, comments: Vec<Comment>) -> Vec<Comment> {
    let default_levels = AccessLevels::default();
    let levels = levels.unwrap_or(&default_levels);
    let strip_private_properties = !levels.contains(Access::Private);

    let roots: Vec<Comment> = comments
        .into_iter()
        .filter(|comment| is_visible(comment, levels))
        .collect();

    walk(roots, |comment| {
        for members in comment.members.values_mut() {
            members.retain(|member| is_visible(member, levels));
        }

        if strip_private_properties {
            comment
                .properties
                .retain(|property| property.access != Access::Private);
        }
    })
}
