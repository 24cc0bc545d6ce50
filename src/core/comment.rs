//! Parsed doc-comment tree.
//!
//! A [`Comment`] is one documented declaration as produced by the upstream
//! comment/tag parser. Comments nest through [`Members`], a mapping from
//! [`Scope`] to an ordered list of child comments, so a list of root comments
//! forms a forest that is owned top-down (no shared children, no cycles).
//!
//! Fields this crate does not interpret are kept in `extra` and written back
//! unchanged, so a comment can round-trip through the pipeline as JSON.

use std::{collections::BTreeMap, path::PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::property::Property;

/// Child comments grouped by scope, each list in declaration order.
pub type Members = BTreeMap<Scope, Vec<Comment>>;

/// Visibility level of a comment or property.
///
/// `Undefined` is the explicit "unset" variant. It takes part in level
/// matching like any other level, which is why it is allowed by default.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Public,
    Protected,
    Private,
    #[default]
    Undefined,
}

impl Access {
    pub fn as_str(&self) -> &'static str {
        match self {
            Access::Public => "public",
            Access::Protected => "protected",
            Access::Private => "private",
            Access::Undefined => "undefined",
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Access::Undefined)
    }
}

/// Kind of documented declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentKind {
    Class,
    Constant,
    Event,
    External,
    File,
    Function,
    Interface,
    Member,
    Mixin,
    Module,
    Namespace,
    /// Free-standing prose. Always published, whatever its access.
    Note,
    Typedef,
    /// Kinds not listed above (`enum`, ...), written back as they came.
    #[serde(untagged)]
    Other(String),
}

/// Member scope a child comment is grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Global,
    Inner,
    Instance,
    Events,
    Static,
}

/// 1-based line, 0-based column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub start: Position,
    #[serde(default)]
    pub end: Position,
}

/// Where the documented declaration lives in the source tree.
///
/// Only used to locate the declaration node to infer from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<SourceLocation>,
}

impl CommentContext {
    pub fn new(file: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            file: Some(file.into()),
            loc: Some(SourceLocation {
                start: Position { line, column: None },
                end: Position { line, column: None },
            }),
        }
    }

    pub fn with_column(mut self, column: usize) -> Self {
        if let Some(loc) = &mut self.loc {
            loc.start.column = Some(column);
        }
        self
    }

    /// Start line of the declaration, if known.
    pub fn line(&self) -> Option<usize> {
        self.loc.map(|loc| loc.start.line)
    }

    /// Start column of the declaration, if the upstream parser recorded one.
    pub fn column(&self) -> Option<usize> {
        self.loc.and_then(|loc| loc.start.column)
    }
}

/// One documented declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<CommentKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Access::is_undefined")]
    pub access: Access,
    #[serde(default, skip_serializing_if = "is_false")]
    pub ignore: bool,
    #[serde(default)]
    pub members: Members,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub context: CommentContext,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Comment {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_kind(mut self, kind: CommentKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_access(mut self, access: Access) -> Self {
        self.access = access;
        self
    }

    pub fn with_context(mut self, context: CommentContext) -> Self {
        self.context = context;
        self
    }

    pub fn with_member(mut self, scope: Scope, member: Comment) -> Self {
        self.members.entry(scope).or_default().push(member);
        self
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn is_note(&self) -> bool {
        self.kind == Some(CommentKind::Note)
    }

    /// Number of comments in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self
            .members
            .values()
            .flatten()
            .map(Comment::count)
            .sum::<usize>()
    }
}
