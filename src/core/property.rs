//! Property tags: documented structural fields of an object-shaped type.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::comment::Access;
use super::doctrine::TypeDescriptor;

/// One `@property` entry of a comment.
///
/// `name` is a dotted path, unique within its comment (`address.city` for
/// the `city` field of the object-valued `address` field).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_number: Option<usize>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Access::is_undefined")]
    pub access: Access,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Property {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_type(mut self, ty: TypeDescriptor) -> Self {
        self.ty = Some(ty);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_access(mut self, access: Access) -> Self {
        self.access = access;
        self
    }

    /// Field-wise merge: every field set on `over` wins, every field it
    /// leaves unset is taken from `base`.
    ///
    /// `name` always comes from `over`; the two records are expected to
    /// describe the same dotted path.
    pub fn combine(base: Property, over: Property) -> Property {
        let mut extra = base.extra;
        extra.extend(over.extra);

        Property {
            name: over.name,
            line_number: over.line_number.or(base.line_number),
            ty: over.ty.or(base.ty),
            description: over.description.or(base.description),
            default: over.default.or(base.default),
            access: if over.access.is_undefined() {
                base.access
            } else {
                over.access
            },
            extra,
        }
    }

    /// Last segment of the dotted name.
    pub fn short_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}
