//! Property inference for type aliases and interfaces.
//!
//! Every field of an object-shaped declaration becomes a property tag named
//! by its dotted path. A field whose value is itself an object type literal
//! contributes its own entry followed by entries for its nested fields:
//!
//! ```ts
//! type User = { name: string, address: { city: string } };
//! // name, address, address.city
//! ```
//!
//! Properties the author documented explicitly are never replaced. An
//! inferred property with the same name only fills the fields the author
//! left unset.

use std::collections::HashSet;

use swc_ecma_ast::{TsType, TsTypeElement};

use super::finders::{Declarations, TargetDecl};
use crate::core::comment::Comment;
use crate::core::doctrine::object_fields;
use crate::core::parsers::ts::ParsedSource;
use crate::core::property::Property;

/// Infer properties for the type alias or interface `comment` documents.
///
/// A comment whose context resolves to no declaration, or to any other kind
/// of declaration, is returned unchanged.
pub fn infer_properties<'c, D>(comment: &'c mut Comment, declarations: &D) -> &'c mut Comment
where
    D: Declarations + ?Sized,
{
    // Captured up front: only properties that existed before inference count
    // as explicit.
    let explicit: HashSet<String> = comment.properties.iter().map(|p| p.name.clone()).collect();

    let Some(target) = declarations.find_target(&comment.context) else {
        return comment;
    };

    let mut inferrer = PropertyInferrer {
        source: target.source,
        explicit: &explicit,
        properties: &mut comment.properties,
    };

    match target.decl {
        TargetDecl::TypeAlias(alias) => inferrer.infer_type(&alias.type_ann, &[]),
        TargetDecl::Interface(interface) => inferrer.infer_members(&interface.body.body, &[]),
        TargetDecl::Other => {}
    }

    comment
}

fn prefixed_name(name: &str, prefix: &[String]) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix.join("."), name)
    }
}

struct PropertyInferrer<'a> {
    source: &'a ParsedSource,
    explicit: &'a HashSet<String>,
    properties: &'a mut Vec<Property>,
}

impl PropertyInferrer<'_> {
    /// Only object type literals are expanded.
    fn infer_type(&mut self, ty: &TsType, prefix: &[String]) {
        if let TsType::TsTypeLit(lit) = ty {
            self.infer_members(&lit.members, prefix);
        }
    }

    fn infer_members(&mut self, members: &[TsTypeElement], prefix: &[String]) {
        for field in object_fields(members) {
            let inferred = Property {
                name: prefixed_name(&field.name, prefix),
                line_number: Some(self.source.line_of(field.span)),
                ty: Some(field.descriptor()),
                ..Default::default()
            };
            self.merge(inferred);

            if let Some(nested) = field.object_members() {
                let mut nested_prefix = prefix.to_vec();
                nested_prefix.push(field.name.clone());
                self.infer_members(nested, &nested_prefix);
            }
        }
    }

    /// Merge an inferred property into the list.
    ///
    /// Explicit names are merged in place, the author's fields on top.
    /// Other names are appended once; a repeated name (method overloads)
    /// keeps its first entry.
    fn merge(&mut self, inferred: Property) {
        let existing = self.properties.iter_mut().find(|p| p.name == inferred.name);

        match existing {
            Some(explicit) if self.explicit.contains(&inferred.name) => {
                let authored = std::mem::take(explicit);
                *explicit = Property::combine(inferred, authored);
            }
            Some(_) => {}
            None => self.properties.push(inferred),
        }
    }
}
