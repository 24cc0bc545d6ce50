//! Portable type descriptors.
//!
//! Converts swc TypeScript type nodes into the doctrine-style tagged tree
//! that documentation renderers consume (`{"type": "NameExpression", ...}`).
//! The conversion is total: anything that cannot be classified becomes
//! [`TypeDescriptor::AllLiteral`] (`*`).
//!
//! Authored descriptors may use shapes this module never produces
//! (`NullableType`, `ParameterType`, ...). Those deserialize as
//! [`TypeDescriptor::Opaque`] and are written back untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use swc_common::Span;
use swc_ecma_ast::{
    Expr, Lit, TsEntityName, TsFnOrConstructorType, TsFnParam, TsKeywordTypeKind, TsLit,
    TsMethodSignature, TsType, TsTypeAnn, TsTypeElement, TsUnionOrIntersectionType,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TypeDescriptor {
    NameExpression {
        name: String,
    },
    /// Any type (`*`).
    AllLiteral,
    NullLiteral,
    UndefinedLiteral,
    VoidLiteral,
    StringLiteralType {
        value: String,
    },
    NumericLiteralType {
        value: f64,
    },
    BooleanLiteralType {
        value: bool,
    },
    OptionalType {
        expression: Box<TypeDescriptor>,
    },
    RestType {
        expression: Box<TypeDescriptor>,
    },
    UnionType {
        elements: Vec<TypeDescriptor>,
    },
    /// Tuple.
    ArrayType {
        elements: Vec<TypeDescriptor>,
    },
    TypeApplication {
        expression: Box<TypeDescriptor>,
        applications: Vec<TypeDescriptor>,
    },
    FunctionType {
        params: Vec<TypeDescriptor>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        result: Option<Box<TypeDescriptor>>,
    },
    RecordType {
        fields: Vec<FieldType>,
    },
    #[serde(untagged)]
    Opaque(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct FieldType {
    pub key: String,
    pub value: TypeDescriptor,
}

impl TypeDescriptor {
    pub fn name(name: impl Into<String>) -> Self {
        TypeDescriptor::NameExpression { name: name.into() }
    }

    pub fn optional(expression: TypeDescriptor) -> Self {
        TypeDescriptor::OptionalType {
            expression: Box::new(expression),
        }
    }

    pub fn application(name: impl Into<String>, applications: Vec<TypeDescriptor>) -> Self {
        TypeDescriptor::TypeApplication {
            expression: Box::new(TypeDescriptor::name(name)),
            applications,
        }
    }
}

/// Convert a TypeScript type expression.
pub fn type_descriptor(ty: &TsType) -> TypeDescriptor {
    match ty {
        TsType::TsKeywordType(keyword) => keyword_descriptor(keyword.kind),
        TsType::TsThisType(_) => TypeDescriptor::name("this"),
        TsType::TsLitType(lit) => literal_descriptor(&lit.lit),
        TsType::TsTypeRef(type_ref) => {
            let name = entity_name(&type_ref.type_name);
            match &type_ref.type_params {
                Some(params) if !params.params.is_empty() => TypeDescriptor::application(
                    name,
                    params.params.iter().map(|p| type_descriptor(p)).collect(),
                ),
                _ => TypeDescriptor::name(name),
            }
        }
        TsType::TsArrayType(array) => {
            TypeDescriptor::application("Array", vec![type_descriptor(&array.elem_type)])
        }
        TsType::TsTupleType(tuple) => TypeDescriptor::ArrayType {
            elements: tuple
                .elem_types
                .iter()
                .map(|elem| type_descriptor(&elem.ty))
                .collect(),
        },
        TsType::TsOptionalType(optional) => {
            TypeDescriptor::optional(type_descriptor(&optional.type_ann))
        }
        TsType::TsRestType(rest) => TypeDescriptor::RestType {
            expression: Box::new(type_descriptor(&rest.type_ann)),
        },
        TsType::TsUnionOrIntersectionType(TsUnionOrIntersectionType::TsUnionType(union)) => {
            TypeDescriptor::UnionType {
                elements: union.types.iter().map(|t| type_descriptor(t)).collect(),
            }
        }
        TsType::TsParenthesizedType(paren) => type_descriptor(&paren.type_ann),
        TsType::TsFnOrConstructorType(TsFnOrConstructorType::TsFnType(func)) => {
            TypeDescriptor::FunctionType {
                params: func.params.iter().map(fn_param_descriptor).collect(),
                result: Some(Box::new(type_descriptor(&func.type_ann.type_ann))),
            }
        }
        TsType::TsTypeLit(lit) => TypeDescriptor::RecordType {
            fields: object_fields(&lit.members)
                .map(|field| FieldType {
                    value: field.descriptor(),
                    key: field.name,
                })
                .collect(),
        },
        _ => TypeDescriptor::AllLiteral,
    }
}

fn keyword_descriptor(kind: TsKeywordTypeKind) -> TypeDescriptor {
    match kind {
        TsKeywordTypeKind::TsAnyKeyword => TypeDescriptor::AllLiteral,
        TsKeywordTypeKind::TsNullKeyword => TypeDescriptor::NullLiteral,
        TsKeywordTypeKind::TsUndefinedKeyword => TypeDescriptor::UndefinedLiteral,
        TsKeywordTypeKind::TsVoidKeyword => TypeDescriptor::VoidLiteral,
        TsKeywordTypeKind::TsStringKeyword => TypeDescriptor::name("string"),
        TsKeywordTypeKind::TsNumberKeyword => TypeDescriptor::name("number"),
        TsKeywordTypeKind::TsBooleanKeyword => TypeDescriptor::name("boolean"),
        TsKeywordTypeKind::TsBigIntKeyword => TypeDescriptor::name("bigint"),
        TsKeywordTypeKind::TsSymbolKeyword => TypeDescriptor::name("symbol"),
        TsKeywordTypeKind::TsObjectKeyword => TypeDescriptor::name("object"),
        TsKeywordTypeKind::TsNeverKeyword => TypeDescriptor::name("never"),
        TsKeywordTypeKind::TsUnknownKeyword => TypeDescriptor::name("unknown"),
        #[allow(unreachable_patterns)]
        _ => TypeDescriptor::AllLiteral,
    }
}

fn literal_descriptor(lit: &TsLit) -> TypeDescriptor {
    match lit {
        TsLit::Str(s) => match s.value.as_str() {
            Some(value) => TypeDescriptor::StringLiteralType {
                value: value.to_string(),
            },
            None => TypeDescriptor::AllLiteral,
        },
        TsLit::Number(n) => TypeDescriptor::NumericLiteralType { value: n.value },
        TsLit::Bool(b) => TypeDescriptor::BooleanLiteralType { value: b.value },
        _ => TypeDescriptor::AllLiteral,
    }
}

fn entity_name(name: &TsEntityName) -> String {
    match name {
        TsEntityName::Ident(ident) => ident.sym.to_string(),
        TsEntityName::TsQualifiedName(qualified) => {
            format!("{}.{}", entity_name(&qualified.left), qualified.right.sym)
        }
        #[allow(unreachable_patterns)]
        _ => "*".to_string(),
    }
}

fn annotation_descriptor(type_ann: Option<&TsTypeAnn>) -> TypeDescriptor {
    type_ann
        .map(|ann| type_descriptor(&ann.type_ann))
        .unwrap_or(TypeDescriptor::AllLiteral)
}

fn fn_param_descriptor(param: &TsFnParam) -> TypeDescriptor {
    match param {
        TsFnParam::Ident(ident) => {
            let ty = annotation_descriptor(ident.type_ann.as_deref());
            if ident.id.optional {
                TypeDescriptor::optional(ty)
            } else {
                ty
            }
        }
        TsFnParam::Rest(rest) => TypeDescriptor::RestType {
            expression: Box::new(annotation_descriptor(rest.type_ann.as_deref())),
        },
        TsFnParam::Array(array) => annotation_descriptor(array.type_ann.as_deref()),
        TsFnParam::Object(object) => annotation_descriptor(object.type_ann.as_deref()),
    }
}

fn method_descriptor(method: &TsMethodSignature) -> TypeDescriptor {
    TypeDescriptor::FunctionType {
        params: method.params.iter().map(fn_param_descriptor).collect(),
        result: method
            .type_ann
            .as_deref()
            .map(|ann| Box::new(type_descriptor(&ann.type_ann))),
    }
}

/// Name of a non-computed property key: identifier, string or numeric literal.
pub fn property_key_name(key: &Expr) -> Option<String> {
    match key {
        Expr::Ident(ident) => Some(ident.sym.to_string()),
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(|s| s.to_string()),
        Expr::Lit(Lit::Num(n)) => Some(n.value.to_string()),
        _ => None,
    }
}

/// Declared value of an object field.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    /// Property signature, `None` when it carries no annotation.
    Type(Option<&'a TsType>),
    Method(&'a TsMethodSignature),
}

/// A named field of an object-shaped type (type literal or interface body).
#[derive(Debug, Clone)]
pub struct ObjectField<'a> {
    pub name: String,
    pub optional: bool,
    pub span: Span,
    pub value: FieldValue<'a>,
}

impl<'a> ObjectField<'a> {
    /// Descriptor of the declared value, wrapped in `OptionalType` when the
    /// field is optional.
    pub fn descriptor(&self) -> TypeDescriptor {
        let ty = match self.value {
            FieldValue::Type(Some(ty)) => type_descriptor(ty),
            FieldValue::Type(None) => TypeDescriptor::AllLiteral,
            FieldValue::Method(method) => method_descriptor(method),
        };
        if self.optional {
            TypeDescriptor::optional(ty)
        } else {
            ty
        }
    }

    /// Members of the field's value when it is itself an object type literal.
    pub fn object_members(&self) -> Option<&'a [TsTypeElement]> {
        let FieldValue::Type(Some(ty)) = self.value else {
            return None;
        };
        match ty {
            TsType::TsTypeLit(lit) => Some(&lit.members),
            _ => None,
        }
    }
}

/// Named fields of an object-shaped type, in declaration order.
///
/// Computed keys, index signatures, call and construct signatures have no
/// stable name and are skipped.
pub fn object_fields(members: &[TsTypeElement]) -> impl Iterator<Item = ObjectField<'_>> {
    members.iter().filter_map(|member| match member {
        TsTypeElement::TsPropertySignature(sig) if !sig.computed => {
            property_key_name(&sig.key).map(|name| ObjectField {
                name,
                optional: sig.optional,
                span: sig.span,
                value: FieldValue::Type(sig.type_ann.as_deref().map(|ann| &*ann.type_ann)),
            })
        }
        TsTypeElement::TsMethodSignature(method) if !method.computed => {
            property_key_name(&method.key).map(|name| ObjectField {
                name,
                optional: method.optional,
                span: method.span,
                value: FieldValue::Method(method),
            })
        }
        _ => None,
    })
}
