//! Resolve a comment's context to the declaration it documents.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use swc_common::{Span, Spanned};
use swc_ecma_ast::{
    Decl, DefaultDecl, ModuleDecl, ModuleItem, Stmt, TsInterfaceDecl, TsNamespaceBody,
    TsTypeAliasDecl,
};

use crate::core::comment::CommentContext;
use crate::core::parsers::ts::ParsedSource;

/// Declaration node found for a comment.
#[derive(Debug, Clone, Copy)]
pub enum TargetDecl<'a> {
    TypeAlias(&'a TsTypeAliasDecl),
    Interface(&'a TsInterfaceDecl),
    /// Any other declaration (class, function, variable, namespace, ...).
    Other,
}

/// A declaration together with the source it was found in.
#[derive(Debug, Clone, Copy)]
pub struct Target<'a> {
    pub source: &'a ParsedSource,
    pub decl: TargetDecl<'a>,
}

/// Upstream declaration tree a comment context can be resolved against.
pub trait Declarations {
    /// Declaration starting at the context's position, if any.
    fn find_target(&self, context: &CommentContext) -> Option<Target<'_>>;
}

impl Declarations for ParsedSource {
    fn find_target(&self, context: &CommentContext) -> Option<Target<'_>> {
        let anchor = Anchor::from_context(context)?;
        find_in_items(self, &self.module.body, anchor).map(|decl| Target { source: self, decl })
    }
}

/// Start position a declaration must have. The column is only compared when
/// the context records one, so a member on its parent's line stays distinct.
#[derive(Debug, Clone, Copy)]
struct Anchor {
    line: usize,
    column: Option<usize>,
}

impl Anchor {
    fn from_context(context: &CommentContext) -> Option<Self> {
        Some(Self {
            line: context.line()?,
            column: context.column(),
        })
    }

    fn starts(&self, source: &ParsedSource, span: Span) -> bool {
        let (line, column) = source.position_of(span);
        line == self.line && self.column.is_none_or(|expected| expected == column)
    }
}

fn classify(decl: &Decl) -> TargetDecl<'_> {
    match decl {
        Decl::TsTypeAlias(alias) => TargetDecl::TypeAlias(alias),
        Decl::TsInterface(interface) => TargetDecl::Interface(interface),
        _ => TargetDecl::Other,
    }
}

fn find_in_items<'a>(
    source: &ParsedSource,
    items: &'a [ModuleItem],
    anchor: Anchor,
) -> Option<TargetDecl<'a>> {
    items.iter().find_map(|item| match item {
        ModuleItem::Stmt(Stmt::Decl(decl)) => find_in_decl(source, decl, anchor, None),
        ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => {
            find_in_decl(source, &export.decl, anchor, Some(export.span))
        }
        ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultDecl(export)) => {
            if !anchor.starts(source, export.span) {
                return None;
            }
            match &export.decl {
                DefaultDecl::TsInterfaceDecl(interface) => Some(TargetDecl::Interface(interface)),
                _ => Some(TargetDecl::Other),
            }
        }
        _ => None,
    })
}

/// `export_span` is the span of an enclosing `export`, which may start on
/// the line above a multi-line declaration head.
fn find_in_decl<'a>(
    source: &ParsedSource,
    decl: &'a Decl,
    anchor: Anchor,
    export_span: Option<Span>,
) -> Option<TargetDecl<'a>> {
    let starts_here = anchor.starts(source, decl.span())
        || export_span.is_some_and(|span| anchor.starts(source, span));
    if starts_here {
        return Some(classify(decl));
    }

    match decl {
        Decl::TsModule(module) => module
            .body
            .as_ref()
            .and_then(|body| find_in_namespace(source, body, anchor)),
        _ => None,
    }
}

fn find_in_namespace<'a>(
    source: &ParsedSource,
    body: &'a TsNamespaceBody,
    anchor: Anchor,
) -> Option<TargetDecl<'a>> {
    match body {
        TsNamespaceBody::TsModuleBlock(block) => find_in_items(source, &block.body, anchor),
        TsNamespaceBody::TsNamespaceDecl(nested) => {
            find_in_namespace(source, &nested.body, anchor)
        }
    }
}

/// Parsed sources keyed by the file path comments refer to.
#[derive(Debug, Default)]
pub struct SourceSet {
    sources: HashMap<PathBuf, ParsedSource>,
}

impl SourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, file: impl Into<PathBuf>, source: ParsedSource) {
        self.sources.insert(file.into(), source);
    }

    pub fn get(&self, file: &Path) -> Option<&ParsedSource> {
        self.sources.get(file)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Declarations for SourceSet {
    fn find_target(&self, context: &CommentContext) -> Option<Target<'_>> {
        let file = context.file.as_deref()?;
        self.get(file)?.find_target(context)
    }
}
