use std::{path::Path, sync::Arc};

use anyhow::{Context, Result, anyhow};
use swc_common::{FileName, Globals, SourceMap, Span};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// A parsed TypeScript source file.
///
/// Owns its own `SourceMap`, so sources can be parsed and queried from
/// different threads.
pub struct ParsedSource {
    pub file_path: String,
    pub module: Module,
    pub source_map: Arc<SourceMap>,
}

impl ParsedSource {
    /// 1-based line of the start of `span`.
    pub fn line_of(&self, span: Span) -> usize {
        self.source_map.lookup_char_pos(span.lo).line
    }

    /// 1-based line and 0-based character column of the start of `span`.
    pub fn position_of(&self, span: Span) -> (usize, usize) {
        let loc = self.source_map.lookup_char_pos(span.lo);
        (loc.line, loc.col.0)
    }
}

impl std::fmt::Debug for ParsedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedSource")
            .field("file_path", &self.file_path)
            .field("items", &self.module.body.len())
            .finish()
    }
}

/// JSX is only enabled for `.tsx`/`.jsx`, where `<T>expr` casts are invalid anyway.
fn syntax_for(file_path: &str) -> Syntax {
    let tsx = matches!(
        Path::new(file_path).extension().and_then(|ext| ext.to_str()),
        Some("tsx" | "jsx")
    );
    Syntax::Typescript(TsSyntax {
        tsx,
        ..Default::default()
    })
}

/// Parse TypeScript source code into an AST.
///
/// Accepts a shared SourceMap; callers parsing in parallel give each file
/// its own.
pub fn parse_ts_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedSource> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let mut parser = Parser::new(
            syntax_for(file_path),
            StringInput::from(&*source_file),
            None,
        );

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e))?;

        Ok(ParsedSource {
            file_path: file_path.to_string(),
            module,
            source_map,
        })
    })
}

/// Read and parse a source file with a fresh SourceMap.
pub fn parse_ts_file(path: &Path) -> Result<ParsedSource> {
    let code = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    parse_ts_source(
        code,
        &path.to_string_lossy(),
        Arc::new(SourceMap::default()),
    )
}
