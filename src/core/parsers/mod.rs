//! Source parsers.
//!
//! - `ts`: TypeScript/TSX source parser (uses swc for AST generation)

pub mod ts;
