//! Go extractor - walks the top level of a `source_file` and converts
//! function and type declarations into the source model.
//!
//! Only direct children of the file are visited: types declared inside
//! function bodies are not package-level and must not shadow anything.

use ast_grep_core::AstGrep;
use fnschema_core::{Decl, SourceUnit};

mod comments;
mod processors;
mod types;

/// Extract the top-level declarations of one Go file.
pub fn extract_unit<D: ast_grep_core::Doc>(root: &AstGrep<D>, path: &str) -> SourceUnit {
    let mut unit = SourceUnit::new(path);
    for node in root.root().children() {
        match node.kind().as_ref() {
            "function_declaration" => {
                if let Some(func) = processors::process_function(&node) {
                    unit.decls.push(Decl::Func(func));
                }
            }
            "type_declaration" => {
                unit.decls.extend(
                    processors::process_type_declaration(&node)
                        .into_iter()
                        .map(Decl::Type),
                );
            }
            // Methods are never lookup candidates; consts and vars carry no types we expand.
            _ => {}
        }
    }
    tracing::debug!(
        file = path,
        functions = unit.functions().count(),
        types = unit.types().count(),
        "extracted Go unit"
    );
    unit
}
