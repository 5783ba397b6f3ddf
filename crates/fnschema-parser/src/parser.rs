//! ast-grep wrapper for Go sources.

use ast_grep_core::Node;
use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

/// The concrete AST tree type returned by `parse_source`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Parse Go source code into an ast-grep tree.
#[must_use]
pub fn parse_source(source: &str) -> AstTree {
    use ast_grep_language::LanguageExt;
    SupportLang::Go.ast_grep(source)
}

/// Location and description of the first syntax error in document order.
///
/// tree-sitter reports errors either as `ERROR` nodes or as zero-width
/// MISSING nodes it inserted to recover. Returns the 1-based line and a
/// short description.
pub fn first_syntax_error<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<(usize, String)> {
    if node.is_missing() {
        return Some((node.start_pos().line() + 1, format!("missing `{}`", node.kind())));
    }
    if node.is_error() {
        let text = node.text();
        let snippet = text.lines().next().unwrap_or_default().trim();
        let snippet: String = snippet.chars().take(40).collect();
        return Some((node.start_pos().line() + 1, format!("unexpected `{snippet}`")));
    }
    node.children().find_map(|child| first_syntax_error(&child))
}
