use ast_grep_core::Node;
use fnschema_core::CommentBlock;

const COMMENT: &str = "comment";

/// Leading and trailing comments of a declaration, markers included.
pub(super) fn attached<D: ast_grep_core::Doc>(node: &Node<D>) -> CommentBlock {
    CommentBlock {
        leading: leading(node),
        trailing: trailing(node),
    }
}

/// Walk backward through sibling `comment` nodes.
///
/// The run stops at a blank line, at any non-comment sibling, and at a
/// comment that shares its line with the end of the preceding token (that
/// comment trails the previous declaration).
pub(super) fn leading<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<String> {
    let mut comments = Vec::new();
    let mut next_line = node.start_pos().line();
    let mut current = node.prev();
    while let Some(sibling) = current {
        if sibling.kind().as_ref() != COMMENT
            || sibling.end_pos().line() + 1 < next_line
            || trails_previous_token(&sibling)
        {
            break;
        }
        next_line = sibling.start_pos().line();
        comments.push(sibling.text().to_string());
        current = sibling.prev();
    }
    comments.reverse();
    comments
}

/// Comments starting on the line `node` ends on, skipping list separators.
pub(super) fn trailing<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<String> {
    let line = node.end_pos().line();
    let mut comments = Vec::new();
    let mut current = node.next();
    while let Some(sibling) = current {
        if sibling.start_pos().line() != line {
            break;
        }
        match sibling.kind().as_ref() {
            COMMENT => comments.push(sibling.text().to_string()),
            "," | ";" => {}
            _ => break,
        }
        current = sibling.next();
    }
    comments
}

/// Whether a non-comment token ends on the line `comment` starts on.
/// Earlier comments on that line are skipped.
fn trails_previous_token<D: ast_grep_core::Doc>(comment: &Node<D>) -> bool {
    let line = comment.start_pos().line();
    let mut current = comment.prev();
    while let Some(before) = current {
        if before.end_pos().line() != line {
            return false;
        }
        match before.kind().as_ref() {
            COMMENT => current = before.prev(),
            "\n" => return false,
            _ => return true,
        }
    }
    false
}
