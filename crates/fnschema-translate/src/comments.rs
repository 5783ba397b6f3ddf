//! Comment text for `description` fields.

use fnschema_core::CommentBlock;

/// Leading then trailing comments with their markers stripped, one space
/// between lines. Blank comment lines are dropped.
pub(crate) fn describe(block: &CommentBlock) -> String {
    if block.is_empty() {
        return String::new();
    }
    let mut lines = Vec::new();
    for comment in block.leading.iter().chain(&block.trailing) {
        if let Some(line) = comment.strip_prefix("//") {
            lines.push(line.strip_prefix(' ').unwrap_or(line).trim_end());
        } else if let Some(body) = comment
            .strip_prefix("/*")
            .and_then(|c| c.strip_suffix("*/"))
        {
            lines.extend(body.lines().map(str::trim));
        } else {
            lines.push(comment.trim());
        }
    }
    lines.retain(|line| !line.is_empty());
    lines.join(" ")
}
