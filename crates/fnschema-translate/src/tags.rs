//! Struct-tag parsing for the `enum` and `required` keys.
//!
//! Tags use Go struct-tag syntax: space-separated `key:"value"` pairs whose
//! values are Go interpreted string literals. A value is a primary name
//! followed by comma-separated options.

use thiserror::Error;

/// Values a `required` tag may carry to mark a field optional.
const FALSEY: [&str; 3] = ["false", "no", "0"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    #[error("tag is not a string literal: {0}")]
    Literal(String),

    #[error("bad syntax for struct tag key")]
    KeySyntax,

    #[error("bad syntax for struct tag pair")]
    PairSyntax,

    #[error("bad syntax for struct tag value")]
    ValueSyntax,

    #[error("enum tag contains an empty value")]
    EmptyEnumValue,

    #[error("enum tag repeats value '{0}'")]
    DuplicateEnumValue(String),
}

/// Schema overrides carried by a field tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTags {
    /// Allowed values, in tag order.
    pub enum_values: Option<Vec<String>>,
    pub required: bool,
}

impl Default for FieldTags {
    fn default() -> Self {
        Self {
            enum_values: None,
            required: true,
        }
    }
}

/// Parse a tag literal as written in source (raw or interpreted string).
///
/// Keys other than `enum` and `required` are checked for syntax only.
/// When a key repeats, its first occurrence wins.
///
/// # Errors
/// Returns a [`TagError`] when the literal or any `key:"value"` pair is
/// malformed, or when the `enum` values are empty or repeated.
pub fn parse_field_tags(literal: &str) -> Result<FieldTags, TagError> {
    let tag = unquote_literal(literal)?;
    let pairs = split_pairs(&tag)?;
    let lookup = |key: &str| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str());

    let mut tags = FieldTags::default();
    if let Some(value) = lookup("enum") {
        tags.enum_values = Some(enum_values(value)?);
    }
    if let Some(value) = lookup("required") {
        let first = value.split(',').next().unwrap_or_default();
        tags.required = !FALSEY.iter().any(|f| first.eq_ignore_ascii_case(f));
    }
    Ok(tags)
}

fn unquote_literal(literal: &str) -> Result<String, TagError> {
    if literal.len() >= 2 && literal.starts_with('`') && literal.ends_with('`') {
        return Ok(literal[1..literal.len() - 1].to_string());
    }
    if literal.len() >= 2 && literal.starts_with('"') && literal.ends_with('"') {
        return unquote(&literal[1..literal.len() - 1])
            .ok_or_else(|| TagError::Literal(literal.to_string()));
    }
    Err(TagError::Literal(literal.to_string()))
}

fn split_pairs(tag: &str) -> Result<Vec<(&str, String)>, TagError> {
    let mut pairs = Vec::new();
    let mut rest = tag;
    loop {
        rest = rest.trim_start_matches(' ');
        if rest.is_empty() {
            return Ok(pairs);
        }

        let key_len = rest
            .find(|c: char| c <= ' ' || c == ':' || c == '"' || c == '\u{7f}')
            .unwrap_or(rest.len());
        if key_len == 0 {
            return Err(TagError::KeySyntax);
        }
        let (key, after_key) = rest.split_at(key_len);
        let Some(after_colon) = after_key.strip_prefix(':') else {
            return Err(TagError::PairSyntax);
        };
        let Some(body) = after_colon.strip_prefix('"') else {
            return Err(TagError::ValueSyntax);
        };

        let bytes = body.as_bytes();
        let mut end = 0;
        while end < bytes.len() && bytes[end] != b'"' {
            if bytes[end] == b'\\' {
                end += 1;
            }
            end += 1;
        }
        if end >= bytes.len() {
            return Err(TagError::ValueSyntax);
        }
        let value = unquote(&body[..end]).ok_or(TagError::ValueSyntax)?;
        pairs.push((key, value));
        rest = &body[end + 1..];
    }
}

fn enum_values(value: &str) -> Result<Vec<String>, TagError> {
    let mut values: Vec<String> = Vec::new();
    for part in value.split(',') {
        if part.is_empty() {
            return Err(TagError::EmptyEnumValue);
        }
        if values.iter().any(|v| v == part) {
            return Err(TagError::DuplicateEnumValue(part.to_string()));
        }
        values.push(part.to_string());
    }
    Ok(values)
}

/// Decode the body of a Go interpreted string literal.
///
/// `\x` and octal escapes denote single bytes, as in Go; the decoded bytes
/// must form valid UTF-8.
fn unquote(body: &str) -> Option<String> {
    let mut out: Vec<u8> = Vec::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {}
            '"' | '\n' => return None,
            other => {
                push_char(&mut out, other);
                continue;
            }
        }
        let decoded = match chars.next()? {
            'a' => '\u{7}',
            'b' => '\u{8}',
            'f' => '\u{c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\u{b}',
            '\\' => '\\',
            '"' => '"',
            'x' => {
                out.push(u8::try_from(hex_digits(&mut chars, 2)?).ok()?);
                continue;
            }
            'u' => char::from_u32(hex_digits(&mut chars, 4)?)?,
            'U' => char::from_u32(hex_digits(&mut chars, 8)?)?,
            first @ '0'..='7' => {
                let mut code = first.to_digit(8)?;
                for _ in 0..2 {
                    code = code * 8 + chars.next()?.to_digit(8)?;
                }
                out.push(u8::try_from(code).ok()?);
                continue;
            }
            _ => return None,
        };
        push_char(&mut out, decoded);
    }
    String::from_utf8(out).ok()
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}

fn hex_digits(chars: &mut std::str::Chars<'_>, count: usize) -> Option<u32> {
    let mut code = 0;
    for _ in 0..count {
        code = code * 16 + chars.next()?.to_digit(16)?;
    }
    Some(code)
}
