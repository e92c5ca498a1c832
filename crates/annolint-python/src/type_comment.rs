//! Recognition and resolution of legacy `# type:` comments.
//!
//! tree-sitter surfaces comments as plain `comment` nodes, so the frontend
//! owns both concerns the original typed parsers handled natively: deciding
//! which comment belongs to which slot, and resolving the function-level
//! hint string `(T1, T2, ...) -> R` into the plain [`HintSignature`] the
//! core aligner consumes.

use std::sync::LazyLock;

use regex::Regex;
use tree_sitter::Node;

use annolint_core::{HintSignature, HintSlot};
use annolint_error::{Error, Result};

use crate::source::SourceFile;

static TYPE_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#\s*type:\s*(.*\S)\s*$").expect("static pattern"));

/// Extract the hint text of a `# type:` comment.
///
/// `# type: ignore` comments (bare or with a tag like `# type: ignore[misc]`)
/// are checker directives, not annotations, and yield `None`.
pub(crate) fn type_comment_hint(comment: &str) -> Option<&str> {
    let captures = TYPE_COMMENT_RE.captures(comment.trim())?;
    let hint = captures.get(1)?.as_str();

    if let Some(rest) = hint.strip_prefix("ignore") {
        let is_directive = rest.is_empty()
            || !rest.starts_with(|ch: char| ch.is_ascii_alphanumeric() || ch == '_');
        if is_directive {
            return None;
        }
    }

    Some(hint)
}

/// Find the function-level type comment of a definition, if any.
///
/// Valid placements are trailing the definition's closing colon or leading
/// the body block; both surface as comment nodes positioned between the end
/// of the header and the first body statement. Comments inside the
/// parameter list belong to individual parameters and are excluded here.
pub(crate) fn function_type_comment(
    source: &SourceFile,
    node: Node<'_>,
    body: Node<'_>,
    first_statement: Node<'_>,
) -> Option<String> {
    let header_end = node
        .child_by_field_name("return_type")
        .map(|return_type| return_type.end_byte())
        .or_else(|| {
            node.child_by_field_name("parameters")
                .map(|parameters| parameters.end_byte())
        })
        .unwrap_or_else(|| node.start_byte());

    let mut candidates = Vec::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == "comment" {
            candidates.push(child);
        }
    }
    let mut cursor = body.walk();
    for child in body.children(&mut cursor) {
        if child.kind() == "comment" {
            candidates.push(child);
        }
    }

    for comment in candidates {
        if comment.start_byte() <= header_end || comment.start_byte() >= first_statement.start_byte()
        {
            continue;
        }
        if let Some(hint) = type_comment_hint(source.text(&comment)) {
            return Some(hint.to_string());
        }
    }

    None
}

/// Resolve a function-level hint string into a [`HintSignature`].
///
/// The accepted shape is `(T1, T2, ...) -> R`: a parenthesized argument hint
/// list, an arrow, and a non-empty return hint. Anything else is a fatal
/// error for the owning function; there is no silent fallback.
pub(crate) fn resolve_hint_signature(hint: &str) -> Result<HintSignature> {
    let hint = hint.trim();
    let invalid = || {
        Error::type_comment_invalid(hint).with_operation("python::resolve_hint_signature")
    };

    let rest = hint.strip_prefix('(').ok_or_else(invalid)?;
    let close = find_matching_paren(rest).ok_or_else(invalid)?;
    let args_text = &rest[..close];

    let after = rest[close + 1..].trim_start();
    let return_hint = after.strip_prefix("->").map(str::trim).ok_or_else(invalid)?;
    if return_hint.is_empty() {
        return Err(invalid());
    }

    let mut slots = split_top_level(args_text);
    // A trailing comma leaves one empty slot at the end; any other empty
    // slot means a malformed list
    if slots.last().is_some_and(|slot| slot.is_empty()) {
        slots.pop();
    }
    if slots.iter().any(|slot| slot.is_empty()) {
        return Err(invalid());
    }

    let arg_hints = slots
        .into_iter()
        .map(|slot| {
            if slot == "..." {
                HintSlot::Placeholder
            } else {
                HintSlot::Type(slot)
            }
        })
        .collect();

    Ok(HintSignature::new(arg_hints, return_hint))
}

/// Index of the `)` closing the already-consumed opening paren, honoring
/// nested brackets and quoted forward references.
fn find_matching_paren(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut index = 0;

    while index < bytes.len() {
        match bytes[index] {
            b'(' | b'[' | b'{' => depth += 1,
            b')' if depth == 0 => return Some(index),
            b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            quote @ (b'"' | b'\'') => {
                index += 1;
                while index < bytes.len() && bytes[index] != quote {
                    index += 1;
                }
            }
            _ => {}
        }
        index += 1;
    }

    None
}

/// Split a hint list at top-level commas, trimming each slot.
fn split_top_level(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let bytes = text.as_bytes();
    let mut slots = Vec::new();
    let mut depth = 0usize;
    let mut slot_start = 0;
    let mut index = 0;

    while index < bytes.len() {
        match bytes[index] {
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                slots.push(text[slot_start..index].trim().to_string());
                slot_start = index + 1;
            }
            quote @ (b'"' | b'\'') => {
                index += 1;
                while index < bytes.len() && bytes[index] != quote {
                    index += 1;
                }
            }
            _ => {}
        }
        index += 1;
    }
    slots.push(text[slot_start..].trim().to_string());

    slots
}
