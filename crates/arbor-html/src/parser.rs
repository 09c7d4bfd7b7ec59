//! HTML Fragment Parser
//!
//! Best-effort, non-validating, and deliberately flat: the input is split
//! at `<...>` boundaries, text segments become text children, and each tag
//! segment yields at most one element child from its tag name alone.
//! Attributes inside tags are discarded, closing tags are dropped, and no
//! nesting is reconstructed - the output is always a flat sequence of
//! top-level children. Good enough for simple content; not an HTML5 parser
//! and intentionally kept that way.

use arbor_dom::{DomResult, DomTree, NodeId};

/// Replace the content of `id`: detach and discard its children, clear the
/// text prefix, then parse `html` and install the result as the new child
/// sequence.
pub fn set_inner_html(tree: &mut DomTree, id: NodeId, html: &str) -> DomResult<()> {
    tree.clear_children(id)?;
    tree.set_text_content(id, "")?;

    let children = parse_fragment(tree, html);
    tracing::debug!(children = children.len(), "parsed html fragment");
    for child in children {
        tree.append_child(id, child)?;
    }
    Ok(())
}

/// Replace the content of `id` with plain text: children are detached and
/// the text prefix becomes `text`, verbatim.
pub fn set_inner_text(tree: &mut DomTree, id: NodeId, text: &str) -> DomResult<()> {
    tree.clear_children(id)?;
    tree.set_text_content(id, text)
}

/// Parse `html` into a flat sequence of detached text and element nodes.
///
/// A tag boundary is `<`, one or more non-`>` characters, then `>` - so
/// `<>` and an unterminated `<` remain text. Within a tag segment, the
/// first `<` immediately followed by a word character starts the tag name;
/// segments without one (closing tags, comments, doctypes) contribute no
/// child. The parser has no failure mode.
pub fn parse_fragment(tree: &mut DomTree, html: &str) -> Vec<NodeId> {
    let bytes = html.as_bytes();
    let mut children = Vec::new();
    let mut text_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'<' {
            if let Some(end) = tag_end(bytes, i) {
                if text_start < i {
                    children.push(tree.create_text(&html[text_start..i]));
                }
                if let Some(tag) = element_tag(&html[i..=end]) {
                    children.push(tree.create_element(tag));
                }
                i = end + 1;
                text_start = i;
                continue;
            }
        }
        i += 1;
    }
    if text_start < bytes.len() {
        children.push(tree.create_text(&html[text_start..]));
    }
    children
}

/// Position of the `>` closing a tag that starts at `start`, or `None`
/// when the tag never closes or would be empty (`<>`).
fn tag_end(bytes: &[u8], start: usize) -> Option<usize> {
    let close = bytes[start + 1..].iter().position(|&b| b == b'>')? + start + 1;
    (close > start + 1).then_some(close)
}

/// Tag name inside a `<...>` segment: the word-character run after the
/// first `<` that is immediately followed by one.
fn element_tag(segment: &str) -> Option<&str> {
    let bytes = segment.as_bytes();
    let mut i = 0;
    while i + 1 < bytes.len() {
        if bytes[i] == b'<' && is_word(bytes[i + 1]) {
            let start = i + 1;
            let mut end = start;
            while end < bytes.len() && is_word(bytes[end]) {
                end += 1;
            }
            return Some(&segment[start..end]);
        }
        i += 1;
    }
    None
}

fn is_word(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}
