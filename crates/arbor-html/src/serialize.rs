//! HTML Serialization
//!
//! Pure functions producing `outerHTML`/`innerHTML` strings from tree
//! state. Text content and attribute values use distinct escape rules.

use arbor_dom::{DomTree, NodeId};

/// Tags whose serialized form has no body and no closing tag, regardless of
/// any children attached to the node.
pub const SELF_CLOSING_TAGS: [&str; 6] = ["img", "br", "hr", "input", "meta", "link"];

/// Check a (lower-cased) tag against the self-closing set
pub fn is_self_closing(tag: &str) -> bool {
    SELF_CLOSING_TAGS.contains(&tag)
}

/// Escape text content: `&`, `<`, `>`. Ampersands first, so already-escaped
/// output is never double-escaped into invalid entities. Quotes pass through.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape an attribute value: `&` and both quote characters.
pub fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Serialized content of `id`: the text prefix followed by each child in
/// order - text children escaped, element children via [`outer_html`].
/// Empty for text nodes and unknown ids.
pub fn inner_html(tree: &DomTree, id: NodeId) -> String {
    let Some(el) = tree.element(id) else {
        return String::new();
    };
    let mut out = String::from(el.text_content());
    for &child in el.children() {
        let Some(node) = tree.get(child) else {
            continue;
        };
        match node.as_text() {
            Some(text) => out.push_str(&escape_text(text)),
            None => out.push_str(&outer_html(tree, child)),
        }
    }
    out
}

/// Serialized form of the element itself: tag, attributes in insertion
/// order, then either ` />` for self-closing tags or the inner content and
/// a closing tag.
pub fn outer_html(tree: &DomTree, id: NodeId) -> String {
    let Some(el) = tree.element(id) else {
        return String::new();
    };
    let mut out = String::new();
    out.push('<');
    out.push_str(el.tag());
    for attr in el.attributes().iter() {
        out.push(' ');
        out.push_str(&attr.name);
        out.push_str("=\"");
        out.push_str(&escape_attribute(&attr.value));
        out.push('"');
    }
    if is_self_closing(el.tag()) {
        out.push_str(" />");
    } else {
        out.push('>');
        out.push_str(&inner_html(tree, id));
        out.push_str("</");
        out.push_str(el.tag());
        out.push('>');
    }
    out
}

/// Unescaped text of the subtree: the text prefix, raw text children, and
/// element children recursively, in order.
pub fn inner_text(tree: &DomTree, id: NodeId) -> String {
    let Some(el) = tree.element(id) else {
        return String::new();
    };
    let mut out = String::from(el.text_content());
    for &child in el.children() {
        let Some(node) = tree.get(child) else {
            continue;
        };
        match node.as_text() {
            Some(text) => out.push_str(text),
            None => out.push_str(&inner_text(tree, child)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text_ampersand_first() {
        assert_eq!(escape_text("a < b & c > d"), "a &lt; b &amp; c &gt; d");
        assert_eq!(escape_text("&lt;"), "&amp;lt;", "existing entities re-escape, never double");
        assert_eq!(escape_text(r#"say "hi""#), r#"say "hi""#, "quotes pass through in text");
    }

    #[test]
    fn test_escape_attribute_quotes() {
        assert_eq!(escape_attribute(r#"a "b" & 'c'"#), "a &quot;b&quot; &amp; &#39;c&#39;");
        assert_eq!(escape_attribute("1 < 2"), "1 < 2", "angle brackets pass through in attributes");
    }

    #[test]
    fn test_self_closing_set() {
        for tag in ["img", "br", "hr", "input", "meta", "link"] {
            assert!(is_self_closing(tag));
        }
        assert!(!is_self_closing("div"));
    }

    #[test]
    fn test_outer_html_recurses() {
        let mut tree = DomTree::new();
        let outer = tree.create_element("div");
        let inner = tree.create_element("span");
        let text = tree.create_text("x");
        tree.append_child(outer, inner).unwrap();
        tree.append_child(inner, text).unwrap();

        assert_eq!(outer_html(&tree, outer), "<div><span>x</span></div>");
        assert_eq!(inner_html(&tree, outer), "<span>x</span>");
    }

    #[test]
    fn test_text_prefix_before_children() {
        let mut tree = DomTree::new();
        let el = tree.create_element("p");
        tree.set_text_content(el, "lead ").unwrap();
        let text = tree.create_text("tail");
        tree.append_child(el, text).unwrap();

        assert_eq!(outer_html(&tree, el), "<p>lead tail</p>");
    }

    #[test]
    fn test_inner_text_is_raw() {
        let mut tree = DomTree::new();
        let el = tree.create_element("div");
        let inner = tree.create_element("b");
        let a = tree.create_text("a & ");
        let b = tree.create_text("b");
        tree.append_child(el, a).unwrap();
        tree.append_child(el, inner).unwrap();
        tree.append_child(inner, b).unwrap();

        assert_eq!(inner_text(&tree, el), "a & b");
    }
}
