//! Structural Queries
//!
//! Pre-order tree walks for id/tag/class lookup and single-token selector
//! dispatch. All queries are read-only and include the root itself.

use crate::{DomTree, NodeId};

/// Single-token selector: `#id`, `.class`, `*`, or a tag name.
/// No combinators, no attribute selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    Tag(String),
    Class(String),
    Id(String),
    Universal,
}

impl SimpleSelector {
    /// Parse a selector by its leading character. Returns `None` for an
    /// empty selector.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        if s == "*" {
            Some(Self::Universal)
        } else if let Some(id) = s.strip_prefix('#') {
            Some(Self::Id(id.to_string()))
        } else if let Some(class) = s.strip_prefix('.') {
            Some(Self::Class(class.to_string()))
        } else {
            Some(Self::Tag(s.to_ascii_lowercase()))
        }
    }
}

impl DomTree {
    /// First element in pre-order (root included) whose `id` attribute
    /// equals `id`. Duplicate ids resolve to the pre-order-first match,
    /// deterministically.
    pub fn get_element_by_id(&self, root: NodeId, id: &str) -> Option<NodeId> {
        let el = self.element(root)?;
        if el.get_attribute("id") == Some(id) {
            return Some(root);
        }
        for &child in el.children() {
            if let Some(found) = self.get_element_by_id(child, id) {
                return Some(found);
            }
        }
        None
    }

    /// Every element in pre-order whose tag equals `tag` (case-insensitive),
    /// or every element for the `"*"` wildcard.
    pub fn get_elements_by_tag_name(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        let tag = tag.to_ascii_lowercase();
        let mut results = Vec::new();
        self.collect_by_tag(root, &tag, &mut results);
        results
    }

    fn collect_by_tag(&self, id: NodeId, tag: &str, results: &mut Vec<NodeId>) {
        let Some(el) = self.element(id) else {
            return;
        };
        if tag == "*" || el.tag() == tag {
            results.push(id);
        }
        for &child in el.children() {
            self.collect_by_tag(child, tag, results);
        }
    }

    /// Every element in pre-order whose class list contains `class`.
    pub fn get_elements_by_class_name(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        let mut results = Vec::new();
        self.collect_by_class(root, class, &mut results);
        results
    }

    fn collect_by_class(&self, id: NodeId, class: &str, results: &mut Vec<NodeId>) {
        let Some(el) = self.element(id) else {
            return;
        };
        if el.class_list().contains(class) {
            results.push(id);
        }
        for &child in el.children() {
            self.collect_by_class(child, class, results);
        }
    }

    /// All matches for a single-token selector, dispatched on its leading
    /// character: `#` id (0-or-1 result), `.` class, otherwise tag.
    pub fn query_selector_all(&self, root: NodeId, selector: &str) -> Vec<NodeId> {
        match SimpleSelector::parse(selector) {
            Some(SimpleSelector::Id(id)) => {
                self.get_element_by_id(root, &id).into_iter().collect()
            }
            Some(SimpleSelector::Class(class)) => self.get_elements_by_class_name(root, &class),
            Some(SimpleSelector::Tag(tag)) => self.get_elements_by_tag_name(root, &tag),
            Some(SimpleSelector::Universal) => self.get_elements_by_tag_name(root, "*"),
            None => Vec::new(),
        }
    }

    /// First match for a single-token selector, or `None`.
    pub fn query_selector(&self, root: NodeId, selector: &str) -> Option<NodeId> {
        self.query_selector_all(root, selector).into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DomTree;

    fn fixture() -> (DomTree, NodeId) {
        // <div id="root" class="outer">
        //   <span id="a" class="note"></span>
        //   <p><span id="b" class="note important"></span></p>
        //   text
        // </div>
        let mut tree = DomTree::new();
        let root = tree.create_element("div");
        tree.set_attribute(root, "id", "root").unwrap();
        tree.set_attribute(root, "class", "outer").unwrap();

        let a = tree.create_element("span");
        tree.set_attribute(a, "id", "a").unwrap();
        tree.set_attribute(a, "class", "note").unwrap();
        tree.append_child(root, a).unwrap();

        let p = tree.create_element("p");
        tree.append_child(root, p).unwrap();
        let b = tree.create_element("span");
        tree.set_attribute(b, "id", "b").unwrap();
        tree.set_attribute(b, "class", "note important").unwrap();
        tree.append_child(p, b).unwrap();

        let text = tree.create_text("text");
        tree.append_child(root, text).unwrap();

        (tree, root)
    }

    #[test]
    fn test_selector_parse() {
        assert_eq!(SimpleSelector::parse("#main"), Some(SimpleSelector::Id("main".into())));
        assert_eq!(SimpleSelector::parse(".note"), Some(SimpleSelector::Class("note".into())));
        assert_eq!(SimpleSelector::parse("DIV"), Some(SimpleSelector::Tag("div".into())));
        assert_eq!(SimpleSelector::parse("*"), Some(SimpleSelector::Universal));
        assert_eq!(SimpleSelector::parse("  "), None);
    }

    #[test]
    fn test_get_element_by_id() {
        let (tree, root) = fixture();
        assert_eq!(tree.get_element_by_id(root, "root"), Some(root), "self included");
        assert!(tree.get_element_by_id(root, "b").is_some());
        assert_eq!(tree.get_element_by_id(root, "missing"), None);
    }

    #[test]
    fn test_duplicate_ids_resolve_pre_order_first() {
        let mut tree = DomTree::new();
        let root = tree.create_element("div");
        let first = tree.create_element("span");
        let second = tree.create_element("span");
        tree.set_attribute(first, "id", "dup").unwrap();
        tree.set_attribute(second, "id", "dup").unwrap();
        tree.append_child(root, first).unwrap();
        tree.append_child(root, second).unwrap();

        for _ in 0..3 {
            assert_eq!(tree.get_element_by_id(root, "dup"), Some(first));
        }
    }

    #[test]
    fn test_elements_by_tag_name() {
        let (tree, root) = fixture();

        let spans = tree.get_elements_by_tag_name(root, "SPAN");
        assert_eq!(spans.len(), 2, "tag match is case-insensitive");

        let all = tree.get_elements_by_tag_name(root, "*");
        assert_eq!(all.len(), 4, "wildcard collects every element, text skipped");
        assert_eq!(all[0], root, "pre-order starts at the root");
    }

    #[test]
    fn test_elements_by_class_name() {
        let (tree, root) = fixture();
        assert_eq!(tree.get_elements_by_class_name(root, "note").len(), 2);
        assert_eq!(tree.get_elements_by_class_name(root, "important").len(), 1);
        assert!(tree.get_elements_by_class_name(root, "missing").is_empty());
    }

    #[test]
    fn test_query_selector_dispatch() {
        let (tree, root) = fixture();

        assert_eq!(tree.query_selector(root, "#a"), tree.get_element_by_id(root, "a"));
        assert_eq!(tree.query_selector_all(root, ".note").len(), 2);
        assert_eq!(tree.query_selector_all(root, "span").len(), 2);
        assert_eq!(tree.query_selector_all(root, "#missing").len(), 0);
        assert_eq!(tree.query_selector(root, ".missing"), None);
    }
}
