//! Document
//!
//! High-level entry point: a fixed `html`/`head`/`body` scaffold over a
//! [`DomTree`], node construction, and document-wide queries.

use crate::{DomTree, NodeId};

/// A document: one `html` element permanently owning one `head` and one
/// `body`, all attached at construction and never reassigned.
///
/// A `Document` is an explicit value, not ambient global state: create one
/// per logical application (or per test) and pass it to the code that needs
/// element construction.
pub struct Document {
    tree: DomTree,
    html: NodeId,
    head: NodeId,
    body: NodeId,
}

impl Document {
    /// Create a document with its `html`/`head`/`body` scaffold.
    pub fn new() -> Self {
        let mut tree = DomTree::new();
        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");
        tree.attach(html, head);
        tree.attach(html, body);

        tracing::debug!("created document scaffold");
        Self {
            tree,
            html,
            head,
            body,
        }
    }

    /// The `<html>` element
    pub fn document_element(&self) -> NodeId {
        self.html
    }

    /// The `<head>` element
    pub fn head(&self) -> NodeId {
        self.head
    }

    /// The `<body>` element
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.tree.create_element(tag)
    }

    /// Create a detached text node
    pub fn create_text_node(&mut self, data: &str) -> NodeId {
        self.tree.create_text(data)
    }

    /// Access the tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Text of the first `<title>` under `<head>`, or empty
    pub fn title(&self) -> String {
        for &child in self.tree.children(self.head) {
            let Some(el) = self.tree.element(child) else {
                continue;
            };
            if el.tag() == "title" {
                for &inner in el.children() {
                    if let Some(text) = self.tree.get(inner).and_then(|n| n.as_text()) {
                        return text.to_string();
                    }
                }
            }
        }
        String::new()
    }

    // --- Document-wide queries (rooted at the html element) ---------------

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree.get_element_by_id(self.html, id)
    }

    pub fn get_elements_by_tag_name(&self, tag: &str) -> Vec<NodeId> {
        self.tree.get_elements_by_tag_name(self.html, tag)
    }

    pub fn get_elements_by_class_name(&self, class: &str) -> Vec<NodeId> {
        self.tree.get_elements_by_class_name(self.html, class)
    }

    pub fn query_selector(&self, selector: &str) -> Option<NodeId> {
        self.tree.query_selector(self.html, selector)
    }

    pub fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        self.tree.query_selector_all(self.html, selector)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
