//! DOM Tree
//!
//! Arena-based node storage and the structural mutation operations:
//! appendChild, removeChild, insertBefore, cloneNode.

use crate::node::Node;
use crate::{ElementData, NodeId};

/// Result type for structural operations
pub type DomResult<T> = Result<T, DomError>;

/// Structural errors. Read paths never produce these; mutation with an
/// invalid reference fails loudly so tree-surgery bugs surface immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Node id does not belong to this tree
    #[error("node not found")]
    NotFound,
    /// The reference node is not a child of the given parent
    #[error("node is not a child of the given parent")]
    NotAChild,
    /// Structural mutation addressed at a text node
    #[error("node is not an element")]
    NotAnElement,
    /// Inserting a node into itself or one of its descendants
    #[error("node cannot contain itself or an ancestor")]
    HierarchyRequest,
}

/// Arena-based document tree.
///
/// Every node lives in a flat `Vec`; ids are indices and stay valid for the
/// lifetime of the tree. Detached nodes keep their storage and are reusable
/// as fresh subtree roots.
#[derive(Debug, Default)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new empty tree
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Number of nodes ever created in this tree (detached ones included)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Create a detached element. The tag is folded to lower case and fixed.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content))
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get a node by id
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by id
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Element data at `id`, or `None` for text nodes and unknown ids
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| n.as_element())
    }

    /// Mutable element data at `id`
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id).and_then(|n| n.as_element_mut())
    }

    pub(crate) fn require_element(&self, id: NodeId) -> DomResult<&ElementData> {
        match self.get(id) {
            None => Err(DomError::NotFound),
            Some(node) => node.as_element().ok_or(DomError::NotAnElement),
        }
    }

    pub(crate) fn require_element_mut(&mut self, id: NodeId) -> DomResult<&mut ElementData> {
        match self.get_mut(id) {
            None => Err(DomError::NotFound),
            Some(node) => node.as_element_mut().ok_or(DomError::NotAnElement),
        }
    }

    /// Parent of `id`, `None` when detached or unknown
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent())
    }

    /// Ordered children of `id`; empty for text nodes and unknown ids
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.element(id).map(|el| el.children()).unwrap_or(&[])
    }

    // --- Structural mutation ---------------------------------------------

    /// Append `child` as the last child of `parent`.
    ///
    /// Move semantics: a child that already has a parent is detached from it
    /// first, so a node is in at most one child list at a time.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.check_insertable(parent, child)?;
        self.detach(child);
        self.attach(parent, child);
        Ok(child)
    }

    /// Remove `child` from `parent`, clearing its parent link. Fails with
    /// [`DomError::NotAChild`] when `child` is not in `parent`'s child list.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        let el = self.require_element(parent)?;
        let position = el
            .children()
            .iter()
            .position(|&c| c == child)
            .ok_or(DomError::NotAChild)?;
        if let Some(el) = self.element_mut(parent) {
            el.children.remove(position);
        }
        if let Some(node) = self.get_mut(child) {
            node.parent = None;
        }
        Ok(child)
    }

    /// Insert `new_child` into `parent` immediately before `reference`.
    /// Fails with [`DomError::NotAChild`] when `reference` is not a child of
    /// `parent`. `new_child` is detached from its current parent first.
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        new_child: NodeId,
        reference: NodeId,
    ) -> DomResult<NodeId> {
        self.check_insertable(parent, new_child)?;
        let position = self
            .children(parent)
            .iter()
            .position(|&c| c == reference)
            .ok_or(DomError::NotAChild)?;
        self.detach(new_child);
        // Re-locate the reference: detaching new_child from this same parent
        // may have shifted it, and when reference == new_child the original
        // slot is where it goes back.
        let position = self
            .children(parent)
            .iter()
            .position(|&c| c == reference)
            .unwrap_or(position);
        if let Some(el) = self.element_mut(parent) {
            el.children.insert(position, new_child);
        }
        if let Some(node) = self.get_mut(new_child) {
            node.parent = Some(parent);
        }
        Ok(new_child)
    }

    /// Detach every child of `parent`, clearing their parent links.
    pub fn clear_children(&mut self, parent: NodeId) -> DomResult<()> {
        let children = std::mem::take(&mut self.require_element_mut(parent)?.children);
        for child in children {
            if let Some(node) = self.get_mut(child) {
                node.parent = None;
            }
        }
        Ok(())
    }

    /// Copy an element: tag, attributes (class list re-derived through the
    /// attribute hook), and text prefix. With `deep`, the child sequence is
    /// cloned recursively. The clone is detached and carries no event
    /// listeners.
    pub fn clone_node(&mut self, id: NodeId, deep: bool) -> DomResult<NodeId> {
        let el = self.require_element(id)?;
        let tag = el.tag().to_string();
        let attributes: Vec<(String, String)> = el
            .attributes()
            .iter()
            .map(|a| (a.name.clone(), a.value.clone()))
            .collect();
        let text = el.text_content().to_string();
        let children = el.children().to_vec();

        let clone = self.create_element(&tag);
        if let Some(el) = self.element_mut(clone) {
            for (name, value) in &attributes {
                el.set_attribute(name, value);
            }
            el.set_text_content(&text);
        }

        if deep {
            for child in children {
                let copy = if let Some(text) = self.text_of(child) {
                    self.create_text(&text)
                } else if self.get(child).is_some_and(|n| n.is_element()) {
                    self.clone_node(child, true)?
                } else {
                    continue;
                };
                self.attach(clone, copy);
            }
        }
        Ok(clone)
    }

    fn text_of(&self, id: NodeId) -> Option<String> {
        self.get(id).and_then(|n| n.as_text()).map(str::to_string)
    }

    // --- Internal link management ----------------------------------------

    fn check_insertable(&self, parent: NodeId, child: NodeId) -> DomResult<()> {
        if self.get(child).is_none() {
            return Err(DomError::NotFound);
        }
        self.require_element(parent)?;
        // An arena walk through a cycle would not terminate, so inserting a
        // node into itself or its own subtree fails loudly.
        if self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest);
        }
        Ok(())
    }

    fn is_inclusive_ancestor(&self, candidate: NodeId, mut of: NodeId) -> bool {
        loop {
            if of == candidate {
                return true;
            }
            match self.parent(of) {
                Some(parent) => of = parent,
                None => return false,
            }
        }
    }

    fn detach(&mut self, child: NodeId) {
        let Some(parent) = self.parent(child) else {
            return;
        };
        if let Some(el) = self.element_mut(parent) {
            if let Some(position) = el.children.iter().position(|&c| c == child) {
                el.children.remove(position);
            }
        }
        if let Some(node) = self.get_mut(child) {
            node.parent = None;
        }
    }

    /// Link a validated, detached child under `parent`. Callers guarantee
    /// both ids are valid and the insertion cannot form a cycle.
    pub(crate) fn attach(&mut self, parent: NodeId, child: NodeId) {
        if let Some(el) = self.element_mut(parent) {
            el.children.push(child);
        }
        if let Some(node) = self.get_mut(child) {
            node.parent = Some(parent);
        }
    }

    // --- Attribute / class / style wrappers -------------------------------

    /// Set an attribute on the element at `id`
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        self.require_element_mut(id)?.set_attribute(name, value);
        Ok(())
    }

    /// Attribute value, or `None` when absent (or `id` is not an element)
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?.get_attribute(name)
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.element(id).is_some_and(|el| el.has_attribute(name))
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> DomResult<()> {
        self.require_element_mut(id)?.remove_attribute(name);
        Ok(())
    }

    /// Replace the element's text prefix
    pub fn set_text_content(&mut self, id: NodeId, text: &str) -> DomResult<()> {
        self.require_element_mut(id)?.set_text_content(text);
        Ok(())
    }

    pub fn class_add(&mut self, id: NodeId, tokens: &[&str]) -> DomResult<()> {
        self.require_element_mut(id)?.class_add(tokens);
        Ok(())
    }

    pub fn class_remove(&mut self, id: NodeId, tokens: &[&str]) -> DomResult<()> {
        self.require_element_mut(id)?.class_remove(tokens);
        Ok(())
    }

    pub fn class_toggle(&mut self, id: NodeId, token: &str, force: Option<bool>) -> DomResult<bool> {
        Ok(self.require_element_mut(id)?.class_toggle(token, force))
    }

    pub fn class_replace(&mut self, id: NodeId, old: &str, new: &str) -> DomResult<bool> {
        Ok(self.require_element_mut(id)?.class_replace(old, new))
    }

    pub fn set_style_property(
        &mut self,
        id: NodeId,
        name: &str,
        value: &str,
        priority: &str,
    ) -> DomResult<()> {
        self.require_element_mut(id)?.set_style_property(name, value, priority);
        Ok(())
    }

    /// Style property value; empty string when absent or `id` is not an element
    pub fn style_value(&self, id: NodeId, name: &str) -> &str {
        self.element(id).map_or("", |el| el.style_value(name))
    }

    pub fn remove_style_property(&mut self, id: NodeId, name: &str) -> DomResult<()> {
        self.require_element_mut(id)?.remove_style_property(name);
        Ok(())
    }
}
