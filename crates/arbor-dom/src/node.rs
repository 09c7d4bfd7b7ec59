//! DOM Node
//!
//! Node storage: the element/text tagged union and element state
//! (attributes, class list, style, listeners).

use crate::{AttributeMap, ClassList, EventListeners, NodeId, StyleDeclaration};

/// A single node in the arena.
///
/// The parent link is a plain index relation; the child vector inside
/// [`ElementData`] is the only ownership edge in the tree.
#[derive(Debug)]
pub struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) data: NodeData,
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Element with tag, attributes, and children
    Element(ElementData),
    /// Raw text content
    Text(String),
}

impl Node {
    pub(crate) fn element(tag: &str) -> Self {
        Self {
            parent: None,
            data: NodeData::Element(ElementData::new(tag)),
        }
    }

    pub(crate) fn text(content: &str) -> Self {
        Self {
            parent: None,
            data: NodeData::Text(content.to_string()),
        }
    }

    /// Parent node, `None` when detached
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Element-specific data
#[derive(Debug)]
pub struct ElementData {
    tag: String,
    pub(crate) children: Vec<NodeId>,
    attributes: AttributeMap,
    text_content: String,
    class_list: ClassList,
    style: StyleDeclaration,
    pub(crate) listeners: EventListeners,
}

impl ElementData {
    pub(crate) fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            children: Vec::new(),
            attributes: AttributeMap::new(),
            text_content: String::new(),
            class_list: ClassList::new(),
            style: StyleDeclaration::new(),
            listeners: EventListeners::new(),
        }
    }

    /// Lower-cased tag name, fixed at construction
    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Ordered children (serialization order)
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[inline]
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// Text prefix rendered before the children
    #[inline]
    pub fn text_content(&self) -> &str {
        &self.text_content
    }

    /// Assign the text prefix. Children are untouched; replacing the whole
    /// content is a tree-level operation.
    pub fn set_text_content(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    #[inline]
    pub fn class_list(&self) -> &ClassList {
        &self.class_list
    }

    #[inline]
    pub fn style(&self) -> &StyleDeclaration {
        &self.style
    }

    // --- Attributes -------------------------------------------------------
    //
    // `set_attribute`/`remove_attribute` are the single hook point for the
    // two reserved names: `class` rebuilds the class list, `style` is left
    // alone (the style declaration writes that attribute, it never reads
    // it back).

    /// Set an attribute (name case-folded). Writing `class` rebuilds the
    /// class list from the new value.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        let name = name.to_ascii_lowercase();
        self.attributes.set(&name, value);
        self.refresh_derived(&name);
    }

    /// Attribute value, or `None` when absent
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.has(name)
    }

    /// Remove an attribute. Removing `class` clears the class list;
    /// removing a missing name is a no-op.
    pub fn remove_attribute(&mut self, name: &str) {
        let name = name.to_ascii_lowercase();
        self.attributes.remove(&name);
        self.refresh_derived(&name);
    }

    fn refresh_derived(&mut self, name: &str) {
        if name == "class" {
            let value = self.attributes.get("class").unwrap_or("");
            self.class_list.rebuild(value);
        }
    }

    /// `id` attribute, or the empty string
    pub fn id(&self) -> &str {
        self.get_attribute("id").unwrap_or("")
    }

    pub fn set_id(&mut self, value: &str) {
        self.set_attribute("id", value);
    }

    /// Raw `class` attribute text, or the empty string
    pub fn class_name(&self) -> &str {
        self.get_attribute("class").unwrap_or("")
    }

    pub fn set_class_name(&mut self, value: &str) {
        self.set_attribute("class", value);
    }

    // --- Class list -------------------------------------------------------

    /// Add class tokens, then persist the list to the `class` attribute.
    pub fn class_add(&mut self, tokens: &[&str]) {
        self.class_list.add(tokens);
        self.persist_class_list();
    }

    /// Remove class tokens, then persist.
    pub fn class_remove(&mut self, tokens: &[&str]) {
        self.class_list.remove(tokens);
        self.persist_class_list();
    }

    /// Toggle a class token (see [`ClassList::toggle`]), then persist.
    pub fn class_toggle(&mut self, token: &str, force: Option<bool>) -> bool {
        let present = self.class_list.toggle(token, force);
        self.persist_class_list();
        present
    }

    /// Replace a class token in place, persisting on success.
    pub fn class_replace(&mut self, old: &str, new: &str) -> bool {
        let replaced = self.class_list.replace(old, new);
        if replaced {
            self.persist_class_list();
        }
        replaced
    }

    // Persist = attribute write: routes through the reserved-key hook,
    // which rebuilds the list from the identical joined text.
    fn persist_class_list(&mut self) {
        let joined = self.class_list.to_string();
        self.set_attribute("class", &joined);
    }

    // --- Style ------------------------------------------------------------

    /// Upsert a style property and re-serialize into the `style` attribute.
    pub fn set_style_property(&mut self, name: &str, value: &str, priority: &str) {
        self.style.set_property(name, value, priority);
        self.persist_style();
    }

    /// Stored style value, or the empty string when absent.
    pub fn style_value(&self, name: &str) -> &str {
        self.style.get_property_value(name)
    }

    /// Delete a style property. An emptied declaration removes the `style`
    /// attribute instead of leaving it empty.
    pub fn remove_style_property(&mut self, name: &str) {
        self.style.remove_property(name);
        self.persist_style();
    }

    fn persist_style(&mut self) {
        if self.style.is_empty() {
            self.remove_attribute("style");
        } else {
            let css = self.style.css_text();
            self.set_attribute("style", &css);
        }
    }
}
