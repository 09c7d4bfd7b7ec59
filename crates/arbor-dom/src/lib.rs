//! Arbor DOM - in-memory document tree
//!
//! An element tree that emulates a browser DOM outside a browser: arena-backed
//! node storage, case-insensitive attributes with derived class/style views,
//! single-token structural queries, and per-node event listeners.

mod attributes;
mod class_list;
mod document;
mod events;
mod node;
mod query;
mod style;
mod tree;

pub use attributes::{Attribute, AttributeMap};
pub use class_list::ClassList;
pub use document::Document;
pub use events::{Event, EventListener, EventListeners, ListenerEntry, ListenerOptions};
pub use node::{ElementData, Node, NodeData};
pub use query::SimpleSelector;
pub use style::{StyleDeclaration, StyleProperty};
pub use tree::{DomError, DomResult, DomTree};

/// Node identifier (index into the tree's arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}
