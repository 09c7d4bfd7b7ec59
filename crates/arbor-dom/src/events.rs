//! Events
//!
//! Per-node listener registry and synchronous dispatch.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::{DomResult, DomTree, NodeId};

/// A dispatched event. Only the type string participates in routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    event_type: String,
}

impl Event {
    pub fn new(event_type: &str) -> Self {
        Self {
            event_type: event_type.to_string(),
        }
    }

    #[inline]
    pub fn event_type(&self) -> &str {
        &self.event_type
    }
}

/// Cloneable listener handle. Clones share identity, so a handle passed to
/// `remove_event_listener` matches every registration made from the same
/// original (or any clone of it).
#[derive(Clone)]
pub struct EventListener(Rc<dyn Fn(NodeId, &Event)>);

impl EventListener {
    pub fn new(callback: impl Fn(NodeId, &Event) + 'static) -> Self {
        Self(Rc::new(callback))
    }

    /// Invoke the callback with the dispatching node as context.
    pub fn call(&self, node: NodeId, event: &Event) {
        (self.0)(node, event)
    }
}

impl PartialEq for EventListener {
    /// Pointer identity, not behavioral equality
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for EventListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventListener({:p})", Rc::as_ptr(&self.0))
    }
}

/// Registration options, recorded verbatim. Dispatch does not interpret
/// them; they exist for hosts that inspect registrations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    pub capture: bool,
    pub once: bool,
    pub passive: bool,
}

/// One registration: the listener plus its options
#[derive(Debug, Clone)]
pub struct ListenerEntry {
    pub listener: EventListener,
    pub options: ListenerOptions,
}

/// Listener lists keyed by event type, owned by an element.
#[derive(Debug, Clone, Default)]
pub struct EventListeners {
    by_type: HashMap<String, Vec<ListenerEntry>>,
}

impl EventListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append unconditionally: duplicate registrations of the same listener
    /// dispatch once per registration, never deduplicated.
    pub fn add(&mut self, event_type: &str, listener: EventListener, options: ListenerOptions) {
        self.by_type
            .entry(event_type.to_string())
            .or_default()
            .push(ListenerEntry { listener, options });
    }

    /// Drop every entry whose listener shares identity with `listener`.
    /// No-op when the type or listener is unknown.
    pub fn remove(&mut self, event_type: &str, listener: &EventListener) {
        if let Some(entries) = self.by_type.get_mut(event_type) {
            entries.retain(|entry| entry.listener != *listener);
        }
    }

    /// Registrations for an event type, in registration order
    pub fn get(&self, event_type: &str) -> &[ListenerEntry] {
        self.by_type
            .get(event_type)
            .map(|entries| entries.as_slice())
            .unwrap_or(&[])
    }
}

impl DomTree {
    /// Register `listener` for `event_type` on `target`.
    pub fn add_event_listener(
        &mut self,
        target: NodeId,
        event_type: &str,
        listener: EventListener,
        options: ListenerOptions,
    ) -> DomResult<()> {
        self.require_element_mut(target)?
            .listeners
            .add(event_type, listener, options);
        Ok(())
    }

    /// Remove every registration of `listener` for `event_type` on `target`.
    pub fn remove_event_listener(
        &mut self,
        target: NodeId,
        event_type: &str,
        listener: &EventListener,
    ) -> DomResult<()> {
        self.require_element_mut(target)?
            .listeners
            .remove(event_type, listener);
        Ok(())
    }

    /// Synchronously invoke the listeners registered on `target` for the
    /// event's type, in registration order, with `target` as context.
    /// Listener panics propagate to the caller. Returns true on completion.
    ///
    /// The registration list is snapshotted at entry, so a listener observes
    /// the registrations as of dispatch start.
    pub fn dispatch_event(&self, target: NodeId, event: &Event) -> bool {
        let listeners: Vec<EventListener> = self
            .element(target)
            .map(|el| {
                el.listeners
                    .get(event.event_type())
                    .iter()
                    .map(|entry| entry.listener.clone())
                    .collect()
            })
            .unwrap_or_default();

        tracing::trace!(
            target_node = target.0,
            event_type = event.event_type(),
            listeners = listeners.len(),
            "dispatching event"
        );

        for listener in listeners {
            listener.call(target, event);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[test]
    fn test_dispatch_in_registration_order() {
        let mut tree = DomTree::new();
        let node = tree.create_element("div");
        let seen = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let seen = Rc::clone(&seen);
            let listener = EventListener::new(move |_, _| seen.borrow_mut().push(tag));
            tree.add_event_listener(node, "click", listener, ListenerOptions::default())
                .unwrap();
        }

        assert!(tree.dispatch_event(node, &Event::new("click")));
        assert_eq!(*seen.borrow(), ["first", "second", "third"]);
    }

    #[test]
    fn test_duplicate_registrations_fire_per_registration() {
        let mut tree = DomTree::new();
        let node = tree.create_element("button");
        let count = Rc::new(Cell::new(0));

        let listener = {
            let count = Rc::clone(&count);
            EventListener::new(move |_, _| count.set(count.get() + 1))
        };
        tree.add_event_listener(node, "press", listener.clone(), ListenerOptions::default())
            .unwrap();
        tree.add_event_listener(node, "press", listener.clone(), ListenerOptions::default())
            .unwrap();

        tree.dispatch_event(node, &Event::new("press"));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_remove_matches_by_identity() {
        let mut tree = DomTree::new();
        let node = tree.create_element("div");
        let count = Rc::new(Cell::new(0));

        let kept = {
            let count = Rc::clone(&count);
            EventListener::new(move |_, _| count.set(count.get() + 1))
        };
        let removed = {
            let count = Rc::clone(&count);
            EventListener::new(move |_, _| count.set(count.get() + 10))
        };
        tree.add_event_listener(node, "click", kept.clone(), ListenerOptions::default())
            .unwrap();
        tree.add_event_listener(node, "click", removed.clone(), ListenerOptions::default())
            .unwrap();
        tree.add_event_listener(node, "click", removed.clone(), ListenerOptions::default())
            .unwrap();

        tree.remove_event_listener(node, "click", &removed).unwrap();
        tree.dispatch_event(node, &Event::new("click"));

        assert_eq!(count.get(), 1, "all identity matches removed, others kept");
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut tree = DomTree::new();
        let node = tree.create_element("div");
        let listener = EventListener::new(|_, _| {});

        tree.remove_event_listener(node, "never-added", &listener).unwrap();
        assert!(tree.dispatch_event(node, &Event::new("never-added")));
    }

    #[test]
    #[should_panic(expected = "listener failure")]
    fn test_listener_panics_propagate_to_dispatcher() {
        let mut tree = DomTree::new();
        let node = tree.create_element("div");
        let listener = EventListener::new(|_, _| panic!("listener failure"));
        tree.add_event_listener(node, "click", listener, ListenerOptions::default())
            .unwrap();

        tree.dispatch_event(node, &Event::new("click"));
    }

    #[test]
    fn test_listener_receives_target_and_event() {
        let mut tree = DomTree::new();
        let node = tree.create_element("div");
        let seen = Rc::new(RefCell::new(None));

        let listener = {
            let seen = Rc::clone(&seen);
            EventListener::new(move |target, event: &Event| {
                *seen.borrow_mut() = Some((target, event.event_type().to_string()));
            })
        };
        tree.add_event_listener(node, "wheel", listener, ListenerOptions::default())
            .unwrap();
        tree.dispatch_event(node, &Event::new("wheel"));

        assert_eq!(*seen.borrow(), Some((node, "wheel".to_string())));
    }
}
