//! Element Attributes
//!
//! Insertion-ordered attribute storage with case-insensitive names.

use std::collections::HashMap;

/// Attribute collection owned by an element.
///
/// Names are folded to ASCII lower case on every write and lookup, so
/// `set("CLASS", ..)` and `get("class")` address the same entry. Iteration
/// yields attributes in first-set order, which is the order the serializer
/// emits them in.
#[derive(Debug, Clone, Default)]
pub struct AttributeMap {
    attributes: Vec<Attribute>,
    by_name: HashMap<String, usize>,
}

/// Single attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Set an attribute. Overwriting an existing name keeps its original
    /// insertion position.
    pub fn set(&mut self, name: &str, value: &str) {
        let name = name.to_ascii_lowercase();
        if let Some(&index) = self.by_name.get(&name) {
            self.attributes[index].value = value.to_string();
        } else {
            let index = self.attributes.len();
            self.by_name.insert(name.clone(), index);
            self.attributes.push(Attribute {
                name,
                value: value.to_string(),
            });
        }
    }

    /// Get an attribute value, or `None` when absent. Never fails.
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.by_name
            .get(&name)
            .and_then(|&i| self.attributes.get(i))
            .map(|a| a.value.as_str())
    }

    /// Check if an attribute exists
    pub fn has(&self, name: &str) -> bool {
        self.by_name.contains_key(&name.to_ascii_lowercase())
    }

    /// Remove an attribute. Removing a missing name is a no-op.
    pub fn remove(&mut self, name: &str) -> Option<Attribute> {
        let name = name.to_ascii_lowercase();
        if let Some(&index) = self.by_name.get(&name) {
            self.by_name.remove(&name);
            // Fix up indices of entries stored after the removed one
            for (_, idx) in self.by_name.iter_mut() {
                if *idx > index {
                    *idx -= 1;
                }
            }
            Some(self.attributes.remove(index))
        } else {
            None
        }
    }

    /// Iterate attributes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get() {
        let mut attrs = AttributeMap::new();
        attrs.set("class", "btn");
        attrs.set("id", "submit");

        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("class"), Some("btn"));
        assert_eq!(attrs.get("id"), Some("submit"));
        assert_eq!(attrs.get("href"), None);
    }

    #[test]
    fn test_names_case_folded() {
        let mut attrs = AttributeMap::new();
        attrs.set("Data-Value", "1");
        attrs.set("DATA-VALUE", "2");

        assert_eq!(attrs.len(), 1, "duplicate-case writes overwrite");
        assert_eq!(attrs.get("data-value"), Some("2"));
        assert!(attrs.has("data-VALUE"));
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut attrs = AttributeMap::new();
        attrs.set("a", "1");
        attrs.set("b", "2");
        attrs.set("a", "3");

        let names: Vec<&str> = attrs.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(attrs.get("a"), Some("3"));
    }

    #[test]
    fn test_remove() {
        let mut attrs = AttributeMap::new();
        attrs.set("a", "1");
        attrs.set("b", "2");
        attrs.set("c", "3");

        assert!(attrs.remove("a").is_some());
        assert!(attrs.remove("missing").is_none(), "removal of a missing key is a no-op");
        assert_eq!(attrs.get("b"), Some("2"));
        assert_eq!(attrs.get("c"), Some("3"));

        let names: Vec<&str> = attrs.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["b", "c"]);
    }
}
