//! Style Declaration
//!
//! Property map behind an element's `style` attribute.

/// Inline style declaration: CSS property name to value plus an optional
/// priority modifier (an "important" marker), kept in first-set order.
///
/// The declaration is the writer of the `style` attribute, never a reader:
/// every mutation is re-serialized into the attribute by the owning element,
/// but assigning the attribute directly does not re-derive this map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclaration {
    properties: Vec<StyleProperty>,
}

/// Single style property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleProperty {
    pub name: String,
    pub value: String,
    pub priority: String,
}

impl StyleDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert a property. A re-set keeps the position of the first set.
    pub fn set_property(&mut self, name: &str, value: &str, priority: &str) {
        if let Some(existing) = self.properties.iter_mut().find(|p| p.name == name) {
            existing.value = value.to_string();
            existing.priority = priority.to_string();
        } else {
            self.properties.push(StyleProperty {
                name: name.to_string(),
                value: value.to_string(),
                priority: priority.to_string(),
            });
        }
    }

    /// Stored value, or the empty string when absent.
    pub fn get_property_value(&self, name: &str) -> &str {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
            .unwrap_or("")
    }

    /// Delete a property. Deleting a missing property is a no-op.
    pub fn remove_property(&mut self, name: &str) {
        self.properties.retain(|p| p.name != name);
    }

    /// Serialized form: `"prop: value[ !priority]"` entries joined by `"; "`.
    pub fn css_text(&self) -> String {
        self.properties
            .iter()
            .map(|p| {
                if p.priority.is_empty() {
                    format!("{}: {}", p.name, p.value)
                } else {
                    format!("{}: {} !{}", p.name, p.value, p.priority)
                }
            })
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleProperty> {
        self.properties.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut style = StyleDeclaration::new();
        style.set_property("color", "red", "");

        assert_eq!(style.get_property_value("color"), "red");
        assert_eq!(style.get_property_value("margin"), "", "missing reads are empty, not errors");
    }

    #[test]
    fn test_css_text_order_and_priority() {
        let mut style = StyleDeclaration::new();
        style.set_property("color", "red", "");
        style.set_property("margin", "0", "important");

        assert_eq!(style.css_text(), "color: red; margin: 0 !important");
    }

    #[test]
    fn test_reset_keeps_first_set_order() {
        let mut style = StyleDeclaration::new();
        style.set_property("color", "red", "");
        style.set_property("margin", "0", "");
        style.set_property("color", "blue", "");

        assert_eq!(style.css_text(), "color: blue; margin: 0");
    }

    #[test]
    fn test_remove() {
        let mut style = StyleDeclaration::new();
        style.set_property("color", "red", "");
        style.remove_property("color");
        style.remove_property("color");

        assert!(style.is_empty());
        assert_eq!(style.css_text(), "");
    }
}
