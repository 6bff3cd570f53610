//! Insertion-ordered registry of named ruleset entities.

use std::collections::HashMap;

use crate::data::Named;

/// Registry of one kind of ruleset entity, keyed by name.
///
/// Iteration follows first-insertion order. Inserting an entity whose name
/// is already present replaces the old entity in place and hands it back,
/// so later table entries win without losing their position.
#[derive(Debug, Clone)]
pub struct NamedRegistry<T> {
    entries: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for NamedRegistry<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Named> NamedRegistry<T> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entity, returning the entity it replaced (if any).
    pub fn insert(&mut self, item: T) -> Option<T> {
        if let Some(&slot) = self.index.get(item.name()) {
            return self
                .entries
                .get_mut(slot)
                .map(|existing| std::mem::replace(existing, item));
        }

        self.index.insert(item.name().to_string(), self.entries.len());
        self.entries.push(item);
        None
    }

    /// Look up an entity by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.index.get(name).and_then(|&slot| self.entries.get(slot))
    }

    /// Check if an entity is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    /// All names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Named::name)
    }

    /// Number of registered entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mutable access for the linker. Callers must not rename entries.
    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entries.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::BasicHelp;

    fn help(name: &str, description: &str) -> BasicHelp {
        BasicHelp {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_insert_and_get() {
        let mut registry = NamedRegistry::new();
        assert!(registry.insert(help("Tiles", "a")).is_none());
        assert!(registry.insert(help("Units", "b")).is_none());

        assert!(registry.contains("Tiles"));
        assert!(!registry.contains("Cities"));
        assert_eq!(registry.get("Units").unwrap().description, "b");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_insert_overwrites_and_returns_previous() {
        let mut registry = NamedRegistry::new();
        registry.insert(help("Tiles", "first"));
        registry.insert(help("Units", "units"));

        let previous = registry.insert(help("Tiles", "second"));

        assert_eq!(previous.unwrap().description, "first");
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("Tiles").unwrap().description, "second");
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, ["Tiles", "Units"]);
    }
}
