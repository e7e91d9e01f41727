use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::trace;

use crate::core::target::{Configurable, NamedContainer};

/// Objects that are created from their container name
pub trait Named {
    fn with_name(name: &str) -> Self;
}

/// Ordered collection of named children, created on first request
///
/// Serializes as a map from child name to child, in creation order.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainObjectContainer<T> {
    items: IndexMap<String, T>,
}

impl<T> Default for DomainObjectContainer<T> {
    fn default() -> Self {
        Self {
            items: IndexMap::new(),
        }
    }
}

impl<T> DomainObjectContainer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.items.get(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.items.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.items.iter().map(|(n, item)| (n.as_str(), item))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Named> DomainObjectContainer<T> {
    /// Create-or-fetch by name
    pub fn maybe_create_item(&mut self, name: &str) -> &mut T {
        self.items.entry(name.to_string()).or_insert_with(|| {
            trace!("Creating container element {name}");
            T::with_name(name)
        })
    }
}

impl<T: Named + Configurable> NamedContainer for DomainObjectContainer<T> {
    fn maybe_create(&mut self, name: &str) -> &mut dyn Configurable {
        self.maybe_create_item(name)
    }
}

impl<T: Serialize> Serialize for DomainObjectContainer<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.items.len()))?;
        for (name, item) in self.iter() {
            map.serialize_entry(name, item)?;
        }
        map.end()
    }
}
