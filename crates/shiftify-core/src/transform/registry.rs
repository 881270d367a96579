//! Name-based transform lookup for declarative schemas
//!
//! Copyright (c) 2025 Shiftify Team
//! Licensed under the Apache-2.0 license

use super::built_in;
use super::types::Transform;
use std::collections::HashMap;

/// Registry mapping transform names to implementations
#[derive(Debug, Clone, Default)]
pub struct TransformRegistry {
    transforms: HashMap<String, Transform>,
}

impl TransformRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with the built-in transforms
    pub fn with_built_ins() -> Self {
        Self::new().register_all(built_in::all())
    }

    /// Register a transform under its own name, replacing any previous entry
    pub fn register(mut self, transform: Transform) -> Self {
        self.insert(transform);
        self
    }

    /// Register several transforms
    pub fn register_all<I>(mut self, transforms: I) -> Self
    where
        I: IntoIterator<Item = Transform>,
    {
        for transform in transforms {
            self.insert(transform);
        }
        self
    }

    /// Insert a transform in place
    pub fn insert(&mut self, transform: Transform) -> Option<Transform> {
        self.transforms
            .insert(transform.name().to_string(), transform)
    }

    /// Look up a transform by name
    pub fn get(&self, name: &str) -> Option<&Transform> {
        self.transforms.get(name)
    }

    /// Check whether a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.transforms.contains_key(name)
    }

    /// Registered transform names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.transforms.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered transforms
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_built_ins_registered() {
        let registry = TransformRegistry::with_built_ins();
        assert_eq!(registry.len(), built_in::BUILT_IN_NAMES.len());
        for name in built_in::BUILT_IN_NAMES {
            assert!(registry.contains(name));
        }
    }

    #[test]
    fn test_register_replaces() {
        let shout = Transform::present("uppercase", |_, _| Ok(json!("LOUD")));
        let registry = TransformRegistry::with_built_ins().register(shout);
        let t = registry.get("uppercase").unwrap();
        assert_eq!(t.apply(Some(&json!("x")), &json!({})).unwrap(), Some(json!("LOUD")));
        assert_eq!(registry.len(), built_in::BUILT_IN_NAMES.len());
    }

    #[test]
    fn test_empty_registry() {
        let registry = TransformRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("trim").is_none());
        assert!(registry.names().is_empty());
    }
}
