//! Schemas and field descriptors
//!
//! A [`Schema`] is an ordered mapping from output keys to [`FieldDescriptor`]s.
//! Each descriptor is one of four kinds:
//!
//! - [`FieldDescriptor::Direct`] - copy the input field with the same key
//! - [`FieldDescriptor::Path`] - copy the value found at a dotted path
//! - [`FieldDescriptor::Rule`] - optional path, default and transform
//! - [`FieldDescriptor::Nested`] - optional path and default, then shift the
//!   value (a record or a list of records) through a nested schema
//!
//! Key order decides the order in which fields are resolved and, in strict
//! mode, the order of missing-value diagnostics.
//!
//! # Examples
//!
//! ```
//! use shiftify_core::schema::{FieldDescriptor, FieldRule, NestedRule, Schema};
//! use shiftify_core::transform::built_in;
//! use serde_json::json;
//!
//! let address = Schema::new()
//!     .field("city", FieldDescriptor::Direct)
//!     .field("country", FieldRule::new().default(json!("BR")));
//!
//! let schema = Schema::new()
//!     .field("id", FieldDescriptor::Direct)
//!     .field("name", "profile.display_name")
//!     .field("email", FieldRule::new().from("contact.email").transform(built_in::lowercase()))
//!     .field("address", NestedRule::new(address).from("profile.address"));
//!
//! assert_eq!(schema.len(), 4);
//! ```
//!
//! Copyright (c) 2025 Shiftify Team
//! Licensed under the Apache-2.0 license

pub mod compose;
pub mod declarative;
pub mod descriptor;

pub use descriptor::Interpretation;

use crate::engine::Shifter;
use crate::transform::Transform;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Rule for computing one output field
#[derive(Debug, Clone)]
pub enum FieldDescriptor {
    /// Output field equals the input field of the same key
    Direct,
    /// Output field is sourced from a dotted path in the input
    Path(String),
    /// Path, default and transform rule
    Rule(FieldRule),
    /// Path and default, then a nested shift
    Nested(NestedRule),
}

impl FieldDescriptor {
    /// Shorthand for [`FieldDescriptor::Path`]
    pub fn path(path: impl Into<String>) -> Self {
        FieldDescriptor::Path(path.into())
    }
}

impl From<&str> for FieldDescriptor {
    fn from(path: &str) -> Self {
        FieldDescriptor::Path(path.to_string())
    }
}

impl From<String> for FieldDescriptor {
    fn from(path: String) -> Self {
        FieldDescriptor::Path(path)
    }
}

impl From<FieldRule> for FieldDescriptor {
    fn from(rule: FieldRule) -> Self {
        FieldDescriptor::Rule(rule)
    }
}

impl From<NestedRule> for FieldDescriptor {
    fn from(rule: NestedRule) -> Self {
        FieldDescriptor::Nested(rule)
    }
}

/// General field rule: source path, default and transform are all optional
#[derive(Debug, Clone, Default)]
pub struct FieldRule {
    /// Source path; the output key is used when unset
    pub from: Option<String>,
    /// Applied to the resolved-or-default value
    pub transform: Option<Transform>,
    /// Used when the path resolves to nothing
    pub default: Option<Value>,
}

impl FieldRule {
    /// Create an empty rule (equivalent to a direct copy)
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    /// Set the source path
    pub fn from(mut self, path: impl Into<String>) -> Self {
        self.from = Some(path.into());
        self
    }

    /// Set the transform
    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Set the default value
    pub fn default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }
}

/// Nested field rule: the resolved value is shifted through another schema
#[derive(Debug, Clone)]
pub struct NestedRule {
    /// Source path; the output key is used when unset
    pub from: Option<String>,
    /// Schema (or prebuilt engine) applied to the resolved value
    pub schema: NestedSchema,
    /// Used when the path resolves to nothing
    pub default: Option<Value>,
}

impl NestedRule {
    /// Create a nested rule over a schema definition or a prebuilt engine
    pub fn new(schema: impl Into<NestedSchema>) -> Self {
        Self {
            from: None,
            schema: schema.into(),
            default: None,
        }
    }

    /// Set the source path
    pub fn from(mut self, path: impl Into<String>) -> Self {
        self.from = Some(path.into());
        self
    }

    /// Set the default value
    pub fn default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }
}

/// Target of a nested rule
#[derive(Clone)]
pub enum NestedSchema {
    /// Raw schema; compiled into an engine with the owning engine's options
    Definition(Schema),
    /// Anything that can shift records, used as-is
    Engine(Arc<dyn Shifter>),
}

impl fmt::Debug for NestedSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NestedSchema::Definition(schema) => f.debug_tuple("Definition").field(schema).finish(),
            NestedSchema::Engine(engine) => f.debug_tuple("Engine").field(engine).finish(),
        }
    }
}

impl From<Schema> for NestedSchema {
    fn from(schema: Schema) -> Self {
        NestedSchema::Definition(schema)
    }
}

impl From<crate::engine::Engine> for NestedSchema {
    fn from(engine: crate::engine::Engine) -> Self {
        NestedSchema::Engine(Arc::new(engine))
    }
}

impl From<Arc<dyn Shifter>> for NestedSchema {
    fn from(engine: Arc<dyn Shifter>) -> Self {
        NestedSchema::Engine(engine)
    }
}

/// Ordered mapping from output key to field descriptor
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(String, FieldDescriptor)>,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn field(mut self, key: impl Into<String>, descriptor: impl Into<FieldDescriptor>) -> Self {
        self.insert(key, descriptor);
        self
    }

    /// Insert a descriptor, returning the one it replaced
    ///
    /// A replaced key keeps its original position.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        descriptor: impl Into<FieldDescriptor>,
    ) -> Option<FieldDescriptor> {
        let key = key.into();
        let descriptor = descriptor.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, descriptor)),
            None => {
                self.fields.push((key, descriptor));
                None
            }
        }
    }

    /// Descriptor for a key
    pub fn get(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, descriptor)| descriptor)
    }

    /// Whether a key is described
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Output keys in schema order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in schema order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldDescriptor)> {
        self.fields.iter().map(|(k, d)| (k.as_str(), d))
    }

    /// Number of described fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema describes no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, D> FromIterator<(K, D)> for Schema
where
    K: Into<String>,
    D: Into<FieldDescriptor>,
{
    fn from_iter<I: IntoIterator<Item = (K, D)>>(iter: I) -> Self {
        let mut schema = Schema::new();
        for (key, descriptor) in iter {
            schema.insert(key, descriptor);
        }
        schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_preserves_order() {
        let schema = Schema::new()
            .field("b", FieldDescriptor::Direct)
            .field("a", "x.y")
            .field("c", FieldRule::new().default(json!(1)));
        let keys: Vec<&str> = schema.keys().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut schema = Schema::new()
            .field("a", FieldDescriptor::Direct)
            .field("b", FieldDescriptor::Direct);
        let previous = schema.insert("a", "renamed.path");
        assert!(matches!(previous, Some(FieldDescriptor::Direct)));
        let keys: Vec<&str> = schema.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert!(matches!(schema.get("a"), Some(FieldDescriptor::Path(p)) if p == "renamed.path"));
    }

    #[test]
    fn test_from_iterator() {
        let schema: Schema = vec![("id", FieldDescriptor::Direct), ("name", FieldDescriptor::path("n"))]
            .into_iter()
            .collect();
        assert_eq!(schema.len(), 2);
        assert!(schema.contains_key("name"));
        assert!(!schema.contains_key("missing"));
    }

    #[test]
    fn test_rule_builders() {
        let rule = FieldRule::new().from("stats.points").default(json!(10));
        assert_eq!(rule.from.as_deref(), Some("stats.points"));
        assert_eq!(rule.default, Some(json!(10)));
        assert!(rule.transform.is_none());

        let nested = NestedRule::new(Schema::new().field("city", FieldDescriptor::Direct))
            .from("profile.address")
            .default(json!({}));
        assert_eq!(nested.from.as_deref(), Some("profile.address"));
        assert!(matches!(nested.schema, NestedSchema::Definition(ref s) if s.len() == 1));
    }
}
