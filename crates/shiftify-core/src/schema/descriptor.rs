//! Descriptor interpretation
//!
//! Reduces each [`FieldDescriptor`] variant to the same four facts the engine
//! needs: where to read from, which transform to apply, what default to use,
//! and which nested schema to recurse into. Transform and nested schema are
//! mutually exclusive by construction.
//!
//! Copyright (c) 2025 Shiftify Team
//! Licensed under the Apache-2.0 license

use super::{FieldDescriptor, NestedSchema};
use crate::transform::Transform;
use serde_json::Value;

/// Effective source path, transform, default and nested schema of a descriptor
#[derive(Debug, Clone, Copy)]
pub struct Interpretation<'a> {
    pub path: &'a str,
    pub transform: Option<&'a Transform>,
    pub default: Option<&'a Value>,
    pub nested: Option<&'a NestedSchema>,
}

impl FieldDescriptor {
    /// Interpret this descriptor for the output field `key`
    pub fn interpret<'a>(&'a self, key: &'a str) -> Interpretation<'a> {
        match self {
            FieldDescriptor::Direct => Interpretation {
                path: key,
                transform: None,
                default: None,
                nested: None,
            },
            FieldDescriptor::Path(path) => Interpretation {
                path,
                transform: None,
                default: None,
                nested: None,
            },
            FieldDescriptor::Nested(rule) => Interpretation {
                path: rule.from.as_deref().unwrap_or(key),
                transform: None,
                default: rule.default.as_ref(),
                nested: Some(&rule.schema),
            },
            FieldDescriptor::Rule(rule) => Interpretation {
                path: rule.from.as_deref().unwrap_or(key),
                transform: rule.transform.as_ref(),
                default: rule.default.as_ref(),
                nested: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldRule, NestedRule, Schema};
    use crate::transform::built_in;
    use serde_json::json;

    #[test]
    fn test_direct_uses_key() {
        let i = FieldDescriptor::Direct.interpret("name");
        assert_eq!(i.path, "name");
        assert!(i.transform.is_none() && i.default.is_none() && i.nested.is_none());
    }

    #[test]
    fn test_path_uses_string() {
        let d = FieldDescriptor::path("user.name");
        let i = d.interpret("username");
        assert_eq!(i.path, "user.name");
        assert!(i.transform.is_none() && i.default.is_none() && i.nested.is_none());
    }

    #[test]
    fn test_rule_falls_back_to_key() {
        let d: FieldDescriptor = FieldRule::new().default(json!("D")).into();
        let i = d.interpret("city");
        assert_eq!(i.path, "city");
        assert_eq!(i.default, Some(&json!("D")));
        assert!(i.nested.is_none());
    }

    #[test]
    fn test_rule_with_transform() {
        let d: FieldDescriptor = FieldRule::new()
            .from("text")
            .transform(built_in::uppercase())
            .into();
        let i = d.interpret("upper");
        assert_eq!(i.path, "text");
        assert_eq!(i.transform.map(Transform::name), Some("uppercase"));
        assert!(i.default.is_none());
    }

    #[test]
    fn test_nested_rule() {
        let d: FieldDescriptor = NestedRule::new(Schema::new().field("city", FieldDescriptor::Direct))
            .default(json!({}))
            .into();
        let i = d.interpret("addr");
        assert_eq!(i.path, "addr");
        assert!(i.transform.is_none());
        assert_eq!(i.default, Some(&json!({})));
        assert!(matches!(i.nested, Some(NestedSchema::Definition(_))));

        let d: FieldDescriptor = NestedRule::new(Schema::new()).from("profile.addr").into();
        assert_eq!(d.interpret("addr").path, "profile.addr");
    }
}
