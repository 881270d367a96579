//! Declarative schema documents
//!
//! Schemas can be authored as JSON or YAML documents using the literal
//! descriptor syntax:
//!
//! ```json
//! {
//!   "id": true,
//!   "username": "user.name",
//!   "email": { "from": "contact.email", "transform": "lowercase" },
//!   "score": { "from": "stats.points", "default": 0 },
//!   "address": { "from": "profile.address", "schema": { "city": true } }
//! }
//! ```
//!
//! Transforms are referenced by name and looked up in a
//! [`TransformRegistry`]. Any other shape is rejected with
//! [`Error::Configuration`] naming the offending key.
//!
//! Copyright (c) 2025 Shiftify Team
//! Licensed under the Apache-2.0 license

use super::{FieldDescriptor, FieldRule, NestedRule, Schema};
use crate::transform::TransformRegistry;
use crate::{Error, Result};
use serde_json::{Map, Value};

const RULE_ATTRIBUTES: &[&str] = &["from", "transform", "default"];
const NESTED_ATTRIBUTES: &[&str] = &["from", "schema", "default"];

impl Schema {
    /// Build a schema from a JSON value
    pub fn from_value(document: &Value, registry: &TransformRegistry) -> Result<Schema> {
        match document {
            Value::Object(map) => parse_schema(map, registry, None),
            _ => Err(Error::configuration(None, "schema document must be an object")),
        }
    }

    /// Build a schema from a JSON string
    pub fn from_json_str(document: &str, registry: &TransformRegistry) -> Result<Schema> {
        let value: Value = serde_json::from_str(document)?;
        Schema::from_value(&value, registry)
    }

    /// Build a schema from a YAML string
    pub fn from_yaml_str(document: &str, registry: &TransformRegistry) -> Result<Schema> {
        let value: Value = serde_yaml::from_str(document)?;
        Schema::from_value(&value, registry)
    }
}

fn parse_schema(
    map: &Map<String, Value>,
    registry: &TransformRegistry,
    parent: Option<&str>,
) -> Result<Schema> {
    let mut schema = Schema::new();
    for (key, raw) in map {
        let qualified = match parent {
            Some(parent) => format!("{}.{}", parent, key),
            None => key.clone(),
        };
        let descriptor = parse_descriptor(&qualified, raw, registry)?;
        schema.insert(key.as_str(), descriptor);
    }
    Ok(schema)
}

fn parse_descriptor(key: &str, raw: &Value, registry: &TransformRegistry) -> Result<FieldDescriptor> {
    match raw {
        Value::Bool(true) => Ok(FieldDescriptor::Direct),
        Value::String(path) => Ok(FieldDescriptor::Path(path.clone())),
        Value::Object(attrs) if attrs.contains_key("schema") => parse_nested(key, attrs, registry),
        Value::Object(attrs) => parse_rule(key, attrs, registry),
        other => Err(Error::configuration(
            Some(key),
            format!(
                "descriptor for '{}' must be true, a path string or an object, got {}",
                key, other
            ),
        )),
    }
}

fn parse_rule(key: &str, attrs: &Map<String, Value>, registry: &TransformRegistry) -> Result<FieldDescriptor> {
    check_attributes(key, attrs, RULE_ATTRIBUTES)?;
    let mut rule = FieldRule::new();
    rule.from = parse_from(key, attrs)?;
    rule.default = attrs.get("default").cloned();
    if let Some(raw) = attrs.get("transform") {
        let name = raw.as_str().ok_or_else(|| {
            Error::configuration(Some(key), format!("'transform' of '{}' must be a transform name", key))
        })?;
        let transform = registry.get(name).ok_or_else(|| {
            Error::configuration(
                Some(key),
                format!(
                    "unknown transform '{}' for '{}' (registered: {})",
                    name,
                    key,
                    registry.names().join(", ")
                ),
            )
        })?;
        rule.transform = Some(transform.clone());
    }
    Ok(FieldDescriptor::Rule(rule))
}

fn parse_nested(key: &str, attrs: &Map<String, Value>, registry: &TransformRegistry) -> Result<FieldDescriptor> {
    check_attributes(key, attrs, NESTED_ATTRIBUTES)?;
    let nested = match attrs.get("schema") {
        Some(Value::Object(map)) => parse_schema(map, registry, Some(key))?,
        _ => {
            return Err(Error::configuration(
                Some(key),
                format!("'schema' of '{}' must be an object", key),
            ))
        }
    };
    let mut rule = NestedRule::new(nested);
    rule.from = parse_from(key, attrs)?;
    rule.default = attrs.get("default").cloned();
    Ok(FieldDescriptor::Nested(rule))
}

fn parse_from(key: &str, attrs: &Map<String, Value>) -> Result<Option<String>> {
    match attrs.get("from") {
        None => Ok(None),
        Some(Value::String(path)) => Ok(Some(path.clone())),
        Some(_) => Err(Error::configuration(
            Some(key),
            format!("'from' of '{}' must be a path string", key),
        )),
    }
}

fn check_attributes(key: &str, attrs: &Map<String, Value>, allowed: &[&str]) -> Result<()> {
    match attrs.keys().find(|name| !allowed.contains(&name.as_str())) {
        Some(unknown) => Err(Error::configuration(
            Some(key),
            format!(
                "unknown attribute '{}' for '{}' (expected one of: {})",
                unknown,
                key,
                allowed.join(", ")
            ),
        )),
        None => Ok(()),
    }
}
