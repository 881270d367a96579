//! Shift engine
//!
//! An [`Engine`] owns a schema and its options and turns input records into
//! records of the schema's shape. For every output key, in schema order, it
//! resolves the source path, substitutes the default when the path is absent,
//! then either applies the transform or shifts the value through a nested
//! schema. In passthrough mode, input fields no descriptor mentions are
//! copied through unchanged.
//!
//! Engines are immutable. Nested schema definitions are compiled once when
//! the owning engine is built, and [`Engine::extend`] returns a new engine
//! over the merged schema.
//!
//! # Examples
//!
//! ```
//! use shiftify_core::{define_schema, FieldDescriptor, FieldRule, Schema, ShiftOptions};
//! use serde_json::json;
//!
//! let engine = define_schema(
//!     Schema::new()
//!         .field("username", "user.name")
//!         .field("city", FieldRule::new().from("address.city").default(json!("Unknown"))),
//!     ShiftOptions::default(),
//! );
//!
//! let out = engine.shift(&json!({"user": {"name": "Bob"}, "address": {}})).unwrap();
//! assert_eq!(out, json!({"username": "Bob", "city": "Unknown"}));
//! ```
//!
//! Copyright (c) 2025 Shiftify Team
//! Licensed under the Apache-2.0 license

pub mod diagnostics;
pub mod options;


pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticCode, DiagnosticSink, LogSink};
pub use options::{Mode, ShiftOptions};

use crate::path;
use crate::schema::{NestedSchema, Schema};
use crate::transform::Transform;
use crate::{Error, Result};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Anything that can shift records
///
/// Nested descriptors accept either a raw schema or any `Shifter`, so a
/// prebuilt engine (or a custom implementation) can be reused as a nested
/// schema.
pub trait Shifter: fmt::Debug + Send + Sync {
    /// Shift a single record
    fn shift(&self, input: &Value) -> Result<Value>;

    /// Shift every record, preserving order and length
    fn shift_many(&self, inputs: &[Value]) -> Result<Vec<Value>> {
        inputs.iter().map(|input| self.shift(input)).collect()
    }
}

/// Build an engine from a schema and options
pub fn define_schema(schema: Schema, options: ShiftOptions) -> Engine {
    Engine::new(schema, options)
}

/// What to do with a field's resolved value
#[derive(Debug, Clone)]
enum FieldAction {
    Copy,
    Transform(Transform),
    Nested(Arc<dyn Shifter>),
}

/// A descriptor reduced to its interpretation, ready to run
#[derive(Debug, Clone)]
struct CompiledField {
    key: String,
    path: String,
    default: Option<Value>,
    action: FieldAction,
}

/// Immutable schema-driven record transformer
#[derive(Clone)]
pub struct Engine {
    schema: Schema,
    options: ShiftOptions,
    sink: Arc<dyn DiagnosticSink>,
    fields: Arc<[CompiledField]>,
    mapped_keys: Arc<HashSet<String>>,
}

impl Engine {
    /// Create an engine reporting diagnostics through [`LogSink`]
    pub fn new(schema: Schema, options: ShiftOptions) -> Self {
        Self::compile(schema, options, Arc::new(LogSink))
    }

    /// Start building an engine with non-default options or sink
    pub fn builder(schema: Schema) -> EngineBuilder {
        EngineBuilder::new(schema)
    }

    fn compile(schema: Schema, options: ShiftOptions, sink: Arc<dyn DiagnosticSink>) -> Self {
        let fields: Vec<CompiledField> = schema
            .iter()
            .map(|(key, descriptor)| {
                let interpretation = descriptor.interpret(key);
                let action = match (interpretation.transform, interpretation.nested) {
                    (Some(transform), _) => FieldAction::Transform(transform.clone()),
                    (None, Some(NestedSchema::Definition(nested))) => FieldAction::Nested(Arc::new(
                        Engine::compile(nested.clone(), options, Arc::clone(&sink)),
                    )),
                    (None, Some(NestedSchema::Engine(nested))) => FieldAction::Nested(Arc::clone(nested)),
                    (None, None) => FieldAction::Copy,
                };
                CompiledField {
                    key: key.to_string(),
                    path: interpretation.path.to_string(),
                    default: interpretation.default.cloned(),
                    action,
                }
            })
            .collect();
        let mapped_keys: HashSet<String> = schema.keys().map(str::to_string).collect();

        log::debug!(
            "Compiled schema with {} field(s) (mode: {}, strict: {})",
            fields.len(),
            options.mode,
            options.strict
        );

        Self {
            schema,
            options,
            sink,
            fields: fields.into(),
            mapped_keys: Arc::new(mapped_keys),
        }
    }

    /// The schema this engine was built from
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The options this engine was built with
    pub fn options(&self) -> ShiftOptions {
        self.options
    }

    /// Shift a single record
    ///
    /// Fields that end up undefined are left out of the output object. Errors
    /// come only from transforms (see [`Error::Transform`]).
    pub fn shift(&self, input: &Value) -> Result<Value> {
        let mut output = Map::new();

        for field in self.fields.iter() {
            if let Some(value) = self.resolve_field(field, input)? {
                output.insert(field.key.clone(), value);
            }
        }

        if self.options.is_passthrough() {
            if let Value::Object(record) = input {
                for (key, value) in record {
                    // Mapped keys stay out even when they resolved to undefined
                    if !self.mapped_keys.contains(key) && !output.contains_key(key) {
                        output.insert(key.clone(), value.clone());
                    }
                }
            }
        }

        Ok(Value::Object(output))
    }

    /// Shift every record, preserving order and length
    pub fn shift_many(&self, inputs: &[Value]) -> Result<Vec<Value>> {
        inputs.iter().map(|input| self.shift(input)).collect()
    }

    /// Build a new engine over this schema merged with `schemas`
    ///
    /// Later schemas win on key collisions. Options and diagnostic sink are
    /// carried over; this engine is left untouched.
    pub fn extend<'a, I>(&self, schemas: I) -> Engine
    where
        I: IntoIterator<Item = &'a Schema>,
    {
        let merged = self.schema.merge(schemas);
        log::debug!(
            "Extending schema of {} field(s) to {} field(s)",
            self.schema.len(),
            merged.len()
        );
        Self::compile(merged, self.options, Arc::clone(&self.sink))
    }

    fn resolve_field(&self, field: &CompiledField, input: &Value) -> Result<Option<Value>> {
        let value_or_default = path::resolve(input, &field.path).or(field.default.as_ref());

        let value = match (&field.action, value_or_default) {
            // null is present but never shifted
            (FieldAction::Nested(nested), Some(value)) if !value.is_null() => Some(match value {
                Value::Array(items) => Value::Array(nested.shift_many(items)?),
                other => nested.shift(other)?,
            }),
            (FieldAction::Transform(transform), value) => {
                transform
                    .apply(value, input)
                    .map_err(|source| Error::Transform {
                        key: field.key.clone(),
                        transform: transform.name().to_string(),
                        source,
                    })?
            }
            (_, value) => value.cloned(),
        };

        if value.is_none() && self.options.strict {
            self.sink
                .report(&Diagnostic::missing_value(&field.key, &field.path));
        }

        Ok(value)
    }
}

impl Shifter for Engine {
    fn shift(&self, input: &Value) -> Result<Value> {
        Engine::shift(self, input)
    }

    fn shift_many(&self, inputs: &[Value]) -> Result<Vec<Value>> {
        Engine::shift_many(self, inputs)
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("keys", &self.schema.keys().collect::<Vec<_>>())
            .field("options", &self.options)
            .field("sink", &self.sink)
            .finish()
    }
}

/// Builder for [`Engine`]
#[derive(Debug)]
pub struct EngineBuilder {
    schema: Schema,
    options: ShiftOptions,
    sink: Option<Arc<dyn DiagnosticSink>>,
}

impl EngineBuilder {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            options: ShiftOptions::default(),
            sink: None,
        }
    }

    /// Set all options at once
    pub fn options(mut self, options: ShiftOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the mode
    pub fn mode(mut self, mode: Mode) -> Self {
        self.options.mode = mode;
        self
    }

    /// Enable or disable strict diagnostics
    pub fn strict(mut self, strict: bool) -> Self {
        self.options.strict = strict;
        self
    }

    /// Route diagnostics to `sink` instead of the log
    pub fn sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn build(self) -> Engine {
        let sink = self.sink.unwrap_or_else(|| Arc::new(LogSink));
        Engine::compile(self.schema, self.options, sink)
    }
}
