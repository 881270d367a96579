//! Core transform type
//!
//! Copyright (c) 2025 Shiftify Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Signature of a transform function
///
/// The first argument is the resolved value (`None` when absent and no
/// default applied); the second is the full input record being shifted.
/// Returning `Ok(None)` leaves the output field undefined.
pub type TransformFn =
    dyn Fn(Option<&Value>, &Value) -> anyhow::Result<Option<Value>> + Send + Sync;

/// A named, shareable transform function
#[derive(Clone)]
pub struct Transform {
    name: String,
    func: Arc<TransformFn>,
}

impl Transform {
    /// Create a transform that also sees absent values
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(Option<&Value>, &Value) -> anyhow::Result<Option<Value>> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Create a transform that only runs on present values
    ///
    /// Absent values pass through untouched, so the field stays undefined.
    pub fn present<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Value, &Value) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        Self::new(name, move |value, context| match value {
            Some(v) => func(v, context).map(Some),
            None => Ok(None),
        })
    }

    /// Transform name, used in error messages and registry lookup
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the transform
    pub fn apply(&self, value: Option<&Value>, context: &Value) -> anyhow::Result<Option<Value>> {
        (self.func)(value, context)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform").field("name", &self.name).finish()
    }
}

impl PartialEq for Transform {
    fn eq(&self, other: &Self) -> bool {
        // Compare only by name for function pointers
        self.name == other.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_sees_absence() {
        let fallback = Transform::new("fallback", |value, _| {
            Ok(Some(value.cloned().unwrap_or_else(|| json!("none"))))
        });
        assert_eq!(fallback.apply(None, &json!({})).unwrap(), Some(json!("none")));
        assert_eq!(
            fallback.apply(Some(&json!(1)), &json!({})).unwrap(),
            Some(json!(1))
        );
    }

    #[test]
    fn test_context_is_available() {
        let full_name = Transform::present("full_name", |first, ctx| {
            let last = ctx["last"].as_str().unwrap_or_default();
            Ok(json!(format!("{} {}", first.as_str().unwrap_or_default(), last)))
        });
        let ctx = json!({"first": "Ada", "last": "Lovelace"});
        assert_eq!(
            full_name.apply(Some(&json!("Ada")), &ctx).unwrap(),
            Some(json!("Ada Lovelace"))
        );
    }

    #[test]
    fn test_debug_shows_name() {
        let t = Transform::present("noop", |v, _| Ok(v.clone()));
        assert_eq!(format!("{:?}", t), "Transform { name: \"noop\" }");
        assert_eq!(t, t.clone());
    }
}
