//! Built-in transforms for common conversions
//!
//! Each built-in only runs on present values. A value of the wrong type is
//! reported as an error rather than silently coerced.
//!
//! Copyright (c) 2025 Shiftify Team
//! Licensed under the Apache-2.0 license

use super::types::Transform;
use anyhow::{anyhow, bail};
use serde_json::{Number, Value};

/// Names of every built-in, in registration order
pub const BUILT_IN_NAMES: &[&str] = &[
    "uppercase",
    "lowercase",
    "trim",
    "to_string",
    "to_number",
    "to_boolean",
];

/// All built-in transforms
pub fn all() -> Vec<Transform> {
    vec![
        uppercase(),
        lowercase(),
        trim(),
        to_string(),
        to_number(),
        to_boolean(),
    ]
}

/// Uppercase a string value
pub fn uppercase() -> Transform {
    Transform::present("uppercase", |value, _| {
        Ok(Value::String(expect_str(value, "uppercase")?.to_uppercase()))
    })
}

/// Lowercase a string value
pub fn lowercase() -> Transform {
    Transform::present("lowercase", |value, _| {
        Ok(Value::String(expect_str(value, "lowercase")?.to_lowercase()))
    })
}

/// Strip leading and trailing whitespace from a string value
pub fn trim() -> Transform {
    Transform::present("trim", |value, _| {
        Ok(Value::String(expect_str(value, "trim")?.trim().to_string()))
    })
}

/// Render a string, number or boolean as a string
pub fn to_string() -> Transform {
    Transform::present("to_string", |value, _| match value {
        Value::String(_) => Ok(value.clone()),
        Value::Number(n) => Ok(Value::String(n.to_string())),
        Value::Bool(b) => Ok(Value::String(b.to_string())),
        other => bail!("cannot convert {} to string", type_name(other)),
    })
}

/// Parse a string into a number; numbers pass through
pub fn to_number() -> Transform {
    Transform::present("to_number", |value, _| match value {
        Value::Number(_) => Ok(value.clone()),
        Value::String(s) => parse_number(s.trim())
            .ok_or_else(|| anyhow!("cannot convert string '{}' to number", s)),
        other => bail!("cannot convert {} to number", type_name(other)),
    })
}

/// Interpret a string or number as a boolean; booleans pass through
pub fn to_boolean() -> Transform {
    Transform::present("to_boolean", |value, _| match value {
        Value::Bool(_) => Ok(value.clone()),
        Value::Number(n) => Ok(Value::Bool(n.as_f64().is_some_and(|f| f != 0.0))),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(Value::Bool(true)),
            "false" | "no" | "0" => Ok(Value::Bool(false)),
            _ => bail!("cannot convert string '{}' to boolean", s),
        },
        other => bail!("cannot convert {} to boolean", type_name(other)),
    })
}

fn expect_str<'a>(value: &'a Value, transform: &str) -> anyhow::Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| anyhow!("{} expects a string, got {}", transform, type_name(value)))
}

fn parse_number(s: &str) -> Option<Value> {
    if let Ok(i) = s.parse::<i64>() {
        return Some(Value::Number(i.into()));
    }
    s.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(t: &Transform, v: Value) -> anyhow::Result<Option<Value>> {
        t.apply(Some(&v), &json!({}))
    }

    #[test]
    fn test_case_transforms() {
        assert_eq!(run(&uppercase(), json!("hi")).unwrap(), Some(json!("HI")));
        assert_eq!(run(&lowercase(), json!("HeLLo")).unwrap(), Some(json!("hello")));
        assert_eq!(run(&trim(), json!("  x ")).unwrap(), Some(json!("x")));
        assert!(run(&uppercase(), json!(1)).is_err());
    }

    #[test]
    fn test_to_number() {
        assert_eq!(run(&to_number(), json!("42")).unwrap(), Some(json!(42)));
        assert_eq!(run(&to_number(), json!("0.7")).unwrap(), Some(json!(0.7)));
        assert_eq!(run(&to_number(), json!(3)).unwrap(), Some(json!(3)));
        assert!(run(&to_number(), json!("abc")).is_err());
        assert!(run(&to_number(), json!(null)).is_err());
    }

    #[test]
    fn test_to_string() {
        assert_eq!(run(&to_string(), json!(42)).unwrap(), Some(json!("42")));
        assert_eq!(run(&to_string(), json!(true)).unwrap(), Some(json!("true")));
        assert!(run(&to_string(), json!([1])).is_err());
    }

    #[test]
    fn test_to_boolean() {
        assert_eq!(run(&to_boolean(), json!("Yes")).unwrap(), Some(json!(true)));
        assert_eq!(run(&to_boolean(), json!("0")).unwrap(), Some(json!(false)));
        assert_eq!(run(&to_boolean(), json!(2)).unwrap(), Some(json!(true)));
        assert!(run(&to_boolean(), json!("maybe")).is_err());
    }

    #[test]
    fn test_absent_passes_through() {
        for t in all() {
            assert_eq!(t.apply(None, &json!({})).unwrap(), None, "{}", t.name());
        }
    }

    #[test]
    fn test_names_match() {
        let names: Vec<String> = all().iter().map(|t| t.name().to_string()).collect();
        assert_eq!(names, BUILT_IN_NAMES);
    }
}
