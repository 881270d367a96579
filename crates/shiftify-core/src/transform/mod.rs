//! Field transform functions
//!
//! A transform receives the resolved (or defaulted) value of a field together
//! with the full input record, and produces the value stored in the output.
//!
//! # Module Organization
//!
//! - [`types`] - the [`Transform`] callable and its signature
//! - [`registry`] - name-based lookup used by declarative schemas
//! - [`built_in`] - pre-configured transforms for common conversions
//!
//! # Examples
//!
//! ```
//! use shiftify_core::transform::{built_in, Transform};
//! use serde_json::json;
//!
//! let upper = built_in::uppercase();
//! let out = upper.apply(Some(&json!("hi")), &json!({})).unwrap();
//! assert_eq!(out, Some(json!("HI")));
//!
//! let doubled = Transform::present("double", |v, _ctx| {
//!     Ok(json!(v.as_i64().unwrap_or_default() * 2))
//! });
//! assert_eq!(doubled.apply(None, &json!({})).unwrap(), None);
//! ```
//!
//! Copyright (c) 2025 Shiftify Team
//! Licensed under the Apache-2.0 license

pub mod types;

pub mod registry;

pub mod built_in;

pub use registry::TransformRegistry;
pub use types::{Transform, TransformFn};
