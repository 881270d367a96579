//! Shiftify Core - declarative object-shape transformer
//!
//! This crate reshapes nested JSON records into consistent application-facing
//! shapes. A [`Schema`] describes, for each output key, where its value comes
//! from: the same key, a dotted path, a path with default and transform, or a
//! nested schema applied to a sub-record or a list of sub-records.
//!
//! # Main Components
//!
//! - **Path Resolution**: dotted-path lookup distinguishing absence from `null`
//! - **Schemas**: typed field descriptors, composition and declarative documents
//! - **Transforms**: named transform functions and a registry of built-ins
//! - **Shift Engine**: immutable engines for single and batch shifting
//! - **Diagnostics**: injectable sink for strict-mode missing-value reports
//!
//! # Example
//!
//! ```
//! use shiftify_core::{define_schema, FieldDescriptor, NestedRule, Schema, ShiftOptions};
//! use serde_json::json;
//!
//! fn example() -> shiftify_core::Result<()> {
//!     let address = Schema::new()
//!         .field("city", FieldDescriptor::Direct)
//!         .field("country", shiftify_core::FieldRule::new().default(json!("X")));
//!     let engine = define_schema(
//!         Schema::new().field("addr", NestedRule::new(address)),
//!         ShiftOptions::default(),
//!     );
//!
//!     let out = engine.shift(&json!({"addr": {"city": "Rio"}}))?;
//!     assert_eq!(out, json!({"addr": {"city": "Rio", "country": "X"}}));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! Copyright (c) 2025 Shiftify Team
//! Licensed under the Apache-2.0 license

pub mod engine;
pub mod error;
pub mod path;
pub mod schema;
pub mod transform;

// Re-export main types for convenience
pub use engine::{
    define_schema, CollectingSink, Diagnostic, DiagnosticCode, DiagnosticSink, Engine,
    EngineBuilder, LogSink, Mode, ShiftOptions, Shifter,
};
pub use error::{Error, Result};
pub use schema::{FieldDescriptor, FieldRule, Interpretation, NestedRule, NestedSchema, Schema};
pub use transform::{Transform, TransformRegistry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }
}
