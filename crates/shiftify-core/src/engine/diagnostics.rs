//! Strict-mode diagnostic channel
//!
//! When an engine runs in strict mode, every output field that ends up
//! undefined is reported to the engine's [`DiagnosticSink`]. Reports are
//! advisory: they never abort a shift and never appear in the output.
//!
//! [`LogSink`] forwards reports to the `log` facade at warn level and is the
//! default. [`CollectingSink`] keeps them in memory for inspection.
//!
//! Copyright (c) 2025 Shiftify Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Mutex;

/// Log target used by [`LogSink`]
pub const LOG_TARGET: &str = "shiftify";

/// Kind of diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticCode {
    /// Field resolved to undefined after defaults and transform
    MissingValue,
}

/// A single advisory report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    /// Output key
    pub key: String,
    /// Source path that was attempted
    pub path: String,
}

impl Diagnostic {
    pub fn missing_value(key: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code: DiagnosticCode::MissingValue,
            key: key.into(),
            path: path.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            DiagnosticCode::MissingValue => write!(
                f,
                "[shiftify] Missing value for \"{}\" (from \"{}\")",
                self.key, self.path
            ),
        }
    }
}

/// Receiver of strict-mode diagnostics
pub trait DiagnosticSink: fmt::Debug + Send + Sync {
    fn report(&self, diagnostic: &Diagnostic);
}

/// Sink writing diagnostics through `log::warn!`
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: &Diagnostic) {
        log::warn!(target: LOG_TARGET, "{}", diagnostic);
    }
}

/// Sink keeping diagnostics in memory, in report order
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        match self.diagnostics.lock() {
            Ok(d) => d.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Remove and return everything reported so far
    pub fn take(&self) -> Vec<Diagnostic> {
        match self.diagnostics.lock() {
            Ok(mut d) => std::mem::take(&mut *d),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    pub fn len(&self) -> usize {
        self.diagnostics().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        if let Ok(mut d) = self.diagnostics.lock() {
            d.push(diagnostic.clone());
        }
    }
}
