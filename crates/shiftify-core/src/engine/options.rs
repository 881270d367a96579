//! Engine options
//!
//! Copyright (c) 2025 Shiftify Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether input fields without a descriptor reach the output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Only described fields are produced
    #[default]
    Explicit,
    /// Undescribed input fields are copied through unchanged
    Passthrough,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Explicit => write!(f, "explicit"),
            Mode::Passthrough => write!(f, "passthrough"),
        }
    }
}

/// Options shared by an engine and every nested engine it builds
///
/// Missing attributes in a serialized form fall back to the defaults,
/// `{ mode: explicit, strict: true }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftOptions {
    pub mode: Mode,
    /// Report fields that end up undefined
    pub strict: bool,
}

impl Default for ShiftOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Explicit,
            strict: true,
        }
    }
}

impl ShiftOptions {
    /// Default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Default options in passthrough mode
    pub fn passthrough() -> Self {
        Self::default().with_mode(Mode::Passthrough)
    }

    /// Set the mode
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Enable or disable missing-value diagnostics
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_passthrough(&self) -> bool {
        self.mode == Mode::Passthrough
    }
}
