//! # Core Type Definitions
//!
//! This module contains the small shared types for the Hookline resolver:
//! - Path newtypes (`AssetPath`, `HandlerPath`)
//! - Error types (`HooklineError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module implement `Ord` so collections built from them
//! iterate in a stable order regardless of insertion order.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::primitives::{MAX_ASSET_PATH_LENGTH, MAX_HANDLER_PATH_LENGTH};

// =============================================================================
// ASSET PATH
// =============================================================================

/// A path to a CSS or JS asset as the host page will reference it.
///
/// Either a bare bundle name (`better_attach.bundle.js`) resolved by the
/// host's asset pipeline, or an absolute `/assets/...` path served verbatim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AssetPath(pub String);

impl AssetPath {
    /// Create a new asset path from a string.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate the path.
    ///
    /// A path is valid if it is non-empty, within length limits, and free of
    /// whitespace and parent-directory components. Anything looser risks the
    /// host emitting a broken `<link>`/`<script>` tag.
    pub fn validate(&self) -> Result<(), HooklineError> {
        if self.0.is_empty() {
            return Err(HooklineError::InvalidAssetPath(
                "asset path is empty".to_string(),
            ));
        }

        if self.0.len() > MAX_ASSET_PATH_LENGTH {
            return Err(HooklineError::InvalidAssetPath(format!(
                "asset path exceeds {} bytes: {}",
                MAX_ASSET_PATH_LENGTH, self.0
            )));
        }

        if self.0.chars().any(char::is_whitespace) {
            return Err(HooklineError::InvalidAssetPath(format!(
                "asset path contains whitespace: {}",
                self.0
            )));
        }

        if self.0.split('/').any(|seg| seg == "..") {
            return Err(HooklineError::InvalidAssetPath(format!(
                "asset path contains parent-directory component: {}",
                self.0
            )));
        }

        Ok(())
    }
}

// =============================================================================
// HANDLER PATH
// =============================================================================

/// A fully qualified identifier for an external lifecycle handler.
///
/// Dotted-segment form, e.g. `my_plugin.setup.install.after_install`.
/// The host resolves and invokes the handler; Hookline only publishes
/// the mapping.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandlerPath(pub String);

impl HandlerPath {
    /// Create a new handler path from a string.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the handler path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate the handler path.
    ///
    /// A handler path is valid if:
    /// - It is non-empty and within length limits
    /// - It has at least two dot-separated segments (module + callable)
    /// - Every segment matches `[A-Za-z_][A-Za-z0-9_]*`
    ///
    /// Returns `HooklineError::InvalidHandlerPath` if validation fails.
    pub fn validate(&self) -> Result<(), HooklineError> {
        if self.0.is_empty() {
            return Err(HooklineError::InvalidHandlerPath(
                "handler path is empty".to_string(),
            ));
        }

        if self.0.len() > MAX_HANDLER_PATH_LENGTH {
            return Err(HooklineError::InvalidHandlerPath(format!(
                "handler path exceeds {} bytes: {}",
                MAX_HANDLER_PATH_LENGTH, self.0
            )));
        }

        let segments: Vec<&str> = self.0.split('.').collect();
        if segments.len() < 2 {
            return Err(HooklineError::InvalidHandlerPath(format!(
                "handler path must have at least two segments: {}",
                self.0
            )));
        }

        for segment in segments {
            if !Self::is_valid_segment(segment) {
                return Err(HooklineError::InvalidHandlerPath(format!(
                    "invalid segment '{}' in handler path: {}",
                    segment, self.0
                )));
            }
        }

        Ok(())
    }

    fn is_valid_segment(segment: &str) -> bool {
        let mut chars = segment.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        if !(first.is_ascii_alphabetic() || first == '_') {
            return false;
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while resolving a plugin manifest.
///
/// - No silent failures
/// - Use `Result<T, HooklineError>` for fallible operations
/// - The core never panics; all errors surface to the caller
#[derive(Debug, Error)]
pub enum HooklineError {
    /// The host framework version string could not be parsed.
    ///
    /// This is a fatal load-time error: any fallback would risk serving
    /// incompatible assets to the browser.
    #[error("Invalid framework version: {0}")]
    InvalidVersion(String),

    /// The plugin definition failed validation.
    #[error("Invalid definition: {0}")]
    InvalidDefinition(String),

    /// A lifecycle handler path is malformed.
    #[error("Invalid handler path: {0}")]
    InvalidHandlerPath(String),

    /// An asset path is malformed.
    #[error("Invalid asset path: {0}")]
    InvalidAssetPath(String),

    /// A serialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// A deserialization error occurred.
    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================
