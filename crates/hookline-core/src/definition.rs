//! # Plugin Definition
//!
//! What a plugin author writes: metadata, the three candidate asset sets,
//! and the lifecycle hook wiring. Usually deserialized from a TOML file in
//! the app layer; the core only models and validates it.

use serde::{Deserialize, Serialize};

use crate::assets::AssetPolicy;
use crate::hooks::HookRegistry;
use crate::primitives::{MAX_DESCRIPTION_LENGTH, MAX_METADATA_FIELD_LENGTH};
use crate::types::HooklineError;

// =============================================================================
// APP DEFINITION
// =============================================================================

/// The author-facing declaration of a plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppDefinition {
    /// Machine name the host registers the plugin under.
    pub name: String,
    /// Human-readable title.
    pub title: String,
    /// Publisher / author line.
    pub publisher: String,
    /// Short description shown in the host's plugin list.
    pub description: String,
    /// Icon identifier in the host's icon vocabulary.
    pub icon: String,
    /// Accent color name or hex value.
    pub color: String,
    /// Contact email.
    pub email: String,
    /// License identifier.
    pub license: String,
    /// The three candidate asset configurations.
    pub assets: AssetPolicy,
    /// Lifecycle hook wiring.
    pub hooks: HookRegistry,
}

impl AppDefinition {
    /// Validate the definition.
    ///
    /// Checks, in order:
    /// - `name` is a non-empty `snake_case` identifier
    /// - all metadata fields are non-empty and within length caps
    /// - every asset path in every candidate set is well-formed
    /// - every hook handler is a fully qualified identifier
    ///
    /// Returns the first failure; a definition that passes resolves against
    /// any parseable host version without further errors.
    pub fn validate(&self) -> Result<(), HooklineError> {
        validate_name(&self.name)?;

        for (field, value) in [
            ("title", &self.title),
            ("publisher", &self.publisher),
            ("icon", &self.icon),
            ("color", &self.color),
            ("email", &self.email),
            ("license", &self.license),
        ] {
            if value.is_empty() {
                return Err(HooklineError::InvalidDefinition(format!(
                    "field '{}' is empty",
                    field
                )));
            }
            if value.len() > MAX_METADATA_FIELD_LENGTH {
                return Err(HooklineError::InvalidDefinition(format!(
                    "field '{}' exceeds {} bytes",
                    field, MAX_METADATA_FIELD_LENGTH
                )));
            }
        }

        if self.description.is_empty() {
            return Err(HooklineError::InvalidDefinition(
                "field 'description' is empty".to_string(),
            ));
        }
        if self.description.len() > MAX_DESCRIPTION_LENGTH {
            return Err(HooklineError::InvalidDefinition(format!(
                "field 'description' exceeds {} bytes",
                MAX_DESCRIPTION_LENGTH
            )));
        }

        self.assets.validate()?;
        self.hooks.validate()?;

        Ok(())
    }
}

/// The plugin name doubles as a module prefix on the host side, so it is
/// held to identifier rules: `[a-z_][a-z0-9_]*`.
fn validate_name(name: &str) -> Result<(), HooklineError> {
    if name.is_empty() {
        return Err(HooklineError::InvalidDefinition(
            "field 'name' is empty".to_string(),
        ));
    }
    if name.len() > MAX_METADATA_FIELD_LENGTH {
        return Err(HooklineError::InvalidDefinition(format!(
            "field 'name' exceeds {} bytes",
            MAX_METADATA_FIELD_LENGTH
        )));
    }

    let mut chars = name.chars();
    let leading_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_lowercase() || c == '_');
    if !leading_ok || !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_') {
        return Err(HooklineError::InvalidDefinition(format!(
            "field 'name' must be a snake_case identifier: {}",
            name
        )));
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
