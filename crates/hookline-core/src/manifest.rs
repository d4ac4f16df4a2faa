//! # Resolved Manifest
//!
//! The immutable record the host's plugin loader consumes: metadata,
//! asset lists already selected for the host version, and the lifecycle
//! hook wiring. Built once by [`AppManifest::resolve`]; no mutation API
//! exists afterwards.

use serde::{Deserialize, Serialize};

use crate::assets::AssetSelection;
use crate::definition::AppDefinition;
use crate::hooks::HookRegistry;
use crate::types::{AssetPath, HooklineError};
use crate::version::FrameworkVersion;

// =============================================================================
// APP MANIFEST
// =============================================================================

/// A plugin manifest resolved against one concrete host version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppManifest {
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
    /// The host version this manifest was resolved for.
    pub host_version: FrameworkVersion,
    /// CSS assets to include, in order.
    pub include_css: Vec<AssetPath>,
    /// JS assets to include, in order.
    pub include_js: Vec<AssetPath>,
    /// Lifecycle hook wiring for the host to resolve and call.
    pub hooks: HookRegistry,
}

impl AppManifest {
    /// Resolve a definition against a host version.
    ///
    /// Validates the definition first, then selects the asset lists for
    /// the host's major version and assembles the manifest. The result is
    /// computed once and never mutated afterwards.
    ///
    /// # Errors
    /// Propagates any `HooklineError` from definition validation. A
    /// definition that passed [`AppDefinition::validate`] cannot fail here.
    pub fn resolve(
        definition: &AppDefinition,
        host_version: &FrameworkVersion,
    ) -> Result<Self, HooklineError> {
        definition.validate()?;

        let AssetSelection { css, js } = definition.assets.select(host_version.major());

        Ok(Self {
            name: definition.name.clone(),
            title: definition.title.clone(),
            publisher: definition.publisher.clone(),
            description: definition.description.clone(),
            icon: definition.icon.clone(),
            color: definition.color.clone(),
            email: definition.email.clone(),
            license: definition.license.clone(),
            host_version: host_version.clone(),
            include_css: css,
            include_js: js,
            hooks: definition.hooks.clone(),
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
