//! # hookline-core
//!
//! The deterministic manifest resolver for Hookline - THE LOGIC.
//!
//! A plugin for a web application framework declares metadata, candidate
//! asset bundles, and lifecycle hook wiring. The host framework reports a
//! version; this crate resolves the declaration against that version into
//! an immutable [`AppManifest`] the host's plugin loader consumes.
//!
//! ## Architectural Constraints
//!
//! The core:
//! - Is pure: no file I/O, no async, no network dependencies
//! - Is deterministic: the same definition and host version always
//!   resolve to the same manifest, byte for byte
//! - Never invokes a lifecycle handler; it only publishes the mapping
//! - Fails loudly: a malformed host version is a fatal resolution error,
//!   never a silent fallback to a default asset set

// =============================================================================
// MODULES
// =============================================================================

pub mod assets;
pub mod definition;
pub mod formats;
pub mod hooks;
pub mod manifest;
pub mod primitives;
pub mod types;
pub mod version;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{AssetPath, HandlerPath, HooklineError};

// =============================================================================
// RE-EXPORTS: Resolver
// =============================================================================

pub use assets::{AssetPolicy, AssetSelection, AssetSet, CssVariant, JsVariant};
pub use definition::AppDefinition;
pub use hooks::{HookRegistry, LifecycleEvent};
pub use manifest::AppManifest;
pub use version::FrameworkVersion;

// =============================================================================
// RE-EXPORTS: Formats (from formats module)
// =============================================================================

pub use formats::{PersistenceHeader, manifest_from_bytes, manifest_to_bytes};
