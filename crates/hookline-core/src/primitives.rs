//! # Innate Primitives
//!
//! Hardcoded constants for the Hookline resolver.
//!
//! The resolver ships fixed logic and zero data: these values are compiled
//! into the binary and are immutable at runtime.

/// Smallest major version that receives the bundled single-file assets.
///
/// Hosts at or above this major run an asset pipeline that resolves bare
/// bundle names (`*.bundle.css` / `*.bundle.js`).
pub const BUNDLED_MIN_MAJOR: u32 = 14;

/// Smallest major version that receives the legacy (non-v12) JS path.
///
/// Below this major the host lacks the modern widget APIs and gets the
/// distinct v12 JS variant instead. CSS is unaffected by this threshold.
pub const LEGACY_JS_MIN_MAJOR: u32 = 13;

/// Magic bytes for the Hookline binary manifest format header.
///
/// - File Header = Magic Bytes ("HKLN") + Version (u8) before payload.
pub const MAGIC_BYTES: &[u8; 4] = b"HKLN";

/// Current serialization format version.
///
/// Increment this when making breaking changes to the serialization format.
pub const FORMAT_VERSION: u8 = 1;

// =============================================================================
// INPUT VALIDATION LIMITS
// =============================================================================

/// Maximum length for metadata field strings (name, title, publisher, ...).
///
/// Fields longer than this are rejected at definition validation.
pub const MAX_METADATA_FIELD_LENGTH: usize = 256;

/// Maximum length for the free-form description field.
pub const MAX_DESCRIPTION_LENGTH: usize = 4096;

/// Maximum length for a single asset path.
pub const MAX_ASSET_PATH_LENGTH: usize = 1024;

/// Maximum number of assets per kind (CSS or JS) in one candidate set.
///
/// Definitions above this are almost certainly malformed and would bloat
/// every page the host serves.
pub const MAX_ASSETS_PER_KIND: usize = 64;

/// Maximum length for a fully qualified handler path.
pub const MAX_HANDLER_PATH_LENGTH: usize = 512;

/// Maximum length accepted for a host framework version string.
///
/// Version strings are short; anything beyond this is rejected before
/// parsing to bound work on hostile input.
pub const MAX_VERSION_STRING_LENGTH: usize = 128;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_ordered() {
        // The bundled gate must sit strictly above the legacy JS gate.
        assert!(BUNDLED_MIN_MAJOR > LEGACY_JS_MIN_MAJOR);
    }

    #[test]
    fn magic_bytes_correct() {
        assert_eq!(MAGIC_BYTES, b"HKLN");
    }
}
