//! # Persistence Format
//!
//! Binary serialization for resolved manifests, so a host loader can cache
//! a resolution result and reload it without re-reading the definition.
//!
//! Format: Header (5 bytes) + postcard-serialized manifest data.
//! - 4 bytes: Magic ("HKLN")
//! - 1 byte: Version
//!
//! ## Security
//!
//! Pre-deserialization validation guards against corrupted or hostile
//! input:
//! - Maximum payload size limit (`MAX_PERSISTENCE_PAYLOAD_SIZE`)
//! - Header validation before payload parsing
//! - Graceful error handling for truncated data

use crate::manifest::AppManifest;
use crate::primitives;
use crate::types::HooklineError;

// =============================================================================
// SECURITY LIMITS
// =============================================================================

/// Maximum allowed payload size for the persistence format.
///
/// A resolved manifest is a few kilobytes of strings; 16 MB is a generous
/// upper bound. Validated BEFORE attempting deserialization to prevent
/// allocation-based memory exhaustion.
pub const MAX_PERSISTENCE_PAYLOAD_SIZE: usize = 16 * 1024 * 1024; // 16 MB

/// Minimum valid file size (header only).
const MIN_FILE_SIZE: usize = 5;

// =============================================================================
// FILE HEADER
// =============================================================================

/// The persistence header precedes all manifest data.
#[derive(Debug, Clone, Copy)]
pub struct PersistenceHeader {
    pub magic: [u8; 4],
    pub version: u8,
}

impl PersistenceHeader {
    /// Create a new header with current format version.
    #[must_use]
    pub fn new() -> Self {
        Self {
            magic: *primitives::MAGIC_BYTES,
            version: primitives::FORMAT_VERSION,
        }
    }

    /// Validate the header.
    pub fn validate(&self) -> Result<(), HooklineError> {
        if &self.magic != primitives::MAGIC_BYTES {
            return Err(HooklineError::DeserializationError(
                "invalid magic bytes".to_string(),
            ));
        }
        if self.version != primitives::FORMAT_VERSION {
            return Err(HooklineError::DeserializationError(format!(
                "unsupported format version: {} (expected {})",
                self.version,
                primitives::FORMAT_VERSION
            )));
        }
        Ok(())
    }

    /// Write header to bytes.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 5] {
        let mut bytes = [0u8; 5];
        bytes[0..4].copy_from_slice(&self.magic);
        bytes[4] = self.version;
        bytes
    }

    /// Read header from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HooklineError> {
        if bytes.len() < MIN_FILE_SIZE {
            return Err(HooklineError::DeserializationError(
                "header too short".to_string(),
            ));
        }
        let mut magic = [0u8; 4];
        magic.copy_from_slice(&bytes[0..4]);
        Ok(Self {
            magic,
            version: bytes[4],
        })
    }
}

impl Default for PersistenceHeader {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// SERIALIZATION FUNCTIONS
// =============================================================================

/// Serialize a resolved manifest to bytes (header + payload).
///
/// This is a pure transformation - no file I/O.
pub fn manifest_to_bytes(manifest: &AppManifest) -> Result<Vec<u8>, HooklineError> {
    let header = PersistenceHeader::new();

    let payload = postcard::to_stdvec(manifest)
        .map_err(|e| HooklineError::SerializationError(e.to_string()))?;

    let mut result = Vec::with_capacity(MIN_FILE_SIZE + payload.len());
    result.extend_from_slice(&header.to_bytes());
    result.extend_from_slice(&payload);

    Ok(result)
}

/// Deserialize a resolved manifest from bytes.
///
/// This is a pure transformation - no file I/O.
///
/// Validates, before touching the payload:
/// 1. Minimum data size (header must be present)
/// 2. Maximum payload size
/// 3. Header magic bytes and version
pub fn manifest_from_bytes(bytes: &[u8]) -> Result<AppManifest, HooklineError> {
    if bytes.len() < MIN_FILE_SIZE {
        return Err(HooklineError::DeserializationError(
            "data too short: minimum 5 bytes required".to_string(),
        ));
    }

    if bytes.len() > MAX_PERSISTENCE_PAYLOAD_SIZE {
        return Err(HooklineError::DeserializationError(format!(
            "data size {} bytes exceeds maximum allowed {} bytes",
            bytes.len(),
            MAX_PERSISTENCE_PAYLOAD_SIZE
        )));
    }

    let header = PersistenceHeader::from_bytes(bytes)?;
    header.validate()?;

    let payload = &bytes[MIN_FILE_SIZE..];
    let manifest: AppManifest = postcard::from_bytes(payload).map_err(|e| {
        HooklineError::DeserializationError(format!("failed to deserialize manifest data: {}", e))
    })?;

    Ok(manifest)
}

// =============================================================================
// TESTS
// =============================================================================
