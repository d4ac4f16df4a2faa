//! # Serialization Formats
//!
//! Byte-level formats for resolved manifests. Pure transformations only;
//! file I/O lives in the app layer.

pub mod persistence;

pub use persistence::{PersistenceHeader, manifest_from_bytes, manifest_to_bytes};
