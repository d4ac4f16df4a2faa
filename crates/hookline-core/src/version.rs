//! # Framework Version Parsing
//!
//! The host framework reports its version as a dotted string
//! (`major.minor.patch...`). Only the leading major integer gates asset
//! selection, so that is all the parser commits to; the raw string is kept
//! for display and serialization.
//!
//! Parsing failure is fatal by policy: a guessed default would silently
//! serve incompatible assets to the browser.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::primitives::MAX_VERSION_STRING_LENGTH;
use crate::types::HooklineError;

// =============================================================================
// FRAMEWORK VERSION
// =============================================================================

/// A host framework version, reduced to the load-bearing major component.
///
/// `major` is always the value [`FrameworkVersion::parse`] derives from
/// `raw`; deserialization re-derives it, so a decoded cache cannot carry
/// an inconsistent pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct FrameworkVersion {
    /// The leading integer before the first `.`.
    major: u32,
    /// The original version string as reported by the host.
    raw: String,
}

impl<'de> Deserialize<'de> for FrameworkVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename = "FrameworkVersion")]
        struct Encoded {
            major: u32,
            raw: String,
        }

        let encoded = Encoded::deserialize(deserializer)?;
        let version = Self::parse(&encoded.raw).map_err(serde::de::Error::custom)?;

        if version.major != encoded.major {
            return Err(serde::de::Error::custom(format!(
                "major {} does not match version string '{}'",
                encoded.major, encoded.raw
            )));
        }

        Ok(version)
    }
}

impl FrameworkVersion {
    /// Parse a version string from the host.
    ///
    /// Surrounding ASCII whitespace is trimmed; the segment before the
    /// first `.` must then parse as an unsigned integer.
    ///
    /// # Errors
    /// Returns `HooklineError::InvalidVersion` if:
    /// - The string is empty or longer than `MAX_VERSION_STRING_LENGTH`
    /// - The leading segment is empty or not an integer
    /// - The leading segment overflows `u32`
    pub fn parse(raw: &str) -> Result<Self, HooklineError> {
        if raw.len() > MAX_VERSION_STRING_LENGTH {
            return Err(HooklineError::InvalidVersion(format!(
                "version string exceeds {} bytes",
                MAX_VERSION_STRING_LENGTH
            )));
        }

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(HooklineError::InvalidVersion(
                "version string is empty".to_string(),
            ));
        }

        let leading = trimmed.split('.').next().unwrap_or(trimmed);

        let major: u32 = leading.parse().map_err(|_| {
            HooklineError::InvalidVersion(format!(
                "leading segment '{}' of '{}' is not an integer",
                leading, trimmed
            ))
        })?;

        Ok(Self {
            major,
            raw: trimmed.to_string(),
        })
    }

    /// Construct a version directly from a major number.
    ///
    /// Useful for hosts that report a bare integer.
    #[must_use]
    pub fn from_major(major: u32) -> Self {
        Self {
            major,
            raw: major.to_string(),
        }
    }

    /// The leading major component.
    #[must_use]
    pub const fn major(&self) -> u32 {
        self.major
    }

    /// The original version string as reported by the host.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl FromStr for FrameworkVersion {
    type Err = HooklineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FrameworkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

// =============================================================================
// TESTS
// =============================================================================
