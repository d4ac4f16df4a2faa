//! # Version-Gated Asset Selection
//!
//! A plugin ships three candidate asset configurations and the host's major
//! version picks exactly one combination:
//!
//! - major >= 14: the host's asset pipeline resolves bare bundle names, so
//!   both CSS and JS come from the `bundled` set.
//! - major == 13: no bundler; the legacy unbundled CSS and JS paths.
//! - major <= 12: legacy CSS, but a distinct v12 JS build that avoids
//!   widget APIs the older host lacks.
//!
//! Selection is a pure function of the major version. No I/O happens here.

use serde::{Deserialize, Serialize};

use crate::primitives::{BUNDLED_MIN_MAJOR, LEGACY_JS_MIN_MAJOR, MAX_ASSETS_PER_KIND};
use crate::types::{AssetPath, HooklineError};

// =============================================================================
// ASSET SET
// =============================================================================

/// An ordered pair of CSS and JS asset lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AssetSet {
    /// CSS assets, in include order.
    #[serde(default)]
    pub css: Vec<AssetPath>,
    /// JS assets, in include order.
    #[serde(default)]
    pub js: Vec<AssetPath>,
}

impl AssetSet {
    /// Validate every path in the set and the per-kind count caps.
    pub fn validate(&self) -> Result<(), HooklineError> {
        if self.css.len() > MAX_ASSETS_PER_KIND || self.js.len() > MAX_ASSETS_PER_KIND {
            return Err(HooklineError::InvalidDefinition(format!(
                "asset set exceeds {} entries per kind",
                MAX_ASSETS_PER_KIND
            )));
        }

        for path in self.css.iter().chain(self.js.iter()) {
            path.validate()?;
        }

        Ok(())
    }
}

// =============================================================================
// ASSET POLICY
// =============================================================================

/// The three candidate asset configurations a plugin author declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetPolicy {
    /// Single-file bundles for hosts with an asset pipeline (major >= 14).
    pub bundled: AssetSet,
    /// Unbundled source paths for older hosts.
    pub legacy: AssetSet,
    /// The distinct JS build served to hosts at major <= 12.
    /// CSS has no v12 variant; the legacy CSS is shared.
    #[serde(default)]
    pub v12_js: Vec<AssetPath>,
}

impl AssetPolicy {
    /// Validate all candidate sets.
    pub fn validate(&self) -> Result<(), HooklineError> {
        self.bundled.validate()?;
        self.legacy.validate()?;

        if self.v12_js.len() > MAX_ASSETS_PER_KIND {
            return Err(HooklineError::InvalidDefinition(format!(
                "v12 JS set exceeds {} entries",
                MAX_ASSETS_PER_KIND
            )));
        }
        for path in &self.v12_js {
            path.validate()?;
        }

        Ok(())
    }

    /// Select the asset lists for a host major version.
    ///
    /// Total over all majors: exactly one CSS variant and one JS variant
    /// is ever returned.
    #[must_use]
    pub fn select(&self, major: u32) -> AssetSelection {
        let css = match CssVariant::for_major(major) {
            CssVariant::Bundled => self.bundled.css.clone(),
            CssVariant::Legacy => self.legacy.css.clone(),
        };

        let js = match JsVariant::for_major(major) {
            JsVariant::Bundled => self.bundled.js.clone(),
            JsVariant::Legacy => self.legacy.js.clone(),
            JsVariant::LegacyV12 => self.v12_js.clone(),
        };

        AssetSelection { css, js }
    }
}

/// The asset lists chosen for one concrete host version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSelection {
    /// CSS assets the host should include.
    pub css: Vec<AssetPath>,
    /// JS assets the host should include.
    pub js: Vec<AssetPath>,
}

// =============================================================================
// VARIANT GATES
// =============================================================================

/// Which CSS candidate a host major selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CssVariant {
    /// The single-file CSS bundle.
    Bundled,
    /// The unbundled legacy CSS path.
    Legacy,
}

impl CssVariant {
    /// Pure gate: bundled at or above `BUNDLED_MIN_MAJOR`, legacy below.
    #[must_use]
    pub const fn for_major(major: u32) -> Self {
        if major >= BUNDLED_MIN_MAJOR {
            Self::Bundled
        } else {
            Self::Legacy
        }
    }
}

/// Which JS candidate a host major selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JsVariant {
    /// The single-file JS bundle.
    Bundled,
    /// The unbundled legacy JS path.
    Legacy,
    /// The distinct v12 JS build for majors at or below 12.
    LegacyV12,
}

impl JsVariant {
    /// Pure gate over the two thresholds.
    ///
    /// major >= 14 is bundled, major == 13 is legacy, major <= 12 is the
    /// v12 build. Note major == 12 takes the v12 build: the gate is
    /// `major > 12`, not `major >= 12`.
    #[must_use]
    pub const fn for_major(major: u32) -> Self {
        if major >= BUNDLED_MIN_MAJOR {
            Self::Bundled
        } else if major >= LEGACY_JS_MIN_MAJOR {
            Self::Legacy
        } else {
            Self::LegacyV12
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> AssetPolicy {
        AssetPolicy {
            bundled: AssetSet {
                css: vec![AssetPath::new("plugin.bundle.css")],
                js: vec![AssetPath::new("plugin.bundle.js")],
            },
            legacy: AssetSet {
                css: vec![AssetPath::new("/assets/plugin/css/plugin.css")],
                js: vec![AssetPath::new("/assets/plugin/js/plugin.js")],
            },
            v12_js: vec![AssetPath::new("/assets/plugin/js/plugin_v12.js")],
        }
    }

    #[test]
    fn major_14_selects_bundled() {
        let selection = policy().select(14);
        assert_eq!(selection.css, vec![AssetPath::new("plugin.bundle.css")]);
        assert_eq!(selection.js, vec![AssetPath::new("plugin.bundle.js")]);
    }

    #[test]
    fn major_13_selects_legacy() {
        let selection = policy().select(13);
        assert_eq!(
            selection.css,
            vec![AssetPath::new("/assets/plugin/css/plugin.css")]
        );
        assert_eq!(
            selection.js,
            vec![AssetPath::new("/assets/plugin/js/plugin.js")]
        );
    }

    #[test]
    fn major_12_selects_v12_js_with_legacy_css() {
        let selection = policy().select(12);
        assert_eq!(
            selection.css,
            vec![AssetPath::new("/assets/plugin/css/plugin.css")]
        );
        assert_eq!(
            selection.js,
            vec![AssetPath::new("/assets/plugin/js/plugin_v12.js")]
        );
    }

    #[test]
    fn major_11_selects_v12_js() {
        let selection = policy().select(11);
        assert_eq!(
            selection.js,
            vec![AssetPath::new("/assets/plugin/js/plugin_v12.js")]
        );
    }

    #[test]
    fn gate_boundaries() {
        assert_eq!(JsVariant::for_major(15), JsVariant::Bundled);
        assert_eq!(JsVariant::for_major(14), JsVariant::Bundled);
        assert_eq!(JsVariant::for_major(13), JsVariant::Legacy);
        assert_eq!(JsVariant::for_major(12), JsVariant::LegacyV12);
        assert_eq!(JsVariant::for_major(0), JsVariant::LegacyV12);

        assert_eq!(CssVariant::for_major(14), CssVariant::Bundled);
        assert_eq!(CssVariant::for_major(13), CssVariant::Legacy);
        assert_eq!(CssVariant::for_major(12), CssVariant::Legacy);
    }

    #[test]
    fn validate_rejects_oversized_set() {
        let mut p = policy();
        p.bundled.css = (0..=MAX_ASSETS_PER_KIND)
            .map(|i| AssetPath::new(format!("a{i}.css")))
            .collect();
        assert!(p.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_path() {
        let mut p = policy();
        p.v12_js.push(AssetPath::new(""));
        assert!(p.validate().is_err());
    }

    #[test]
    fn empty_v12_set_is_allowed() {
        // Authors targeting only modern hosts can omit the v12 build.
        let p = AssetPolicy {
            bundled: AssetSet::default(),
            legacy: AssetSet::default(),
            v12_js: Vec::new(),
        };
        assert!(p.validate().is_ok());
        assert!(p.select(11).js.is_empty());
    }
}
