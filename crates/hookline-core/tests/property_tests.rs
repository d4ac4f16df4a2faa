//! # Property-Based Tests
//!
//! proptest coverage for the resolver's determinism and totality
//! invariants.

use hookline_core::{
    AppDefinition, AppManifest, AssetPath, AssetPolicy, AssetSet, CssVariant, FrameworkVersion,
    HandlerPath, HookRegistry, JsVariant, manifest_from_bytes, manifest_to_bytes,
};
use proptest::prelude::*;

fn definition() -> AppDefinition {
    AppDefinition {
        name: "better_attach".to_string(),
        title: "Better Attach Control".to_string(),
        publisher: "Example Publisher".to_string(),
        description: "Attach control that supports customization.".to_string(),
        icon: "octicon octicon-paperclip".to_string(),
        color: "blue".to_string(),
        email: "dev@example.com".to_string(),
        license: "MIT".to_string(),
        assets: AssetPolicy {
            bundled: AssetSet {
                css: vec![AssetPath::new("better_attach.bundle.css")],
                js: vec![AssetPath::new("better_attach.bundle.js")],
            },
            legacy: AssetSet {
                css: vec![AssetPath::new("/assets/better_attach/css/better_attach.css")],
                js: vec![AssetPath::new("/assets/better_attach/js/better_attach.js")],
            },
            v12_js: vec![AssetPath::new(
                "/assets/better_attach/js/better_attach_v12.js",
            )],
        },
        hooks: HookRegistry::new(
            HandlerPath::new("better_attach.setup.install.after_install"),
            HandlerPath::new("better_attach.setup.install.after_install"),
            HandlerPath::new("better_attach.setup.uninstall.after_uninstall"),
        ),
    }
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// The version gate is total: every major selects exactly one CSS
    /// variant and one JS variant, and the combination is coherent.
    #[test]
    fn selector_total_over_all_majors(major in any::<u32>()) {
        let css = CssVariant::for_major(major);
        let js = JsVariant::for_major(major);

        // A bundled JS host is always a bundled CSS host and vice versa.
        prop_assert_eq!(
            matches!(js, JsVariant::Bundled),
            matches!(css, CssVariant::Bundled)
        );

        let selection = definition().assets.select(major);
        prop_assert!(!selection.css.is_empty());
        prop_assert!(!selection.js.is_empty());
    }

    /// Parsing a well-formed dotted version always recovers the major.
    #[test]
    fn parse_recovers_major(major in 0u32..100_000, minor in 0u32..1000, patch in 0u32..1000) {
        let raw = format!("{major}.{minor}.{patch}");
        let version = FrameworkVersion::parse(&raw).expect("parse");
        prop_assert_eq!(version.major(), major);
        prop_assert_eq!(version.raw(), raw.as_str());
    }

    /// Resolution is deterministic: same inputs, identical manifest.
    #[test]
    fn resolution_deterministic(major in 0u32..1000) {
        let version = FrameworkVersion::from_major(major);
        let def = definition();

        let first = AppManifest::resolve(&def, &version).expect("resolve");
        let second = AppManifest::resolve(&def, &version).expect("resolve");

        prop_assert_eq!(first, second);
    }

    /// Persistence round-trip is bit-exact for any resolvable major.
    #[test]
    fn persistence_roundtrip_bit_exact(major in 0u32..1000) {
        let version = FrameworkVersion::from_major(major);
        let manifest = AppManifest::resolve(&definition(), &version).expect("resolve");

        let bytes1 = manifest_to_bytes(&manifest).expect("serialize");
        let restored = manifest_from_bytes(&bytes1).expect("deserialize");
        let bytes2 = manifest_to_bytes(&restored).expect("serialize again");

        prop_assert_eq!(&manifest, &restored);
        prop_assert_eq!(bytes1, bytes2);
    }

    /// Garbage version strings never parse into a usable version.
    #[test]
    fn garbage_versions_rejected(s in "[a-zA-Z-]{1,20}") {
        let raw = format!("{s}.0.0");
        prop_assert!(FrameworkVersion::parse(&raw).is_err());
    }
}
