//! # CLI Command Tests
//!
//! Filesystem-level tests of the command implementations, using tempdirs.
//! These exercise the same code paths the binary dispatches to.

use hookline::cli::{HOST_VERSION_ENV, cmd_check, cmd_init, cmd_resolve, load_definition};
use hookline_core::{AssetPath, manifest_from_bytes};
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;

fn scaffold(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("plugin.toml");
    cmd_init(&path, false, false).expect("init");
    path
}

/// Serializes access to the process environment across tests.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Run `f` with `HOOKLINE_HOST_VERSION` set (or removed), restoring the
/// unset state afterwards.
fn with_host_version_env<F: FnOnce()>(value: Option<&str>, f: F) {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    // SAFETY: all tests that touch this variable hold ENV_LOCK, so no
    // other thread reads or writes the environment concurrently.
    unsafe {
        match value {
            Some(v) => std::env::set_var(HOST_VERSION_ENV, v),
            None => std::env::remove_var(HOST_VERSION_ENV),
        }
    }

    f();

    // SAFETY: still under ENV_LOCK.
    unsafe {
        std::env::remove_var(HOST_VERSION_ENV);
    }
}

#[test]
fn init_scaffold_is_a_valid_definition() {
    let dir = TempDir::new().expect("tempdir");
    let path = scaffold(&dir);

    let definition = load_definition(&path).expect("load");
    assert!(definition.validate().is_ok());
    assert_eq!(definition.name, "my_plugin");

    // check runs clean over the scaffold
    cmd_check(&path, false).expect("check");
}

#[test]
fn init_refuses_existing_file_without_force() {
    let dir = TempDir::new().expect("tempdir");
    let path = scaffold(&dir);

    assert!(cmd_init(&path, false, false).is_err());
    assert!(cmd_init(&path, true, false).is_ok());
}

#[test]
fn init_succeeds_in_json_mode() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("plugin.toml");

    cmd_init(&path, false, true).expect("init");
    assert!(load_definition(&path).expect("load").validate().is_ok());
}

#[test]
fn resolve_writes_json_manifest() {
    let dir = TempDir::new().expect("tempdir");
    let definition = scaffold(&dir);
    let output = dir.path().join("manifest.json");

    cmd_resolve(&definition, Some("14.0.0"), Some(output.as_path()), "json", false)
        .expect("resolve");

    let contents = std::fs::read_to_string(&output).expect("read output");
    let json: serde_json::Value = serde_json::from_str(&contents).expect("parse output");

    assert_eq!(json["name"], "my_plugin");
    assert_eq!(json["include_js"][0], "my_plugin.bundle.js");
    assert_eq!(json["include_css"][0], "my_plugin.bundle.css");
}

#[test]
fn resolve_writes_binary_manifest() {
    let dir = TempDir::new().expect("tempdir");
    let definition = scaffold(&dir);
    let output = dir.path().join("manifest.hkln");

    cmd_resolve(&definition, Some("11.2.0"), Some(output.as_path()), "binary", false)
        .expect("resolve");

    let bytes = std::fs::read(&output).expect("read output");
    let manifest = manifest_from_bytes(&bytes).expect("decode");

    assert_eq!(manifest.host_version.major(), 11);
    assert_eq!(
        manifest.include_js,
        vec![AssetPath::new("/assets/my_plugin/js/my_plugin_v12.js")]
    );
}

#[test]
fn resolve_json_mode_to_file_succeeds() {
    let dir = TempDir::new().expect("tempdir");
    let definition = scaffold(&dir);
    let output = dir.path().join("manifest.json");

    cmd_resolve(&definition, Some("13.2.1"), Some(output.as_path()), "json", true)
        .expect("resolve");

    // The file gets the manifest; the summary goes to stdout.
    let contents = std::fs::read_to_string(&output).expect("read output");
    let json: serde_json::Value = serde_json::from_str(&contents).expect("parse output");
    assert_eq!(json["include_js"][0], "/assets/my_plugin/js/my_plugin.js");
}

#[test]
fn resolve_falls_back_to_env_host_version() {
    let dir = TempDir::new().expect("tempdir");
    let definition = scaffold(&dir);
    let output = dir.path().join("manifest.json");

    with_host_version_env(Some("12.9.0"), || {
        cmd_resolve(&definition, None, Some(output.as_path()), "json", false).expect("resolve");
    });

    let contents = std::fs::read_to_string(&output).expect("read output");
    let json: serde_json::Value = serde_json::from_str(&contents).expect("parse output");
    assert_eq!(
        json["include_js"][0],
        "/assets/my_plugin/js/my_plugin_v12.js"
    );
}

#[test]
fn resolve_errors_when_no_host_version_anywhere() {
    let dir = TempDir::new().expect("tempdir");
    let definition = scaffold(&dir);

    with_host_version_env(None, || {
        assert!(cmd_resolve(&definition, None, None, "json", false).is_err());
    });
}

#[test]
fn flag_takes_precedence_over_env_host_version() {
    let dir = TempDir::new().expect("tempdir");
    let definition = scaffold(&dir);
    let output = dir.path().join("manifest.json");

    with_host_version_env(Some("11.0.0"), || {
        cmd_resolve(&definition, Some("14.0.0"), Some(output.as_path()), "json", false)
            .expect("resolve");
    });

    let contents = std::fs::read_to_string(&output).expect("read output");
    let json: serde_json::Value = serde_json::from_str(&contents).expect("parse output");
    assert_eq!(json["include_js"][0], "my_plugin.bundle.js");
}

#[test]
fn resolve_binary_requires_output_path() {
    let dir = TempDir::new().expect("tempdir");
    let definition = scaffold(&dir);

    assert!(cmd_resolve(&definition, Some("14.0.0"), None, "binary", false).is_err());
}

#[test]
fn resolve_rejects_unknown_format() {
    let dir = TempDir::new().expect("tempdir");
    let definition = scaffold(&dir);

    assert!(cmd_resolve(&definition, Some("14.0.0"), None, "yaml", false).is_err());
}

#[test]
fn resolve_rejects_malformed_host_version() {
    let dir = TempDir::new().expect("tempdir");
    let definition = scaffold(&dir);

    assert!(cmd_resolve(&definition, Some("not-a-number.0.0"), None, "json", false).is_err());
}

#[test]
fn load_rejects_missing_file() {
    let dir = TempDir::new().expect("tempdir");
    assert!(load_definition(&dir.path().join("nope.toml")).is_err());
}

#[test]
fn load_rejects_malformed_toml() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "name = ").expect("write");

    assert!(load_definition(&path).is_err());
}

#[test]
fn check_rejects_definition_with_bad_hook() {
    let dir = TempDir::new().expect("tempdir");
    let path = scaffold(&dir);

    let contents = std::fs::read_to_string(&path).expect("read");
    let broken = contents.replace(
        "my_plugin.setup.uninstall.after_uninstall",
        "not a handler",
    );
    std::fs::write(&path, broken).expect("write");

    assert!(cmd_check(&path, false).is_err());
}
