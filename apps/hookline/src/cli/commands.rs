//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use hookline_core::{
    AppDefinition, AppManifest, CssVariant, FrameworkVersion, HooklineError, JsVariant,
    manifest_to_bytes,
};
use std::path::{Path, PathBuf};

// =============================================================================
// FILE SIZE LIMITS
// =============================================================================

/// Maximum file size for definition files (1 MB).
///
/// A definition is a page of TOML; anything larger is malformed input.
const MAX_DEFINITION_FILE_SIZE: u64 = 1024 * 1024;

/// Environment variable consulted when `--host-version` is not given.
///
/// Mirrors how the host framework exposes its own version to plugins at
/// load time.
pub const HOST_VERSION_ENV: &str = "HOOKLINE_HOST_VERSION";

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), HooklineError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| HooklineError::IoError(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(HooklineError::IoError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Validate an input file path.
///
/// This function:
/// 1. Canonicalizes the path to resolve symlinks and ".."
/// 2. Ensures the path exists
/// 3. Ensures the path is a file (not a directory)
fn validate_file_path(path: &Path) -> Result<PathBuf, HooklineError> {
    // Canonicalize resolves "..", symlinks, and validates existence
    let canonical = path.canonicalize().map_err(|e| {
        HooklineError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(HooklineError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Validate an output file path.
///
/// For output files, we validate the parent directory exists and keep the
/// original filename under the canonicalized parent.
fn validate_output_path(path: &Path) -> Result<PathBuf, HooklineError> {
    let parent = path.parent().unwrap_or(Path::new("."));
    let parent = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };

    let canonical_parent = parent.canonicalize().map_err(|e| {
        HooklineError::IoError(format!(
            "Invalid output directory '{}': {}",
            parent.display(),
            e
        ))
    })?;

    if !canonical_parent.is_dir() {
        return Err(HooklineError::IoError(format!(
            "Output directory '{}' is not a valid directory",
            parent.display()
        )));
    }

    let filename = path
        .file_name()
        .ok_or_else(|| HooklineError::IoError("Output path has no filename".to_string()))?;

    Ok(canonical_parent.join(filename))
}

/// Load and parse a definition file.
pub fn load_definition(path: &Path) -> Result<AppDefinition, HooklineError> {
    let validated_path = validate_file_path(path)?;
    validate_file_size(&validated_path, MAX_DEFINITION_FILE_SIZE)?;

    let contents = std::fs::read_to_string(&validated_path)
        .map_err(|e| HooklineError::IoError(format!("Read definition: {}", e)))?;

    toml::from_str(&contents).map_err(|e| {
        HooklineError::DeserializationError(format!(
            "Could not parse definition '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Determine the host version from the flag or the environment.
fn resolve_host_version(flag: Option<&str>) -> Result<FrameworkVersion, HooklineError> {
    if let Some(raw) = flag {
        return FrameworkVersion::parse(raw);
    }

    match std::env::var(HOST_VERSION_ENV) {
        Ok(raw) => FrameworkVersion::parse(&raw),
        Err(_) => Err(HooklineError::InvalidVersion(format!(
            "no host version given: pass --host-version or set {}",
            HOST_VERSION_ENV
        ))),
    }
}

// =============================================================================
// RESOLVE COMMAND
// =============================================================================

/// Resolve a definition against a host version and emit the manifest.
pub fn cmd_resolve(
    file: &Path,
    host_version: Option<&str>,
    output: Option<&Path>,
    format: &str,
    json_mode: bool,
) -> Result<(), HooklineError> {
    let definition = load_definition(file)?;
    let version = resolve_host_version(host_version)?;

    tracing::info!(
        "Resolving '{}' against host version {}",
        definition.name,
        version
    );

    let manifest = AppManifest::resolve(&definition, &version)?;

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&manifest)
                .map_err(|e| HooklineError::SerializationError(e.to_string()))?;

            match output {
                Some(path) => {
                    let validated_output = validate_output_path(path)?;
                    std::fs::write(&validated_output, json.as_bytes())
                        .map_err(|e| HooklineError::IoError(format!("Write manifest: {}", e)))?;

                    if json_mode {
                        let summary = serde_json::json!({
                            "output": validated_output.to_string_lossy(),
                            "bytes": json.len(),
                            "host_version": manifest.host_version.raw(),
                        });
                        println!(
                            "{}",
                            serde_json::to_string_pretty(&summary).unwrap_or_default()
                        );
                    } else {
                        println!("Resolved manifest written to {:?}", validated_output);
                    }
                }
                None => println!("{}", json),
            }
        }
        "binary" => {
            let path = output.ok_or_else(|| {
                HooklineError::IoError(
                    "binary format requires --output; refusing to write bytes to stdout"
                        .to_string(),
                )
            })?;

            let validated_output = validate_output_path(path)?;
            let data = manifest_to_bytes(&manifest)?;
            std::fs::write(&validated_output, &data)
                .map_err(|e| HooklineError::IoError(format!("Write manifest: {}", e)))?;

            if json_mode {
                let summary = serde_json::json!({
                    "output": validated_output.to_string_lossy(),
                    "bytes": data.len(),
                    "host_version": manifest.host_version.raw(),
                });
                println!(
                    "{}",
                    serde_json::to_string_pretty(&summary).unwrap_or_default()
                );
            } else {
                println!(
                    "Resolved manifest: {} bytes written to {:?}",
                    data.len(),
                    validated_output
                );
            }
        }
        _ => {
            return Err(HooklineError::SerializationError(format!(
                "Unknown format: {}. Use: json, binary",
                format
            )));
        }
    }

    Ok(())
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// Validate a definition file.
pub fn cmd_check(file: &Path, json_mode: bool) -> Result<(), HooklineError> {
    let definition = load_definition(file)?;
    definition.validate()?;

    if json_mode {
        let output = serde_json::json!({
            "file": file.to_string_lossy(),
            "name": definition.name,
            "valid": true,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Definition OK");
    println!("=============");
    println!("Name:      {}", definition.name);
    println!("Title:     {}", definition.title);
    println!("Publisher: {}", definition.publisher);
    println!("License:   {}", definition.license);

    Ok(())
}

// =============================================================================
// ASSETS COMMAND
// =============================================================================

/// Show which asset set a host version selects.
pub fn cmd_assets(
    file: &Path,
    host_version: Option<&str>,
    json_mode: bool,
) -> Result<(), HooklineError> {
    let definition = load_definition(file)?;
    definition.validate()?;

    let version = resolve_host_version(host_version)?;
    let major = version.major();
    let css_variant = CssVariant::for_major(major);
    let js_variant = JsVariant::for_major(major);
    let selection = definition.assets.select(major);

    if json_mode {
        let output = serde_json::json!({
            "host_version": version.raw(),
            "major": major,
            "css_variant": css_variant,
            "js_variant": js_variant,
            "css": selection.css,
            "js": selection.js,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Asset selection for host {}", version);
    println!("==============================");
    println!("CSS variant: {:?}", css_variant);
    for path in &selection.css {
        println!("  {}", path.as_str());
    }
    println!("JS variant:  {:?}", js_variant);
    for path in &selection.js {
        println!("  {}", path.as_str());
    }

    Ok(())
}

// =============================================================================
// HOOKS COMMAND
// =============================================================================

/// Show the lifecycle hook wiring of a definition.
pub fn cmd_hooks(file: &Path, json_mode: bool) -> Result<(), HooklineError> {
    let definition = load_definition(file)?;
    definition.hooks.validate()?;

    if json_mode {
        let output = serde_json::json!({
            "file": file.to_string_lossy(),
            "hooks": definition.hooks,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Lifecycle hooks for '{}'", definition.name);
    println!("========================");
    for (event, handler) in definition.hooks.iter() {
        println!("  {:<16} -> {}", event.name(), handler.as_str());
    }

    Ok(())
}

// =============================================================================
// INIT COMMAND
// =============================================================================

/// Starter definition written by `hookline init`.
///
/// Mirrors the common wiring: `after_migrate` reuses the install routine.
const DEFINITION_TEMPLATE: &str = r#"name = "my_plugin"
title = "My Plugin"
publisher = "Your Name"
description = "Describe what the plugin does."
icon = "octicon octicon-plug"
color = "blue"
email = "you@example.com"
license = "MIT"

[assets]
v12_js = ["/assets/my_plugin/js/my_plugin_v12.js"]

[assets.bundled]
css = ["my_plugin.bundle.css"]
js = ["my_plugin.bundle.js"]

[assets.legacy]
css = ["/assets/my_plugin/css/my_plugin.css"]
js = ["/assets/my_plugin/js/my_plugin.js"]

[hooks]
after_install = "my_plugin.setup.install.after_install"
after_migrate = "my_plugin.setup.install.after_install"
after_uninstall = "my_plugin.setup.uninstall.after_uninstall"
"#;

/// Scaffold a starter definition file.
pub fn cmd_init(output: &Path, force: bool, json_mode: bool) -> Result<(), HooklineError> {
    if output.exists() && !force {
        return Err(HooklineError::IoError(format!(
            "'{}' already exists. Use --force to overwrite.",
            output.display()
        )));
    }

    let validated_output = validate_output_path(output)?;
    std::fs::write(&validated_output, DEFINITION_TEMPLATE)
        .map_err(|e| HooklineError::IoError(format!("Write definition: {}", e)))?;

    if json_mode {
        let summary = serde_json::json!({
            "output": validated_output.to_string_lossy(),
            "created": true,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Wrote starter definition to {:?}", validated_output);
    println!("Validate it with: hookline check -f {}", output.display());

    Ok(())
}
