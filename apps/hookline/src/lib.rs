//! # Hookline - THE BINARY
//!
//! Host-side tool around `hookline-core`: loads a plugin definition
//! (TOML), resolves it against a host framework version, and emits the
//! resolved manifest for the host's plugin loader.

pub mod cli;
