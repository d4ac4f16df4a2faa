//! # Hookline CLI Module
//!
//! This module implements the CLI interface for Hookline.
//!
//! ## Available Commands
//!
//! - `resolve` - Resolve a definition against a host version
//! - `check` - Validate a definition file
//! - `assets` - Show which asset set a host version selects
//! - `hooks` - Show the lifecycle hook wiring of a definition
//! - `init` - Scaffold a starter definition file

mod commands;

use clap::{Parser, Subcommand};
use hookline_core::HooklineError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Hookline - Plugin Manifest Resolver
///
/// Resolves a plugin definition against a host framework version into the
/// manifest the host's plugin loader consumes: version-gated asset lists
/// plus lifecycle hook wiring.
#[derive(Parser, Debug)]
#[command(name = "hookline")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a definition against a host framework version
    Resolve {
        /// Path to the definition file (TOML)
        #[arg(short, long)]
        file: PathBuf,

        /// Host framework version (falls back to HOOKLINE_HOST_VERSION)
        #[arg(short = 'V', long)]
        host_version: Option<String>,

        /// Output file path (stdout if omitted; required for binary)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (json, binary)
        #[arg(short = 't', long, default_value = "json")]
        format: String,
    },

    /// Validate a definition file
    Check {
        /// Path to the definition file (TOML)
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Show which asset set a host version selects
    Assets {
        /// Path to the definition file (TOML)
        #[arg(short, long)]
        file: PathBuf,

        /// Host framework version (falls back to HOOKLINE_HOST_VERSION)
        #[arg(short = 'V', long)]
        host_version: Option<String>,
    },

    /// Show the lifecycle hook wiring of a definition
    Hooks {
        /// Path to the definition file (TOML)
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Scaffold a starter definition file
    Init {
        /// Path to write the definition to
        #[arg(short, long, default_value = "hookline.toml")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), HooklineError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Commands::Resolve {
            file,
            host_version,
            output,
            format,
        } => cmd_resolve(
            &file,
            host_version.as_deref(),
            output.as_deref(),
            &format,
            json_mode,
        ),
        Commands::Check { file } => cmd_check(&file, json_mode),
        Commands::Assets { file, host_version } => {
            cmd_assets(&file, host_version.as_deref(), json_mode)
        }
        Commands::Hooks { file } => cmd_hooks(&file, json_mode),
        Commands::Init { output, force } => cmd_init(&output, force, json_mode),
    }
}
