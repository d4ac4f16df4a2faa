//! # Hookline - Plugin Manifest Resolver
//!
//! The main binary for Hookline.
//!
//! This application provides:
//! - CLI interface for resolving plugin definitions
//! - Definition validation and scaffolding
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │               apps/hookline (THE BINARY)              │
//! │                                                       │
//! │   ┌─────────────┐        ┌────────────────────────┐   │
//! │   │    CLI      │        │  Definition file I/O   │   │
//! │   │   (clap)    │        │  (TOML / JSON / HKLN)  │   │
//! │   └──────┬──────┘        └───────────┬────────────┘   │
//! │          │                           │                │
//! │          └───────────┬───────────────┘                │
//! │                      ▼                                │
//! │             ┌─────────────────┐                       │
//! │             │  hookline-core  │                       │
//! │             │   (THE LOGIC)   │                       │
//! │             └─────────────────┘                       │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Scaffold a definition
//! hookline init -o plugin.toml
//!
//! # Validate it
//! hookline check -f plugin.toml
//!
//! # Resolve against a host version
//! hookline resolve -f plugin.toml -V 14.2.0 -o manifest.json
//! ```

use clap::Parser;
use hookline::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Initialize tracing — HOOKLINE_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("HOOKLINE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "hookline=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Display startup banner
    if !cli.quiet {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Hookline startup banner.
fn print_banner() {
    println!(
        r#"
  ┬ ┬┌─┐┌─┐┬┌─┬  ┬┌┐┌┌─┐
  ├─┤│ ││ │├┴┐│  ││││├┤
  ┴ ┴└─┘└─┘┴ ┴┴─┘┴┘└┘└─┘

  Plugin Manifest Resolver v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
