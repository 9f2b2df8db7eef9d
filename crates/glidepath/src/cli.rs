//! Command-line argument parsing for glidepath.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `glidepath_config`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - All path arguments are resolved relative to the current working directory.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for glidepath.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --no-keyboard)
/// 2. Environment variables (e.g., GLIDEPATH_COLOR, GLIDEPATH_POINTER_STYLE)
/// 3. Config file (config.json)
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "glidepath",
    about = "Animated onboarding tours for terminal applications",
    version,
    after_help = "Examples:\n  glidepath\n  glidepath --tour tour.yaml\n  glidepath --config-path ./glidepath.json --no-mouse\n  glidepath check tour.json\n"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Tour file (.json, .yaml or .yml) to run instead of the built-in demo tour
    #[arg(long, short = 't')]
    pub tour: Option<PathBuf>,

    /// Path to a custom configuration file
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,

    /// Disable keyboard navigation of the tour (arrows, Enter, Esc)
    #[arg(long)]
    pub no_keyboard: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a tour file and print its step count
    Check {
        /// Tour file to validate
        tour: PathBuf,
    },
}
