//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for flashmaster using the `clap` crate.
//!
//! # Commands
//!
//! - **study**: Open the interactive study TUI (default)
//! - **check**: Validate a CSV file and print what would be loaded
//! - **progress**: Show how many cards are marked learned
//! - **reset**: Clear the persisted learned progress
//! - **config**: Get or set configuration values
//!
//! # Examples
//!
//! ```no_run
//! use flashmaster::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_args();
//! match cli.get_command() {
//!     Commands::Study { file } => println!("studying {file:?}"),
//!     _ => {}
//! }
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level command-line arguments
#[derive(Parser, Debug)]
#[command(name = "flashmaster", version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// CSV file to study (shorthand for `flashmaster study FILE`)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Directory for the learned-progress database (overrides config)
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Seed for shuffling, for reproducible card orders
    #[arg(long = "seed", value_name = "N", global = true)]
    pub seed: Option<u64>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Study a deck interactively (default)
    #[command(visible_alias = "s")]
    Study {
        /// CSV file to load; omit to pick one on the upload screen
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Check that a CSV file can be loaded and preview its cards
    #[command(visible_alias = "c")]
    Check {
        /// CSV file to check
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Number of cards to preview
        #[arg(short = 'n', long = "preview", default_value_t = 5)]
        preview: usize,
    },

    /// Show learned progress stored on disk
    Progress,

    /// Clear all learned progress stored on disk
    Reset {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Set a configuration value (key=value)
    Set {
        /// Setting in the form key=value
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },
    /// Print a configuration value
    Get {
        /// Setting key
        key: String,
    },
}

impl Cli {
    /// Parse command-line arguments from the process environment
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Study if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or_else(|| Commands::Study {
            file: self.file.clone(),
        })
    }
}

/// Split a `key=value` setting into trimmed parts
#[must_use]
pub fn split_setting(setting: &str) -> Option<(&str, &str)> {
    setting
        .split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
}
