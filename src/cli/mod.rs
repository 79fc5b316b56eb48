//! # CLI Module
//!
//! This module defines the command-line interface for ghe-providers using `clap`.
//!
//! With no flags the tool prints the providers document and exits. The flags
//! only add side effects on stderr or run the client factory first; stdout
//! always carries the JSON document alone.
//!
//! ## Submodules
//!
//! - [`commands`] - Command implementations
//! - [`exit_codes`] - Standardized exit codes
//! - [`output`] - JSON output formatting
//!
//! ## Examples
//!
//! ```bash
//! # Print the providers document
//! ghe-providers
//!
//! # Authenticate against GitHub Enterprise first
//! GHE_TOKEN=... GHE_BASE_URL=https://ghe.example.com/api/v3/ ghe-providers --connect
//!
//! # Also dump the value to stderr
//! ghe-providers --dump
//! ```

pub mod commands;
pub mod exit_codes;
pub mod output;

use clap::Parser;

/// ghe-providers - Emit the providers protocol document
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "ghe-providers")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Build an authenticated GitHub Enterprise client from GHE_TOKEN and GHE_BASE_URL before emitting
    #[arg(long)]
    pub connect: bool,

    /// Write a debug dump of the providers value to stderr
    #[arg(long)]
    pub dump: bool,
}
