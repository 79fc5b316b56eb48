//! Exit codes for the CLI
//!
//! # Exit Code Reference
//!
//! | Code | Constant | Meaning | Example |
//! |------|----------|---------|---------|
//! | 0 | `SUCCESS` | Success | Providers document written |
//! | 1 | `ERROR` | Runtime error | Malformed base URL, closed stdout |
//! | 2 | `CONFIG_ERROR` | Configuration error | `GHE_TOKEN` unset or empty |
//!
//! # Usage
//!
//! ```rust,ignore
//! use ghe_providers::cli::exit_codes;
//!
//! std::process::exit(exit_codes::SUCCESS);
//! ```

/// Success - the providers document was written to stdout.
pub const SUCCESS: i32 = 0;

/// Runtime error.
///
/// Used when:
/// - The enterprise client could not be built
/// - The providers value could not be serialized
/// - Writing to stdout failed
pub const ERROR: i32 = 1;

/// A required environment variable is missing.
///
/// Used when `GHE_TOKEN` is unset or empty and the client factory runs.
pub const CONFIG_ERROR: i32 = 2;
