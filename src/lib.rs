//! ghe-providers Library
//!
//! This crate builds the providers protocol document printed by the
//! `ghe-providers` CLI, and the authenticated GitHub Enterprise client
//! factory that reads its credentials from the environment.

pub mod cli;
pub mod config;
pub mod error;
pub mod providers;
pub mod utils;

pub use cli::exit_codes;
pub use error::GheError;
