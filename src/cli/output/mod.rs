//! Output formatters
//!
//! - [`json`] - indented JSON for the providers document on stdout

pub mod json;

pub use json::JsonFormat;
