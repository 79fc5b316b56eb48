//! Utility modules for ghe-providers

pub mod dump;

pub use dump::{dump, dump_with, DumpConfig};
