//! Command implementations

pub mod emit;
