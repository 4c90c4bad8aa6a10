//! Shared building blocks for the biztime binaries and crates.

pub mod types;
pub mod utils;
