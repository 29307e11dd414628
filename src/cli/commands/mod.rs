//! CLI command implementations

pub mod emit;
pub mod scrub;
