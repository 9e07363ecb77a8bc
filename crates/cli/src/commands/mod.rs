//! Subcommand implementations.

pub mod migrate;
pub mod taxonomy;
pub mod validate;
