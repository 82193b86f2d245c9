//! Subcommand implementations.

pub mod rkey;
pub mod uri;
