//! URI subcommand implementations.

mod check;
mod parse;
mod soft_ref;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use aturi::AtUri;

#[derive(Args, Debug)]
pub struct UriCommand {
    #[command(subcommand)]
    pub command: UriSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UriSubcommand {
    /// Parse a reference and print its parts
    Parse(parse::ParseArgs),

    /// Check whether a reference resolves
    Check(check::CheckArgs),

    /// Print the repository call parameters for a reference
    SoftRef(soft_ref::SoftRefArgs),
}

pub fn handle(cmd: UriCommand) -> Result<()> {
    match cmd.command {
        UriSubcommand::Parse(args) => parse::run(args),
        UriSubcommand::Check(args) => check::run(args),
        UriSubcommand::SoftRef(args) => soft_ref::run(args),
    }
}

/// Resolve `reference`, against `base` when one is given.
fn resolve(reference: &str, base: Option<&str>) -> Result<AtUri> {
    let uri = match base {
        Some(base) => AtUri::parse_with_base(reference, base),
        None => AtUri::parse(reference),
    };
    uri.with_context(|| format!("Invalid AT URI reference '{reference}'"))
}
