//! Check command implementation.

use anyhow::{Result, bail};
use clap::Args;

use aturi::AtUri;

use crate::output;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// AT URI or relative reference
    pub uri: String,

    /// Base URI to resolve a relative reference against
    #[arg(long)]
    pub base: Option<String>,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let ok = match &args.base {
        Some(base) => AtUri::can_parse_with_base(&args.uri, base),
        None => AtUri::can_parse(&args.uri),
    };

    if !ok {
        output::rejected(&args.uri, "does not resolve");
        bail!("Invalid AT URI reference");
    }

    output::accepted(&args.uri, "resolves");
    Ok(())
}
