//! Soft-ref command implementation.

use anyhow::Result;
use clap::Args;

use crate::output;

#[derive(Args, Debug)]
pub struct SoftRefArgs {
    /// AT URI or relative reference
    pub uri: String,

    /// Base URI to resolve a relative reference against
    #[arg(long)]
    pub base: Option<String>,
}

pub fn run(args: SoftRefArgs) -> Result<()> {
    let uri = super::resolve(&args.uri, args.base.as_deref())?;
    output::json(&uri.soft_ref())
}
