//! Parse command implementation.

use anyhow::{Result, bail};
use clap::Args;
use serde::Serialize;
use tracing::info;

use crate::output;

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// AT URI or relative reference (e.g., app.bsky.feed.post/3jui7kd54zh2y)
    pub uri: String,

    /// Base URI to resolve a relative reference against
    #[arg(long)]
    pub base: Option<String>,

    /// Print the parts as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Parsed<'a> {
    uri: &'a str,
    authority: &'a str,
    collection: &'a str,
    rkey: &'a str,
}

pub fn run(args: ParseArgs) -> Result<()> {
    let uri = super::resolve(&args.uri, args.base.as_deref())?;

    // `at://` on its own resolves, but has nothing to print or serialize.
    let canonical = match uri.to_uri_string() {
        Ok(canonical) => canonical,
        Err(e) => {
            output::rejected(&args.uri, &e.to_string());
            bail!("Reference '{}' has no authority", args.uri);
        }
    };
    info!(authority = uri.authority(), "Parsed reference");

    if args.json {
        return output::json(&Parsed {
            uri: &canonical,
            authority: uri.authority(),
            collection: uri.collection(),
            rkey: uri.rkey(),
        });
    }

    output::part("URI", &canonical);
    output::part("Authority", uri.authority());
    output::part("Collection", uri.collection());
    output::part("Rkey", uri.rkey());

    Ok(())
}
