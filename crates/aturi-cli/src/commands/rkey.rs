//! Rkey command implementation.

use anyhow::{Result, bail};
use clap::Args;
use tracing::debug;

use aturi::Rkey;

use crate::output;

#[derive(Args, Debug)]
pub struct RkeyArgs {
    /// Record keys to validate
    #[arg(required = true)]
    pub keys: Vec<String>,
}

pub fn run(args: RkeyArgs) -> Result<()> {
    let mut invalid = 0;

    for key in &args.keys {
        match Rkey::new(key.as_str()) {
            Ok(rkey) => output::accepted(rkey.as_str(), "valid rkey"),
            Err(e) => {
                debug!(key = %key, error = %e, "Rejected record key");
                output::rejected(key, &e.to_string());
                invalid += 1;
            }
        }
    }

    if invalid > 0 {
        bail!("{invalid} of {} record keys are invalid", args.keys.len());
    }

    Ok(())
}
