//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::rkey::RkeyArgs;
use crate::commands::uri::UriCommand;

/// AT Protocol URI tool.
#[derive(Parser, Debug)]
#[command(name = "aturi")]
#[command(author, version = env!("ATURI_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default filter directive for the verbosity count.
    ///
    /// `-v` and `-vv` only open up the resolver's own events; `-vvv`
    /// enables everything.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "warn,aturi=debug",
            2 => "warn,aturi=trace",
            _ => "trace",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// AT URI operations
    Uri(UriCommand),

    /// Validate record keys
    Rkey(RkeyArgs),
}
