//! aturi - CLI tool for AT Protocol URI references.
//!
//! This is a thin wrapper over the `aturi` library, intended for checking
//! and resolving `at://` references and record keys by hand.

mod cli;
mod commands;
mod output;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{rkey, uri};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    match cli.command {
        Commands::Uri(uri_cmd) => uri::handle(uri_cmd),
        Commands::Rkey(args) => rkey::run(args),
    }
}

/// Logs go to stderr so that JSON printed on stdout stays parseable.
fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));

    let (json, text) = if cli.json_logs {
        (Some(fmt::layer().json().with_writer(io::stderr)), None)
    } else {
        let text = fmt::layer()
            .with_target(cli.verbose > 2)
            .without_time()
            .with_writer(io::stderr);
        (None, Some(text))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(text)
        .init();
}
