//! tubekit-formats - stream format analyzer

use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;
use tubekit_formats::cli::{Cli, run_cli};

fn main() -> Result<()> {
    let (non_blocking, _guard) = tracing_appender::non_blocking(std::io::stderr());

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    run_cli(Cli::parse())
}
