//! CLI argument definitions using clap.

use clap::Parser;
use color_eyre::Section;
use eyre::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "tubekit-formats")]
#[command(about = "Inspect available stream formats for a URL")]
#[command(version)]
pub struct Cli {
    /// URL to analyze
    pub url: Option<String>,

    /// File with one URL per line (blank lines and # comments are skipped)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Show fps, bitrates and codecs per format
    #[arg(short, long)]
    pub verbose: bool,
}

/// Execute CLI command - separated for testing.
///
/// This is a diagnostic tool, not a bulk one: the first URL that fails to
/// resolve is fatal, and remaining URLs are not attempted.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    let targets = crate::urls::resolve_targets(cli.file.as_deref(), cli.url.as_deref())?;

    tubekit_dl::dl::ensure_available().suggestion("pip install yt-dlp")?;

    for url in &targets {
        tracing::info!(url = %url, "resolving formats");

        let info = tubekit_dl::dl::resolve(url)
            .wrap_err_with(|| format!("failed to resolve {url}"))?;

        crate::report::print_report(&info, url, cli.verbose);

        if targets.len() > 1 {
            println!("\n{}\n", "=".repeat(100));
        }
    }

    Ok(())
}
