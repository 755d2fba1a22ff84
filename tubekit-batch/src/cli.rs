//! CLI argument definitions using clap.

use clap::Parser;
use color_eyre::Section;
use eyre::{Context, Result};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "tubekit-batch")]
#[command(about = "Download a list of URLs with yt-dlp")]
#[command(version)]
pub struct Cli {
    /// File with one URL per line (blank lines and # comments are skipped)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "downloads")]
    pub output_dir: PathBuf,

    /// Format selector passed to yt-dlp (e.g. "bestvideo+bestaudio")
    #[arg(short = 'F', long, conflicts_with = "extract_audio")]
    pub format: Option<String>,

    /// Extract audio only
    #[arg(short = 'x', long)]
    pub extract_audio: bool,

    /// Audio codec used with --extract-audio
    #[arg(long, default_value = "mp3")]
    pub audio_format: String,

    /// Download subtitles
    #[arg(long)]
    pub write_subs: bool,

    /// Embed subtitles into the video
    #[arg(long)]
    pub embed_subs: bool,

    /// Embed metadata into the file
    #[arg(long)]
    pub embed_metadata: bool,

    /// Playlist item range (e.g. "1-5,10")
    #[arg(long)]
    pub playlist_items: Option<String>,

    /// URLs to download
    pub urls: Vec<String>,
}

/// Execute CLI command - separated for testing.
///
/// Setup errors (missing URL file, empty target list, missing yt-dlp) abort
/// before anything is attempted. A completed run always returns `Ok`, even
/// when every item failed; per-item outcomes are the summary's business.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    let targets = crate::urls::resolve_targets(cli.file.as_deref(), &cli.urls)?;

    tubekit_dl::dl::ensure_available().suggestion("pip install yt-dlp")?;

    fs::create_dir_all(&cli.output_dir).wrap_err_with(|| {
        format!(
            "failed to create output directory {}",
            cli.output_dir.display()
        )
    })?;

    let opts = crate::options::build_options(&cli);

    crate::run::run_batch(&targets, &cli.output_dir, &opts);

    Ok(())
}
