//! Batch Runner - sequential download loop with per-item failure isolation.

use std::path::Path;
use tubekit_dl::dl::{self, DownloadOptions};
use tubekit_dl::error::DlError;

/// Aggregated counters for one batch run. Incremented only, never reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub success: usize,
    pub failure: usize,
}

impl RunSummary {
    pub fn attempted(&self) -> usize {
        self.success + self.failure
    }
}

/// Download every target in order and print the aggregated summary.
///
/// A failing item is counted and reported on one line with its URL; it
/// never aborts the loop. Completion of the loop is success at the process
/// level regardless of the counts.
pub fn run_batch(targets: &[String], output_dir: &Path, opts: &DownloadOptions) -> RunSummary {
    println!("starting batch download of {} targets", targets.len());
    println!("output directory: {}", output_dir.display());
    println!("{}", "-".repeat(60));

    let summary = run_with(targets, |url| dl::download(url, opts.clone()));

    println!("\n{}", "=".repeat(60));
    println!(
        "done: attempted {}, succeeded {}, failed {}",
        summary.attempted(),
        summary.success,
        summary.failure
    );

    summary
}

/// Loop core, generic over the per-URL operation.
fn run_with<F>(targets: &[String], mut op: F) -> RunSummary
where
    F: FnMut(&str) -> Result<(), DlError>,
{
    let mut summary = RunSummary::default();

    for (index, url) in targets.iter().enumerate() {
        println!("\n[{}/{}] {url}", index + 1, targets.len());

        match op(url) {
            Ok(()) => {
                summary.success += 1;
                println!("ok: {url}");
            }
            Err(err) => {
                summary.failure += 1;
                tracing::warn!(url = %url, error = %err, "download failed");
                println!("failed {url}: {err}");
            }
        }
    }

    summary
}
