//! URL Source - resolves the target list from a file and the positional URL.

use color_eyre::Section;
use eyre::{Context, Result, eyre};
use std::fs;
use std::path::Path;

/// Read a URL list file: one URL per line, trimmed. Blank lines and lines
/// starting with `#` are skipped.
pub fn read_url_list(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read URL list {}", path.display()))?;

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// File entries first, then the positional URL. An empty result is a usage
/// error.
pub fn resolve_targets(file: Option<&Path>, url: Option<&str>) -> Result<Vec<String>> {
    let mut targets = match file {
        Some(path) => read_url_list(path)?,
        None => Vec::new(),
    };

    targets.extend(url.map(str::to_string));

    if targets.is_empty() {
        return Err(
            eyre!("no URLs provided").suggestion("pass a URL or use -f to read URLs from a file")
        );
    }

    Ok(targets)
}
