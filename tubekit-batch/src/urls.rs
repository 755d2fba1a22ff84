//! URL Source - resolves the target list from a file and CLI arguments.

use color_eyre::Section;
use eyre::{Context, Result, eyre};
use std::fs;
use std::path::Path;

/// Read a URL list file: one URL per line, trimmed. Blank lines and lines
/// starting with `#` are skipped.
pub fn read_url_list(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read URL list {}", path.display()))?;

    Ok(parse_url_list(&text))
}

fn parse_url_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Concatenate file entries and positional URLs, file order first.
///
/// Entries are passed through unvalidated; a malformed URL surfaces as a
/// per-item failure during the run. An empty result is a usage error.
pub fn resolve_targets(file: Option<&Path>, urls: &[String]) -> Result<Vec<String>> {
    let mut targets = match file {
        Some(path) => read_url_list(path)?,
        None => Vec::new(),
    };

    targets.extend(urls.iter().cloned());

    if targets.is_empty() {
        return Err(eyre!("no URLs provided")
            .suggestion("pass URLs as arguments or use -f to read them from a file"));
    }

    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("tubekit-batch-urls-{name}.txt"));
        fs::write(&path, contents).expect("failed to write temp file");
        path
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let parsed = parse_url_list(
            "https://a.example\n\n   \n# comment\n   # indented comment\nhttps://b.example\n",
        );

        assert_eq!(parsed, ["https://a.example", "https://b.example"]);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let parsed = parse_url_list("  https://a.example  \n\thttps://b.example\n");

        assert_eq!(parsed, ["https://a.example", "https://b.example"]);
    }

    #[test]
    fn file_entries_come_before_cli_urls() {
        let path = write_temp(
            "order",
            "https://file-1.example\nhttps://file-2.example\n",
        );
        let cli_urls = vec!["https://cli-1.example".to_string()];

        let targets = resolve_targets(Some(&path), &cli_urls).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(
            targets,
            [
                "https://file-1.example",
                "https://file-2.example",
                "https://cli-1.example"
            ]
        );
    }

    #[test]
    fn keeps_duplicates_in_order() {
        let urls = vec![
            "https://a.example".to_string(),
            "https://a.example".to_string(),
        ];

        let targets = resolve_targets(None, &urls).unwrap();

        assert_eq!(targets.len(), 2);
    }

    #[test]
    fn missing_file_fails_loudly() {
        let path = std::env::temp_dir().join("tubekit-batch-urls-does-not-exist.txt");

        assert!(resolve_targets(Some(&path), &[]).is_err());
    }

    #[test]
    fn empty_sources_are_a_usage_error() {
        assert!(resolve_targets(None, &[]).is_err());
    }

    #[test]
    fn comment_only_file_with_no_cli_urls_is_a_usage_error() {
        let path = write_temp("comments", "# just\n# comments\n\n");

        let result = resolve_targets(Some(&path), &[]);
        fs::remove_file(&path).ok();

        assert!(result.is_err());
    }
}
