//! Option Builder - maps CLI flags onto yt-dlp download options.

use crate::cli::Cli;
use tubekit_dl::dl::{DownloadOptions, OutputPaths, OutputTemplates, PostProcessor};

/// Filename template inside the output directory.
const OUTPUT_TEMPLATE: &str = "%(title)s.%(ext)s";

/// Build the download options from parsed flags.
///
/// Rules apply in a fixed sequence, one rule per flag:
///
/// 1. output paths and filename template
/// 2. `ignoreerrors` so a failing playlist entry does not abort the call
/// 3. `--format` -> format selector
/// 4. `--extract-audio` -> `bestaudio` + audio-extraction post-processor
/// 5. `--write-subs` -> subtitle download, English
/// 6. `--embed-subs` -> append subtitle-embedding post-processor
/// 7. `--embed-metadata` -> append metadata post-processor
/// 8. `--playlist-items` -> item range
///
/// Rules 3 and 4 both set the format selector; clap rejects that flag
/// combination at parse time, so no rule overwrites another's selector.
/// Post-processors append in rule order. The result is handed to the
/// library as-is and never mutated afterwards.
pub fn build_options(cli: &Cli) -> DownloadOptions {
    let mut opts = DownloadOptions {
        paths: Some(OutputPaths::default().with_home(&cli.output_dir)),
        outtmpl: Some(OutputTemplates::simple(OUTPUT_TEMPLATE.to_string())),
        ignoreerrors: Some(true),
        no_warnings: Some(false),
        ..Default::default()
    };

    let mut postprocessors = Vec::new();

    if let Some(format) = &cli.format {
        opts.format = Some(format.clone());
    }

    if cli.extract_audio {
        opts.format = Some("bestaudio".to_string());
        postprocessors.push(PostProcessor {
            key: "FFmpegExtractAudio".to_string(),
            preferredcodec: Some(cli.audio_format.clone()),
            preferredquality: Some("0".to_string()),
        });
    }

    if cli.write_subs {
        opts.writesubtitles = Some(true);
        opts.subtitleslangs = Some(vec!["en".to_string()]);
    }

    if cli.embed_subs {
        postprocessors.push(PostProcessor {
            key: "FFmpegEmbedSubtitle".to_string(),
            ..Default::default()
        });
    }

    if cli.embed_metadata {
        postprocessors.push(PostProcessor {
            key: "FFmpegMetadata".to_string(),
            ..Default::default()
        });
    }

    if !postprocessors.is_empty() {
        opts.postprocessors = Some(postprocessors);
    }

    opts.playlist_items = cli.playlist_items.clone();

    opts
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn options_for(args: &[&str]) -> DownloadOptions {
        build_options(&Cli::parse_from(args))
    }

    #[test]
    fn defaults_target_the_output_directory() {
        let opts = options_for(&["tubekit-batch", "-o", "videos", "https://a"]);

        let paths = opts.paths.unwrap().0.unwrap();
        assert_eq!(paths.get("home").map(String::as_str), Some("videos"));

        let templates = opts.outtmpl.unwrap().0.unwrap();
        assert_eq!(
            templates.get("default").map(String::as_str),
            Some("%(title)s.%(ext)s")
        );

        assert_eq!(opts.ignoreerrors, Some(true));
        assert_eq!(opts.no_warnings, Some(false));
        assert!(opts.format.is_none());
        assert!(opts.postprocessors.is_none());
    }

    #[test]
    fn format_flag_sets_the_selector() {
        let opts = options_for(&["tubekit-batch", "-F", "bestvideo+bestaudio", "https://a"]);

        assert_eq!(opts.format.as_deref(), Some("bestvideo+bestaudio"));
    }

    #[test]
    fn extract_audio_forces_bestaudio_and_appends_processor() {
        let opts = options_for(&["tubekit-batch", "-x", "--audio-format", "opus", "https://a"]);

        assert_eq!(opts.format.as_deref(), Some("bestaudio"));

        let processors = opts.postprocessors.unwrap();
        assert_eq!(processors.len(), 1);
        assert_eq!(processors[0].key, "FFmpegExtractAudio");
        assert_eq!(processors[0].preferredcodec.as_deref(), Some("opus"));
        assert_eq!(processors[0].preferredquality.as_deref(), Some("0"));
    }

    #[test]
    fn write_subs_requests_english_subtitles() {
        let opts = options_for(&["tubekit-batch", "--write-subs", "https://a"]);

        assert_eq!(opts.writesubtitles, Some(true));
        assert_eq!(opts.subtitleslangs, Some(vec!["en".to_string()]));
    }

    #[test]
    fn postprocessors_append_in_rule_order() {
        let opts = options_for(&[
            "tubekit-batch",
            "-x",
            "--embed-subs",
            "--embed-metadata",
            "https://a",
        ]);

        let processors = opts.postprocessors.unwrap();
        let keys: Vec<&str> = processors.iter().map(|pp| pp.key.as_str()).collect();

        assert_eq!(
            keys,
            ["FFmpegExtractAudio", "FFmpegEmbedSubtitle", "FFmpegMetadata"]
        );
    }

    #[test]
    fn playlist_items_pass_through() {
        let opts = options_for(&["tubekit-batch", "--playlist-items", "1-5,10", "https://a"]);

        assert_eq!(opts.playlist_items.as_deref(), Some("1-5,10"));
    }
}
