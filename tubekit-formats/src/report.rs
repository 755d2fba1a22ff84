//! Format Reporter - categorized stream tables and download recommendations.

use tubekit_dl::info::{FormatDescriptor, MediaInfo, StreamKind};

/// Rows shown per table before truncation.
const COMPACT_ROWS: usize = 15;
const VERBOSE_ROWS: usize = 20;

/// Print the full report for one resolved URL: header, the three category
/// tables, recommendations, and example commands.
pub fn print_report(info: &MediaInfo, requested_url: &str, verbose: bool) {
    println!();
    println!("title:    {}", info.title);
    println!("uploader: {}", info.uploader.as_deref().unwrap_or("N/A"));
    println!(
        "duration: {}",
        info.duration_string.as_deref().unwrap_or("N/A")
    );
    match info.view_count {
        Some(views) => println!("views:    {views}"),
        None => println!("views:    N/A"),
    }
    println!("\n{}", "=".repeat(100));

    let formats = info.formats.as_deref().unwrap_or_default();
    if formats.is_empty() {
        println!("\nno formats available");
        return;
    }

    let (combined, video_only, audio_only) = partition(formats);

    print_category("combined video+audio", &combined, verbose);
    print_category("video only", &video_only, verbose);
    print_category("audio only", &audio_only, verbose);

    println!("\n{}", "=".repeat(100));
    println!("\nrecommended formats\n");
    print_recommendations(&video_only, &audio_only, &combined);

    println!("\n{}", "=".repeat(100));
    println!("\nexample commands\n");
    print_command_examples(info, requested_url);
}

/// Split descriptors into (combined, video-only, audio-only), keeping
/// encounter order within each category.
pub fn partition(
    formats: &[FormatDescriptor],
) -> (
    Vec<&FormatDescriptor>,
    Vec<&FormatDescriptor>,
    Vec<&FormatDescriptor>,
) {
    let mut combined = Vec::new();
    let mut video_only = Vec::new();
    let mut audio_only = Vec::new();

    for format in formats {
        match format.kind() {
            StreamKind::Combined => combined.push(format),
            StreamKind::VideoOnly => video_only.push(format),
            StreamKind::AudioOnly => audio_only.push(format),
        }
    }

    (combined, video_only, audio_only)
}

fn print_category(label: &str, formats: &[&FormatDescriptor], verbose: bool) {
    println!("\n[{label}]\n");

    if formats.is_empty() {
        println!("none");
        return;
    }

    print_table(formats, verbose);
}

/// One table, sorted by height descending; unknown heights sort last. The
/// sort is stable, so equal heights keep encounter order.
fn print_table(formats: &[&FormatDescriptor], verbose: bool) {
    let mut rows = formats.to_vec();
    rows.sort_by(|a, b| b.height.unwrap_or(0).cmp(&a.height.unwrap_or(0)));

    let limit = if verbose { VERBOSE_ROWS } else { COMPACT_ROWS };

    if verbose {
        println!(
            "{:<12} {:<6} {:<10} {:<6} {:<10} {:<13} codecs",
            "id", "ext", "resolution", "fps", "size", "vbr/abr"
        );
        println!("{}", "-".repeat(100));

        for format in rows.iter().take(limit) {
            println!(
                "{:<12} {:<6} {:<10} {:<6} {:<10} {:>6}/{:<6} {} / {}",
                format.format_id,
                format.ext.as_deref().unwrap_or("N/A"),
                resolution(format, "N/A"),
                fps_cell(format.fps),
                format_size(format.filesize),
                bitrate(format.vbr),
                bitrate(format.abr),
                format.vcodec.as_deref().unwrap_or("N/A"),
                format.acodec.as_deref().unwrap_or("N/A"),
            );
        }
    } else {
        println!(
            "{:<8} {:<6} {:<10} {:<10} note",
            "id", "ext", "resolution", "size"
        );
        println!("{}", "-".repeat(70));

        for format in rows.iter().take(limit) {
            println!(
                "{:<8} {:<6} {:<10} {:<10} {}",
                format.format_id,
                format.ext.as_deref().unwrap_or("N/A"),
                resolution(format, "audio"),
                format_size(format.filesize),
                format.format_note.as_deref().unwrap_or(""),
            );
        }
    }

    if rows.len() > limit {
        println!("\n... {} more formats", rows.len() - limit);
    }
}

/// First video-only descriptor at exactly the given height.
pub fn video_at_height<'a>(
    video_only: &[&'a FormatDescriptor],
    height: u32,
) -> Option<&'a FormatDescriptor> {
    video_only
        .iter()
        .find(|format| format.height == Some(height))
        .copied()
}

/// Audio-only descriptor with the highest bitrate; ties keep the earliest.
pub fn best_audio<'a>(audio_only: &[&'a FormatDescriptor]) -> Option<&'a FormatDescriptor> {
    let mut iter = audio_only.iter().copied();
    let mut best = iter.next()?;

    for format in iter {
        if format.abr.unwrap_or(0.0) > best.abr.unwrap_or(0.0) {
            best = format;
        }
    }

    Some(best)
}

/// Combined mp4 descriptor with the greatest known height; ties keep the
/// earliest.
pub fn best_mp4<'a>(combined: &[&'a FormatDescriptor]) -> Option<&'a FormatDescriptor> {
    let mut best: Option<&FormatDescriptor> = None;

    for format in combined
        .iter()
        .copied()
        .filter(|format| format.ext.as_deref() == Some("mp4"))
    {
        match best {
            None => best = Some(format),
            Some(current) if format.height.unwrap_or(0) > current.height.unwrap_or(0) => {
                best = Some(format);
            }
            Some(_) => {}
        }
    }

    best
}

/// Deterministic picks: 1080p and 720p video paired with the best audio,
/// the most compatible mp4, and a standalone audio pick. A missing category
/// silently omits its line.
fn print_recommendations(
    video_only: &[&FormatDescriptor],
    audio_only: &[&FormatDescriptor],
    combined: &[&FormatDescriptor],
) {
    let audio = best_audio(audio_only);

    for target in [1080u32, 720] {
        if let (Some(video), Some(audio)) = (video_at_height(video_only, target), audio) {
            println!(
                "{:<6} -f {}+{}",
                format!("{target}p:"),
                video.format_id,
                audio.format_id
            );
            if let (Some(video_size), Some(audio_size)) = (video.filesize, audio.filesize) {
                println!(
                    "       approx. size: {}",
                    format_size(Some(video_size + audio_size))
                );
            }
        }
    }

    if let Some(mp4) = best_mp4(combined) {
        println!("{:<6} -f {}", "mp4:", mp4.format_id);
        if mp4.filesize.is_some() {
            println!("       approx. size: {}", format_size(mp4.filesize));
        }
    }

    if let Some(audio) = audio {
        println!("{:<6} -f {}", "audio:", audio.format_id);
        if let Some(abr) = audio.abr {
            println!("       bitrate: {abr:.0}k");
        }
    }
}

/// Fixed yt-dlp invocation templates for the resolved page. Pure string
/// formatting; no external calls.
fn print_command_examples(info: &MediaInfo, requested_url: &str) {
    let url = info.webpage_url.as_deref().unwrap_or(requested_url);

    println!("# best quality for \"{}\"", info.title);
    println!("yt-dlp -f \"bestvideo+bestaudio\" \"{url}\"");

    println!("\n# best mp4 up to 1080p");
    println!(
        "yt-dlp -f \"bestvideo[height<=1080][ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]/best\" \"{url}\""
    );

    println!("\n# audio only (mp3)");
    println!("yt-dlp -x --audio-format mp3 \"{url}\"");

    println!("\n# subtitles");
    println!("yt-dlp --write-subs --sub-lang en \"{url}\"");

    println!("\n# print metadata");
    println!("yt-dlp --print \"%(title)s\\n%(uploader)s\\n%(duration)s\" \"{url}\"");
}

/// Human-readable byte count, `N/A` when unknown.
pub fn format_size(size: Option<u64>) -> String {
    let Some(size) = size else {
        return "N/A".to_string();
    };

    let mut value = size as f64;
    for unit in ["B", "KB", "MB", "GB"] {
        if value < 1024.0 {
            return format!("{value:.1}{unit}");
        }
        value /= 1024.0;
    }

    format!("{value:.1}TB")
}

fn resolution(format: &FormatDescriptor, fallback: &str) -> String {
    match (format.width, format.height) {
        (Some(width), Some(height)) => format!("{width}x{height}"),
        (None, Some(height)) => format!("{height}p"),
        _ => fallback.to_string(),
    }
}

fn bitrate(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{rate:.0}k"),
        None => "N/A".to_string(),
    }
}

fn fps_cell(fps: Option<f64>) -> String {
    match fps {
        Some(fps) => format!("{fps:.0}"),
        None => "N/A".to_string(),
    }
}
