//! Media metadata extracted from yt-dlp info dicts.
//!
//! [`MediaInfo`] is the sanitized info dict for one resolved URL;
//! [`FormatDescriptor`] is one downloadable stream variant out of its
//! `formats` list.

use pyo3::prelude::*;

/// Essential metadata for one resolved URL.
///
/// Extracted via `FromPyObject` from the sanitized info dict returned by
/// `extract_info`.
#[derive(Clone, Debug, FromPyObject)]
#[pyo3(from_item_all)]
pub struct MediaInfo {
    /// Video identifier (required by yt-dlp)
    pub id: String,
    /// Video title (required by yt-dlp)
    pub title: String,
    /// Full name of the video uploader
    #[pyo3(default)]
    pub uploader: Option<String>,
    /// Length of the video in seconds
    #[pyo3(default)]
    pub duration: Option<f64>,
    /// Length of the video as yt-dlp renders it (e.g. `3:57`)
    #[pyo3(default)]
    pub duration_string: Option<String>,
    /// How many users have watched the video
    #[pyo3(default)]
    pub view_count: Option<i64>,
    /// URL to the video webpage
    #[pyo3(default)]
    pub webpage_url: Option<String>,
    /// All downloadable stream variants
    #[pyo3(default)]
    pub formats: Option<Vec<FormatDescriptor>>,
}

/// One downloadable stream variant reported for a URL.
///
/// Numeric fields are nullable in the info dict; absent keys extract as
/// `None` as well.
#[derive(Clone, Debug, Default, FromPyObject)]
#[pyo3(from_item_all)]
pub struct FormatDescriptor {
    pub format_id: String,
    #[pyo3(default)]
    pub ext: Option<String>,
    #[pyo3(default)]
    pub height: Option<u32>,
    #[pyo3(default)]
    pub width: Option<u32>,
    #[pyo3(default)]
    pub fps: Option<f64>,
    #[pyo3(default)]
    pub filesize: Option<u64>,
    #[pyo3(default)]
    pub vcodec: Option<String>,
    #[pyo3(default)]
    pub acodec: Option<String>,
    #[pyo3(default)]
    pub abr: Option<f64>,
    #[pyo3(default)]
    pub vbr: Option<f64>,
    #[pyo3(default)]
    pub format_note: Option<String>,
}

/// Stream category by codec presence. Every descriptor lands in exactly one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamKind {
    /// Both tracks present (or neither codec reported, e.g. storyboards).
    Combined,
    VideoOnly,
    AudioOnly,
}

impl FormatDescriptor {
    /// Whether a video codec is reported. yt-dlp marks an absent codec with
    /// the string `"none"`; some extractors omit the field instead.
    pub fn has_video(&self) -> bool {
        codec_present(self.vcodec.as_deref())
    }

    /// Whether an audio codec is reported.
    pub fn has_audio(&self) -> bool {
        codec_present(self.acodec.as_deref())
    }

    /// Classify this descriptor into its stream category.
    pub fn kind(&self) -> StreamKind {
        match (self.has_video(), self.has_audio()) {
            (true, false) => StreamKind::VideoOnly,
            (false, true) => StreamKind::AudioOnly,
            _ => StreamKind::Combined,
        }
    }
}

fn codec_present(codec: Option<&str>) -> bool {
    codec.is_some_and(|codec| codec != "none")
}
