//! yt-dlp Python API wrappers.
//!
//! Type-safe bindings to [yt-dlp](https://github.com/yt-dlp/yt-dlp) `YoutubeDL` parameters,
//! plus the two operations the CLIs are built on: [`download`] and [`resolve`].
//!
//! ```no_run
//! use tubekit_dl::dl::{DownloadOptions, download};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! download("https://youtube.com/watch?v=example", DownloadOptions::default())?;
//! # Ok(())
//! # }
//! ```

use crate::error::DlError;
use crate::info::MediaInfo;
use pyo3::ffi::c_str;
use pyo3::prelude::*;
use std::collections::HashMap;
use std::path::Path;

/// Filename templates using `%(field)s` syntax. Key `default` required.
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct OutputTemplates(pub Option<HashMap<String, String>>);

impl OutputTemplates {
    /// Create with a single default template.
    pub fn simple(default: String) -> Self {
        Self(Some(HashMap::from([("default".to_string(), default)])))
    }
}

/// Download directories: `home`, `temp`, optional type-specific paths.
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct OutputPaths(pub Option<HashMap<String, String>>);

impl OutputPaths {
    /// Create with home and temp directories.
    pub fn simple(home: &Path, temp: &Path) -> Self {
        Self::default().with_home(home).with_temp(temp)
    }

    /// System download dir for `home`, cache dir for `temp`.
    pub fn system_default() -> Self {
        let home = dirs::download_dir().expect("failed to get download directory");
        let temp = std::env::temp_dir();
        Self::simple(&home, &temp)
    }

    pub fn with_home(self, home: &Path) -> Self {
        self.with_key("home".to_string(), home)
    }

    pub fn with_temp(self, temp: &Path) -> Self {
        self.with_key("temp".to_string(), temp)
    }

    fn with_key(self, key: String, value: &Path) -> Self {
        let mut inner = self.0.unwrap_or_default();
        inner.insert(key, value.to_string_lossy().to_string());
        Self(Some(inner))
    }
}

/// Post-download operation: `key` (e.g. `"FFmpegExtractAudio"`) plus the
/// kind-specific parameters that step accepts.
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct PostProcessor {
    pub key: String,
    pub preferredcodec: Option<String>,
    pub preferredquality: Option<String>,
}

/// yt-dlp download configuration passed to `YoutubeDL(params)`.
///
/// Built once per invocation; not mutated after being handed to the library.
/// `ignoreerrors` is the library's own continue-past-per-item-failure mode,
/// so a failing entry inside a playlist expansion does not abort the whole
/// call.
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct DownloadOptions {
    pub format: Option<String>,
    pub paths: Option<OutputPaths>,
    pub outtmpl: Option<OutputTemplates>,
    pub postprocessors: Option<Vec<PostProcessor>>,
    pub playlist_items: Option<String>,
    pub writesubtitles: Option<bool>,
    pub subtitleslangs: Option<Vec<String>>,
    pub ignoreerrors: Option<bool>,
    pub quiet: Option<bool>,
    pub no_warnings: Option<bool>,
}

/// Load the embedded Python bridge module.
///
/// Importing `yt_dlp` happens here; a missing package surfaces as
/// [`DlError::MissingDependency`].
fn bridge<'py>(py: Python<'py>) -> PyResult<Bound<'py, PyModule>> {
    PyModule::from_code(py, c_str!(include_str!("./ytdlp.py")), c"ytdlp.py", c"ytdlp")
}

/// Probe for the yt-dlp Python package without touching the network.
pub fn ensure_available() -> Result<(), DlError> {
    Python::attach(|py| bridge(py).map(drop).map_err(|err| DlError::classify(py, err)))
}

/// Download a single URL with the given options.
///
/// Calls `YoutubeDL(params).download([url])`; fatal errors raised by the
/// library are mapped onto [`DlError`] kinds.
pub fn download(url: &str, opts: DownloadOptions) -> Result<(), DlError> {
    Python::attach(|py| download_inner(py, url, opts).map_err(|err| DlError::classify(py, err)))
}

fn download_inner(py: Python<'_>, url: &str, opts: DownloadOptions) -> PyResult<()> {
    let module = bridge(py)?;
    let params = opts.into_pyobject(py)?;

    module.getattr("download")?.call1((url, params))?;

    Ok(())
}

/// Resolve a URL into metadata without downloading.
///
/// Uses `extract_info(url, download=False)` and returns the sanitized info
/// dict as a [`MediaInfo`].
pub fn resolve(url: &str) -> Result<MediaInfo, DlError> {
    Python::attach(|py| resolve_inner(py, url).map_err(|err| DlError::classify(py, err)))
}

fn resolve_inner(py: Python<'_>, url: &str) -> PyResult<MediaInfo> {
    let module = bridge(py)?;

    let opts = DownloadOptions {
        quiet: Some(true),
        no_warnings: Some(true),
        ..Default::default()
    };
    let params = opts.into_pyobject(py)?;

    let info = module.getattr("resolve")?.call1((url, params))?;

    info.extract()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyo3::types::PyAnyMethods;
    use std::ffi::CStr;

    /// Compare Python object with dict/list literal using recursive equality.
    #[track_caller]
    fn assert_py_eq(py: Python, py_obj: &Bound<PyAny>, expected: &'static CStr) {
        let py_expected = py.eval(expected, None, None).unwrap();
        assert!(py_obj.eq(&py_expected).unwrap());
    }

    #[test]
    fn output_templates_default() {
        Python::attach(|py| {
            let templates = OutputTemplates::default();
            let py_obj = templates.into_pyobject(py).unwrap();
            assert!(py_obj.is_none());
        });
    }

    #[test]
    fn output_templates_simple() {
        Python::attach(|py| {
            let templates = OutputTemplates::simple("%(title)s.%(ext)s".to_string());
            let py_obj = templates.into_pyobject(py).unwrap();
            assert_py_eq(py, py_obj.as_any(), c"{'default': '%(title)s.%(ext)s'}");
        });
    }

    #[test]
    fn paths_with_home() {
        Python::attach(|py| {
            let paths = OutputPaths::default().with_home(Path::new("/custom/downloads"));
            let py_obj = paths.into_pyobject(py).unwrap();
            assert_py_eq(py, py_obj.as_any(), c"{'home': '/custom/downloads'}");
        });
    }

    #[test]
    fn paths_system_default() {
        Python::attach(|py| {
            let paths = OutputPaths::system_default();
            let py_obj = paths.into_pyobject(py).unwrap();

            // Verify structure (can't compare exact paths as they're system-dependent)
            assert!(py_obj.contains("home").unwrap());
            assert!(py_obj.contains("temp").unwrap());
            assert!(py_obj.len().unwrap() == 2);
        });
    }

    #[test]
    fn postprocessor_extract_audio() {
        Python::attach(|py| {
            let processor = PostProcessor {
                key: "FFmpegExtractAudio".to_string(),
                preferredcodec: Some("mp3".to_string()),
                preferredquality: Some("0".to_string()),
            };
            let py_obj = processor.into_pyobject(py).unwrap();
            assert_py_eq(
                py,
                py_obj.as_any(),
                c"{'key': 'FFmpegExtractAudio', 'preferredcodec': 'mp3', 'preferredquality': '0'}",
            );
        });
    }

    #[test]
    fn postprocessors_list_keeps_order() {
        Python::attach(|py| {
            let processors = vec![
                PostProcessor {
                    key: "FFmpegExtractAudio".to_string(),
                    preferredcodec: Some("mp3".to_string()),
                    ..Default::default()
                },
                PostProcessor {
                    key: "FFmpegEmbedSubtitle".to_string(),
                    ..Default::default()
                },
                PostProcessor {
                    key: "FFmpegMetadata".to_string(),
                    ..Default::default()
                },
            ];

            let py_obj = processors.into_pyobject(py).unwrap();
            assert_py_eq(
                py,
                &py_obj,
                c"[{'key': 'FFmpegExtractAudio', 'preferredcodec': 'mp3', 'preferredquality': None}, {'key': 'FFmpegEmbedSubtitle', 'preferredcodec': None, 'preferredquality': None}, {'key': 'FFmpegMetadata', 'preferredcodec': None, 'preferredquality': None}]",
            );
        });
    }

    #[test]
    fn download_options_custom() {
        Python::attach(|py| {
            let opts = DownloadOptions {
                format: Some("bestvideo+bestaudio".to_string()),
                playlist_items: Some("1-5,10".to_string()),
                ignoreerrors: Some(true),
                quiet: Some(false),
                ..Default::default()
            };
            let py_obj = opts.into_pyobject(py).unwrap();
            assert_py_eq(
                py,
                py_obj.as_any(),
                c"{'format': 'bestvideo+bestaudio', 'paths': None, 'outtmpl': None, 'postprocessors': None, 'playlist_items': '1-5,10', 'writesubtitles': None, 'subtitleslangs': None, 'ignoreerrors': True, 'quiet': False, 'no_warnings': None}",
            );
        });
    }

    #[test]
    fn download_options_subtitles() {
        Python::attach(|py| {
            let opts = DownloadOptions {
                writesubtitles: Some(true),
                subtitleslangs: Some(vec!["en".to_string()]),
                ..Default::default()
            };
            let py_obj = opts.into_pyobject(py).unwrap();
            let dict = py_obj.as_any();
            assert_py_eq(py, &dict.get_item("writesubtitles").unwrap(), c"True");
            assert_py_eq(py, &dict.get_item("subtitleslangs").unwrap(), c"['en']");
        });
    }
}
