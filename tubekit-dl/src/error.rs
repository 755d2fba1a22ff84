//! Failure kinds for yt-dlp operations.
//!
//! The bridge maps every Python exception onto a closed set of kinds so
//! callers can tell transport problems from extractor problems without
//! string-matching error messages themselves.

use pyo3::prelude::*;
use thiserror::Error;

/// Exception type names that are transport failures outright.
const NETWORK_TYPES: &[&str] = &[
    "URLError",
    "HTTPError",
    "TransportError",
    "ConnectionError",
    "ConnectionResetError",
    "TimeoutError",
    "SSLError",
    "gaierror",
];

/// Message fragments that mark a network cause wrapped inside yt-dlp's own
/// `DownloadError`.
const NETWORK_HINTS: &[&str] = &[
    "urlopen error",
    "timed out",
    "unable to connect",
    "connection reset",
    "temporary failure in name resolution",
];

/// Failure classes surfaced by the yt-dlp bridge.
#[derive(Debug, Error)]
pub enum DlError {
    /// The `yt_dlp` Python package is not importable.
    #[error("yt-dlp is not available: {0}")]
    MissingDependency(String),
    /// Transport-level failure (DNS, TLS, timeouts, dropped connections).
    #[error("network failure: {0}")]
    Network(String),
    /// The extractor could not resolve the URL into media.
    #[error("extraction failed: {0}")]
    Extraction(String),
    /// A post-download processing step failed.
    #[error("post-processing failed: {0}")]
    PostProcessing(String),
    /// Anything the bridge could not classify.
    #[error("{0}")]
    Unknown(String),
}

impl DlError {
    /// Map a Python exception onto the closed kind set.
    ///
    /// Classification is by exception type name; yt-dlp wraps most causes in
    /// `DownloadError`, so those are split further by a message probe.
    pub fn classify(py: Python<'_>, err: PyErr) -> Self {
        let message = err.value(py).to_string();

        let type_name = err
            .get_type(py)
            .name()
            .map(|name| name.to_string())
            .unwrap_or_default();

        if NETWORK_TYPES.contains(&type_name.as_str()) {
            return Self::Network(message);
        }

        match type_name.as_str() {
            "ImportError" | "ModuleNotFoundError" => Self::MissingDependency(message),
            "DownloadError" | "ExtractorError" | "UnsupportedError" | "GeoRestrictedError" => {
                let lower = message.to_lowercase();
                if NETWORK_HINTS.iter().any(|hint| lower.contains(hint)) {
                    Self::Network(message)
                } else {
                    Self::Extraction(message)
                }
            }
            "PostProcessingError" => Self::PostProcessing(message),
            _ => Self::Unknown(message),
        }
    }
}
