//! Batch video downloader over the yt-dlp Python API.
//!
//! Reads a URL list from a file and/or the command line, downloads each
//! target sequentially, and reports aggregated success/failure counts.

pub mod cli;
pub mod options;
pub mod run;
pub mod urls;
