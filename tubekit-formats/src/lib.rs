//! Stream format analyzer for yt-dlp supported URLs.
//!
//! Resolves a URL without downloading, partitions the reported stream
//! formats into combined / video-only / audio-only tables, and derives
//! download recommendations.

pub mod cli;
pub mod report;
pub mod urls;
