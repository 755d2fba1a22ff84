//! Type-safe Rust bindings to the [yt-dlp](https://github.com/yt-dlp/yt-dlp) Python library.
//!
//! ## Modules
//!
//! - [`dl`] - download options and the download/resolve operations
//! - [`info`] - media metadata and stream format descriptors
//! - [`error`] - the closed set of failure kinds
//!
//! ## Quick Start
//!
//! **Download** a single URL:
//! ```no_run
//! use tubekit_dl::dl::{DownloadOptions, download};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let opts = DownloadOptions {
//!     format: Some("bestvideo+bestaudio".to_string()),
//!     ..Default::default()
//! };
//! download("https://youtube.com/watch?v=example", opts)?;
//! # Ok(())
//! # }
//! ```
//!
//! **Inspect** available formats without downloading:
//! ```no_run
//! use tubekit_dl::dl::resolve;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let info = resolve("https://youtube.com/watch?v=example")?;
//! for format in info.formats.unwrap_or_default() {
//!     println!("{} ({:?})", format.format_id, format.kind());
//! }
//! # Ok(())
//! # }
//! ```

pub mod dl;
pub mod error;
pub mod info;
