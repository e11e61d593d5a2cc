//! Error types for the site-corpus crate

use thiserror::Error;

/// Result type for site-corpus operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the edges of the pipeline.
///
/// The crawl itself never fails: unreachable pages are logged and skipped.
#[derive(Debug, Error)]
pub enum Error {
    /// The seed URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The seed URL is not http or https
    #[error("Unsupported URL scheme '{0}', expected http or https")]
    UnsupportedScheme(String),

    /// An include/exclude pattern is not a valid regex
    #[error("Invalid URL pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// HTTP client construction error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Reading or writing the corpus file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
