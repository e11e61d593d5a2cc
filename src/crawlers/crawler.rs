use std::future::Future;
use thiserror::Error;
use url::Url;

/// Raw response for one fetched URL
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

/// Why a URL produced no page
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, DNS or timeout failure
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with something other than 200
    #[error("non-200 status: {0}")]
    Status(u16),
}

/// Source of pages for the crawler
pub trait Fetcher {
    /// Fetch a single URL.
    ///
    /// Transport failures are errors; any HTTP response, whatever its
    /// status, is returned as a [`FetchedPage`].
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<FetchedPage, FetchError>> + Send;
}
