pub mod crawler;
pub mod web;

pub use crawler::{FetchError, FetchedPage, Fetcher};
pub use web::{HttpFetcher, SiteCrawler, VisitedSet};
