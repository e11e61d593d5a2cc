//! Crawl a website and turn its pages into a clean, deduplicated corpus
//! that can be used as grounding context for a chat assistant.
//!
//! The pipeline is: seed URL -> [`SiteCrawler`] (fetch + [`parsers::extract`]
//! per page) -> [`cleaner::clean`] -> [`CorpusStore`].

pub mod cleaner;
pub mod config;
pub mod crawlers;
pub mod error;
pub mod filter;
pub mod parsers;
pub mod pipeline;
pub mod results;
pub mod store;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{CollectMode, CrawlConfig};
pub use crawlers::{HttpFetcher, SiteCrawler};
pub use error::{Error, Result};
pub use pipeline::Pipeline;
pub use results::{Headings, NO_TITLE, PageRecord};
pub use store::CorpusStore;

use url::Url;

/// Parse and validate a seed URL (absolute http or https)
pub fn parse_seed(start_url: &str) -> Result<Url> {
    let url = Url::parse(start_url)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::UnsupportedScheme(other.to_string())),
    }
}

/// Crawl the site described by `config` over HTTP and return the cleaned corpus
pub async fn build_corpus(config: &CrawlConfig) -> Result<Vec<PageRecord>> {
    let seed = parse_seed(&config.start_url)?;
    let fetcher = HttpFetcher::new(config)?;
    let crawler = SiteCrawler::from_config(fetcher, config)?;

    let pages = crawler.crawl(&seed).await;
    Ok(cleaner::clean(pages))
}
