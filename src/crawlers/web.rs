use crate::config::{CollectMode, CrawlConfig};
use crate::crawlers::crawler::{FetchError, FetchedPage, Fetcher};
use crate::error::Result;
use crate::filter::UrlFilter;
use crate::parsers::html::extract_from_str;
use crate::results::PageRecord;
use reqwest::Client;
use std::collections::HashSet;
use std::future::Future;
use std::time::Duration;
use url::Url;

/// [`Fetcher`] backed by a reqwest client with a per-request timeout
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher using the timeout and user agent from `config`
    pub fn new(config: &CrawlConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(
        &self,
        url: &Url,
    ) -> impl Future<Output = std::result::Result<FetchedPage, FetchError>> + Send {
        let request = self.client.get(url.clone());
        async move {
            let response = request
                .send()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;
            Ok(FetchedPage { status, body })
        }
    }
}

/// URLs already scheduled during one crawl
#[derive(Debug, Default)]
pub struct VisitedSet {
    seen: HashSet<String>,
}

impl VisitedSet {
    /// Marks a URL as visited, returning `false` if it already was
    pub fn insert(&mut self, url: &Url) -> bool {
        self.seen.insert(url.as_str().to_string())
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Links of one fetched page that the traversal has not reached yet
struct Branch {
    links: std::vec::IntoIter<String>,
}

impl Branch {
    fn new(record: &PageRecord) -> Self {
        Self {
            links: record.links.clone().into_iter(),
        }
    }
}

/// Depth-first, same-origin crawler.
///
/// Pages are fetched one at a time. A link is checked against the visited
/// set only when the traversal reaches it, so pages come out in the same
/// pre-order a recursive walk would produce.
pub struct SiteCrawler<F> {
    fetcher: F,
    filter: UrlFilter,
    collect: CollectMode,
}

impl<F: Fetcher> SiteCrawler<F> {
    pub fn new(fetcher: F, filter: UrlFilter, collect: CollectMode) -> Self {
        Self {
            fetcher,
            filter,
            collect,
        }
    }

    /// Create a crawler using the filter patterns and collect mode from `config`
    pub fn from_config(fetcher: F, config: &CrawlConfig) -> Result<Self> {
        let filter = UrlFilter::new(&config.filter)?;
        Ok(Self::new(fetcher, filter, config.collect))
    }

    /// Crawls every reachable same-origin page starting at `seed`.
    ///
    /// Failed fetches and non-200 responses end their branch without
    /// affecting the rest of the crawl, so this always returns a
    /// (possibly empty) list of records.
    pub async fn crawl(&self, seed: &Url) -> Vec<PageRecord> {
        ::log::info!("Starting crawl at {}", seed);

        let seed = self.filter.normalize_url(seed);
        let mut visited = VisitedSet::default();
        visited.insert(&seed);

        let mut pages = Vec::new();
        let Some(record) = self.visit(&seed).await else {
            ::log::warn!("Seed page {} yielded nothing", seed);
            return pages;
        };

        let mut stack = vec![Branch::new(&record)];
        pages.push(record);

        while let Some(branch) = stack.last_mut() {
            let Some(link) = branch.links.next() else {
                stack.pop();
                continue;
            };

            let Ok(url) = Url::parse(&link) else {
                continue;
            };
            if !self.filter.should_crawl(&url, &seed) {
                continue;
            }
            if !visited.insert(&url) {
                ::log::trace!("Skipping already visited: {}", url);
                continue;
            }

            if let Some(record) = self.visit(&url).await {
                stack.push(Branch::new(&record));
                if self.collect == CollectMode::AllPages {
                    pages.push(record);
                }
            }
        }

        ::log::info!(
            "Crawl of {} finished: {} URLs visited, {} pages returned",
            seed,
            visited.len(),
            pages.len()
        );
        pages
    }

    /// Fetches and extracts a single page
    async fn visit(&self, url: &Url) -> Option<PageRecord> {
        ::log::info!("Scraping: {}", url);

        let result = self.fetcher.fetch(url).await.and_then(|page| {
            if page.status == 200 {
                Ok(page)
            } else {
                Err(FetchError::Status(page.status))
            }
        });

        match result {
            Ok(page) => {
                let record = extract_from_str(&page.body, url);
                ::log::debug!("Found {} links in {}", record.links.len(), url);
                Some(record)
            }
            Err(FetchError::Status(status)) => {
                ::log::warn!("Non-200 status for {}: {}", url, status);
                None
            }
            Err(e) => {
                ::log::warn!("Failed to fetch {}: {}", url, e);
                None
            }
        }
    }
}
