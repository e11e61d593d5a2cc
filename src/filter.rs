use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

/// Optional pattern refinements applied on top of the same-origin rule
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UrlFilterConfig {
    /// Regex patterns for URLs to include (if empty, all same-origin URLs are included unless excluded)
    #[serde(default)]
    pub include_patterns: Vec<String>,

    /// Regex patterns for URLs to exclude (these take precedence over include patterns)
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
}

/// Decides which discovered links the crawler may follow.
///
/// A link is only followed when it shares scheme and host with the seed URL.
/// Exclude and include patterns then narrow that set further.
#[derive(Debug, Default)]
pub struct UrlFilter {
    include_regexes: Vec<Regex>,
    exclude_regexes: Vec<Regex>,
}

impl UrlFilter {
    /// Create a new URL filter from configuration
    pub fn new(config: &UrlFilterConfig) -> Result<Self, regex::Error> {
        let include_regexes = config
            .include_patterns
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<Result<Vec<_>, _>>()?;

        let exclude_regexes = config
            .exclude_patterns
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            include_regexes,
            exclude_regexes,
        })
    }

    /// Determine if a URL should be crawled from a site seeded at `seed`
    pub fn should_crawl(&self, url: &Url, seed: &Url) -> bool {
        if !is_same_origin(url, seed) {
            ::log::trace!("Different origin, not following: {}", url);
            return false;
        }

        // Check regex exclusions (these take precedence)
        let url_str = url.as_str();
        if self.exclude_regexes.iter().any(|regex| regex.is_match(url_str)) {
            ::log::debug!("URL filter excluded: {}", url);
            return false;
        }

        // If include patterns are specified, at least one must match
        if !self.include_regexes.is_empty()
            && !self.include_regexes.iter().any(|regex| regex.is_match(url_str))
        {
            ::log::debug!("URL filter did not include: {}", url);
            return false;
        }

        true
    }

    /// Create a normalized version of the URL (without its fragment)
    pub fn normalize_url(&self, url: &Url) -> Url {
        let mut normalized = url.clone();
        normalized.set_fragment(None);
        normalized
    }
}

/// Two URLs are same-origin when scheme and host match
pub fn is_same_origin(a: &Url, b: &Url) -> bool {
    a.scheme() == b.scheme() && a.host_str() == b.host_str()
}
