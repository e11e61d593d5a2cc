use crate::error::Result;
use crate::filter::UrlFilterConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Which crawled pages end up in the returned corpus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectMode {
    /// Every successfully fetched page, in depth-first discovery order
    #[default]
    AllPages,
    /// Only the seed page; the rest of the site is still traversed
    SeedOnly,
}

/// Configuration for a site crawl
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// URL to start crawling from (may be left out when the URL is given on the command line)
    #[serde(default)]
    pub start_url: String,

    /// Timeout for each page fetch, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Which pages are returned from the crawl
    #[serde(default)]
    pub collect: CollectMode,

    /// Extra include/exclude patterns for followed links
    #[serde(flatten)]
    pub filter: UrlFilterConfig,

    /// Where the cleaned corpus is written
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Default value for timeout_secs
fn default_timeout_secs() -> u64 {
    10
}

/// Default value for output_path
fn default_output_path() -> PathBuf {
    PathBuf::from("cleaned_scraped_data.json")
}

/// Default value for user_agent
fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

impl CrawlConfig {
    /// Create a new configuration with default values
    pub fn new(start_url: &str) -> Self {
        Self {
            start_url: start_url.to_string(),
            timeout_secs: default_timeout_secs(),
            collect: CollectMode::default(),
            filter: UrlFilterConfig::default(),
            output_path: default_output_path(),
            user_agent: default_user_agent(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_from_minimal_json() {
        let config = CrawlConfig::from_json(r#"{"start_url": "https://example.com"}"#).unwrap();
        assert_eq!(config.start_url, "https://example.com");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.collect, CollectMode::AllPages);
        assert!(config.filter.include_patterns.is_empty());
        assert!(config.filter.exclude_patterns.is_empty());
        assert_eq!(config.output_path, PathBuf::from("cleaned_scraped_data.json"));
        assert!(config.user_agent.starts_with("site-corpus/"));
    }

    #[test]
    fn test_full_json() {
        let json = r#"{
            "start_url": "https://example.com/docs",
            "timeout_secs": 3,
            "collect": "seed_only",
            "exclude_patterns": ["/private/"],
            "output_path": "out/corpus.json",
            "user_agent": "test-agent"
        }"#;
        let config = CrawlConfig::from_json(json).unwrap();
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.collect, CollectMode::SeedOnly);
        assert_eq!(config.filter.exclude_patterns, vec!["/private/"]);
        assert_eq!(config.output_path, PathBuf::from("out/corpus.json"));
        assert_eq!(config.user_agent, "test-agent");
    }

    #[test]
    fn test_missing_start_url_defaults_to_empty() {
        let config = CrawlConfig::from_json(r#"{"timeout_secs": 3}"#).unwrap();
        assert!(config.start_url.is_empty());
        assert_eq!(config.timeout_secs, 3);

        // An empty seed is rejected once the crawl is set up
        assert!(crate::parse_seed(&config.start_url).is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"start_url": "http://a.com/", "collect": "all_pages"}}"#).unwrap();

        let config = CrawlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.start_url, "http://a.com/");
        assert_eq!(config.collect, CollectMode::AllPages);
    }
}
