use crate::config::{CollectMode, CrawlConfig};
use crate::error::Result;
use crate::results::PageRecord;
use crate::store::CorpusStore;
use std::path::{Path, PathBuf};

/// Builder that runs crawl, clean and save for one site
pub struct Pipeline {
    config: CrawlConfig,
}

impl Pipeline {
    /// Create a new pipeline for the given seed URL with default settings
    pub fn new(start_url: &str) -> Self {
        Self {
            config: CrawlConfig::new(start_url),
        }
    }

    /// Apply a configuration, keeping this pipeline's seed URL
    pub fn with_config(mut self, config: CrawlConfig) -> Self {
        let start_url = std::mem::take(&mut self.config.start_url);
        self.config = CrawlConfig { start_url, ..config };
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        let config = CrawlConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Apply configuration from a JSON string
    pub fn with_config_str(self, json: &str) -> Result<Self> {
        let config = CrawlConfig::from_json(json)?;
        Ok(self.with_config(config))
    }

    /// Override the per-fetch timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.config.timeout_secs = seconds;
        self
    }

    /// Override which pages are returned
    pub fn with_collect_mode(mut self, collect: CollectMode) -> Self {
        self.config.collect = collect;
        self
    }

    /// Override where the corpus is written
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    /// Add a regex that followed links must match
    pub fn with_include_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.filter.include_patterns.push(pattern.into());
        self
    }

    /// Add a regex that excludes links from the crawl
    pub fn with_exclude_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.filter.exclude_patterns.push(pattern.into());
        self
    }

    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    /// Crawl the site, clean the result and save it to the output path
    pub async fn run(self) -> Result<Vec<PageRecord>> {
        let corpus = crate::build_corpus(&self.config).await?;
        CorpusStore::new(&self.config.output_path).save(&corpus)?;
        Ok(corpus)
    }
}
