use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "site-corpus")]
#[command(about = "Crawls a website and saves its cleaned text content as a JSON corpus")]
#[command(version)]
pub struct Args {
    /// Seed URL to crawl (http or https)
    pub url: String,

    /// JSON configuration file (`start_url` is optional there, the seed URL argument wins)
    #[arg(short, long)]
    pub config_file: Option<PathBuf>,

    /// Timeout in seconds for each page fetch
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Where to write the cleaned corpus
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only keep the seed page's record (the site is still traversed)
    #[arg(long)]
    pub seed_only: bool,

    /// Regex that followed links must match (repeatable)
    #[arg(long = "include")]
    pub include_patterns: Vec<String>,

    /// Regex for links that must not be followed (repeatable)
    #[arg(long = "exclude")]
    pub exclude_patterns: Vec<String>,
}
