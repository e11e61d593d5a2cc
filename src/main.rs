use clap::Parser;
use site_corpus::{CollectMode, PageRecord, Pipeline};

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let pipeline = match build_pipeline(args) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            ::log::error!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    let output = pipeline.config().output_path.clone();
    ::log::info!("Starting crawler for URL: {}", pipeline.config().start_url);
    let start_time = std::time::Instant::now();

    let corpus = match pipeline.run().await {
        Ok(corpus) => corpus,
        Err(e) => {
            ::log::error!("Crawl failed: {}", e);
            std::process::exit(1);
        }
    };

    for (index, page) in corpus.iter().enumerate() {
        log_page(page, index + 1);
    }

    ::log::info!(
        "Crawling complete - {} pages saved to {} in {:.2} seconds",
        corpus.len(),
        output.display(),
        start_time.elapsed().as_secs_f64()
    );
}

fn build_pipeline(args: Args) -> site_corpus::Result<Pipeline> {
    let mut pipeline = Pipeline::new(&args.url);

    if let Some(path) = args.config_file {
        ::log::info!("Loading configuration from file: {}", path.display());
        pipeline = pipeline.with_config_file(path)?;
    }
    if let Some(timeout) = args.timeout {
        pipeline = pipeline.with_timeout(timeout);
    }
    if let Some(output) = args.output {
        pipeline = pipeline.with_output(output);
    }
    if args.seed_only {
        pipeline = pipeline.with_collect_mode(CollectMode::SeedOnly);
    }
    for pattern in args.include_patterns {
        pipeline = pipeline.with_include_pattern(pattern);
    }
    for pattern in args.exclude_patterns {
        pipeline = pipeline.with_exclude_pattern(pattern);
    }

    // Fail early on a bad seed rather than after building the client
    site_corpus::parse_seed(&pipeline.config().start_url)?;
    Ok(pipeline)
}

fn log_page(page: &PageRecord, count: usize) {
    let headings: usize = page.headings.iter().map(|(_, found)| found.len()).sum();
    ::log::info!("Page {}: {}", count, page.title);
    ::log::debug!(
        "Page {} has {} headings, {} paragraphs, {} links, {} images",
        count,
        headings,
        page.paragraphs.len(),
        page.links.len(),
        page.images.len()
    );
}
