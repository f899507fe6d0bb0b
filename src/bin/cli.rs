//! City list crawler CLI
//!
//! Prints one `name,region,latitude,longitude` line per city to stdout and
//! diagnostics to stderr.

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use city_crawler::{
    error::Result,
    models::{Config, OutputFormat},
    output::WriterSink,
    pipeline,
    utils::http::HttpFetcher,
};

/// Russian city list crawler
#[derive(Parser, Debug)]
#[command(
    name = "city-crawler",
    version,
    about = "Extracts cities, regions and coordinates from the Wikipedia city list"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "city-crawler.toml")]
    config: PathBuf,

    /// Tatarstan -> Republic of Tatarstan, and no federal cities
    #[arg(long)]
    fix_regions: bool,

    /// Override the city list URL
    #[arg(long)]
    index_url: Option<String>,

    /// Output line format
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Validate the configuration and exit
    #[arg(long)]
    check: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Csv,
    Jsonl,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => OutputFormat::Csv,
            Format::Jsonl => OutputFormat::Jsonl,
        }
    }
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Load the config file and apply command-line overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_or_default(&cli.config)?;

    if cli.fix_regions {
        config.regions.canonicalize = true;
    }
    if let Some(url) = &cli.index_url {
        config.source.index_url = url.clone();
    }
    if let Some(format) = cli.format {
        config.output.format = format.into();
    }

    config.validate()?;
    Ok(config)
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli).inspect_err(|e| log::error!("{e}"))?;

    if cli.check {
        log::info!("✓ Config OK");
        log::info!("Index page: {}", config.source.index_url);
        log::info!("Region canonicalization: {}", config.regions.canonicalize);
        return Ok(());
    }

    let start = Instant::now();
    log::info!("🌏 Scraping...");

    let fetcher = HttpFetcher::from_config(&config.crawler)?;
    let mut sink = WriterSink::new(io::stdout().lock(), config.output.format);

    let result = pipeline::run_crawler(&config, &fetcher, &mut sink).await;
    log::info!("Took {:?}", start.elapsed());

    match result {
        Ok(summary) => {
            if summary.unresolved_coordinates > 0 {
                log::info!(
                    "{} of {} cities have no coordinates",
                    summary.unresolved_coordinates,
                    summary.cities
                );
            }
            Ok(())
        }
        Err(e) => {
            log::error!("Crawl failed: {e}");
            Err(e)
        }
    }
}
