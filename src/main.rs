// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (env_logger, RUST_LOG wins over --verbose)
// 3. Dispatch to the appropriate subcommand handler
// 4. Crawl -> deduplicate -> write the report
// 5. Exit with proper code (0 = success, 2 = error)
//
// A page that fails to load is logged and the crawl carries on. Only
// problems that make the whole run pointless (bad configuration, an output
// file we can't write) end up here as errors.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;      // src/cli.rs - command-line parsing
mod config;   // src/config.rs - validated crawl settings
mod crawl;    // src/crawl/ - the crawl engine
mod extract;  // src/extract/ - finding links in HTML
mod fetch;    // src/fetch/ - getting pages over HTTP
mod report;   // src/report/ - writing results to disk

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::CrawlConfig;
use fetch::HttpFetcher;
use log::{error, info};
use report::ReportFormat;
use std::path::Path;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Crawl {
            seed_url,
            base_domain,
            output,
            max_depth,
            revisit,
            selector,
            timeout_secs,
            json,
        } => {
            let config = CrawlConfig::new(
                &seed_url,
                base_domain.as_deref(),
                max_depth,
                revisit.into(),
                &selector,
                timeout_secs,
            )?;
            let format = if json { ReportFormat::Json } else { ReportFormat::Text };
            handle_crawl(&config, &output, format).await
        }
        Commands::Nav {
            page_url,
            output,
            selector,
            timeout_secs,
        } => handle_nav(&page_url, &output, &selector, timeout_secs).await,
    }
}

// Handles the 'crawl' subcommand
async fn handle_crawl(config: &CrawlConfig, output: &Path, format: ReportFormat) -> Result<i32> {
    println!("🔍 Mapping documentation site: {}", config.seed_url);
    println!("🏠 Base domain: {}", config.base_domain);
    println!("📊 Max crawl depth: {}", config.max_depth);

    let fetcher = HttpFetcher::new(config.timeout)?;

    let outcome = crawl::crawl_site(&fetcher, config).await;
    let mut root = outcome.root;
    crawl::deduplicate(&mut root);

    let written = report::write_report(&root, output, format)?;

    info!("Scraping completed. Hierarchical URLs saved to {}", output.display());
    print_summary(&outcome.stats, written, output);

    Ok(0)
}

// Handles the 'nav' subcommand
//
// A page that can't be fetched is reported but isn't an error: nothing is
// written and we exit 0.
async fn handle_nav(page_url: &str, output: &Path, selector: &str, timeout_secs: u64) -> Result<i32> {
    let page = config::parse_page_url(page_url)?;
    let extractor = extract::LinkExtractor::new(selector)?;
    let fetcher = HttpFetcher::new(config::timeout_from_secs(timeout_secs))?;

    println!("🔍 Listing links on: {}", page);

    match crawl::list_links(&fetcher, &extractor, &page).await {
        Ok(urls) => {
            report::write_list(output, &urls)?;
            println!("✅ {} URL(s) saved to {}", urls.len(), output.display());
        }
        Err(e) => {
            error!("Error scraping the documentation: {}", e);
        }
    }

    Ok(0)
}

fn print_summary(stats: &crawl::CrawlStats, written: usize, output: &Path) {
    println!();
    println!("📊 Summary:");
    println!("   📄 Pages fetched: {}", stats.pages_fetched);
    println!("   ❌ Fetch failures: {}", stats.fetch_failures);
    println!("   🔁 Revisited links: {}", stats.revisits);
    println!("   🛑 Stopped at depth limit: {}", stats.depth_limited);
    println!("   🌐 External links: {}", stats.external_links);
    println!("   ⏭️  Skipped links: {}", stats.skipped_links);
    println!("   ⚠️  Malformed links: {}", stats.malformed_links);
    println!("   📝 Unique URLs written: {} -> {}", written, output.display());
}
