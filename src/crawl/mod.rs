// src/crawl/mod.rs
// =============================================================================
// This module handles crawling a documentation site.
//
// Features:
// - Depth-first crawling starting from a seed URL
// - Internal links (base domain and its subdomains) are followed,
//   external links are only recorded
// - Configurable depth limit
// - Every page fetched at most once per crawl
//
// Submodules:
// - link:    href filtering and internal/external classification
// - node:    the UrlNode tree and external-link deduplication
// - session: the crawl itself
// =============================================================================

mod link;
mod node;
mod session;

pub use link::normalize_domain;
pub use node::{deduplicate, UrlNode};
pub use session::{CrawlOutcome, CrawlStats, RevisitPolicy};

use session::CrawlSession;

use crate::config::CrawlConfig;
use crate::extract::LinkExtractor;
use crate::fetch::{FetchError, Fetcher};
use log::info;
use url::Url;

// Crawls the site described by `config`
//
// Returns the raw tree (external links not yet deduplicated) and the stats.
pub async fn crawl_site(fetcher: &dyn Fetcher, config: &CrawlConfig) -> CrawlOutcome {
    info!("Starting to scrape from: {}", config.seed_url);

    let session = CrawlSession::new(
        fetcher,
        &config.extractor,
        &config.base_domain,
        config.max_depth,
        config.revisit,
    );

    session.run(config.seed_url.as_str()).await
}

// Fetches a single page and returns every matching link, resolved
//
// No classification and no recursion: this is the flat listing used by
// the `nav` subcommand.
pub async fn list_links(
    fetcher: &dyn Fetcher,
    extractor: &LinkExtractor,
    page: &Url,
) -> Result<Vec<String>, FetchError> {
    let html = fetcher.fetch(page.as_str()).await?;
    Ok(extractor.resolved_links(&html, page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct OnePage(&'static str);

    #[async_trait]
    impl Fetcher for OnePage {
        async fn fetch(&self, _url: &str) -> Result<String, FetchError> {
            Ok(self.0.to_string())
        }
    }

    struct Offline;

    #[async_trait]
    impl Fetcher for Offline {
        async fn fetch(&self, url: &str) -> Result<String, FetchError> {
            Err(FetchError::Status {
                url: url.to_string(),
                status: 503,
            })
        }
    }

    #[tokio::test]
    async fn test_list_links_keeps_nav_only() {
        let page = Url::parse("https://docs.example.com/en/getting-started/index.html").unwrap();
        let extractor = LinkExtractor::new("nav a").unwrap();
        let fetcher = OnePage(
            r#"<nav><a href="setup.html">Setup</a><a href="https://other.com/">O</a></nav>
               <footer><a href="/legal">Legal</a></footer>"#,
        );

        let links = list_links(&fetcher, &extractor, &page).await.unwrap();

        assert_eq!(
            links,
            vec![
                "https://docs.example.com/en/getting-started/setup.html",
                "https://other.com/",
            ]
        );
    }

    #[tokio::test]
    async fn test_list_links_reports_fetch_failure() {
        let page = Url::parse("https://docs.example.com/").unwrap();
        let extractor = LinkExtractor::new("nav a").unwrap();

        let result = list_links(&Offline, &extractor, &page).await;

        assert!(matches!(result, Err(FetchError::Status { status: 503, .. })));
    }

    #[tokio::test]
    async fn test_crawl_dedup_and_report() {
        struct Site;

        #[async_trait]
        impl Fetcher for Site {
            async fn fetch(&self, url: &str) -> Result<String, FetchError> {
                let html = match url {
                    "https://docs.example.com/" => {
                        r#"<a href="/a">A</a><a href="https://other.com/">O</a><a href="https://other.com/">O</a>"#
                    }
                    "https://docs.example.com/a" => r#"<a href="/">Home</a><a href="https://other.com/">O</a>"#,
                    _ => "",
                };
                Ok(html.to_string())
            }
        }

        let config = CrawlConfig::new(
            "https://docs.example.com/",
            None,
            3,
            RevisitPolicy::Placeholder,
            "a[href]",
            10,
        )
        .unwrap();

        let mut root = crawl_site(&Site, &config).await.root;
        deduplicate(&mut root);
        assert_eq!(root.external_links, vec!["https://other.com/"]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("urls.txt");
        crate::report::write_report(&root, &path, crate::report::ReportFormat::Text).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "https://docs.example.com/\n  https://docs.example.com/a\n    https://other.com/\n"
        );
    }

    #[tokio::test]
    async fn test_crawl_site_uses_config() {
        let config = CrawlConfig::new(
            "https://docs.example.com/",
            Some("example.com"),
            0,
            RevisitPolicy::Placeholder,
            "a[href]",
            10,
        )
        .unwrap();
        let fetcher = OnePage(r#"<a href="/guide">G</a><a href="https://other.com/">O</a>"#);

        let outcome = crawl_site(&fetcher, &config).await;

        assert_eq!(outcome.root.url, "https://docs.example.com/");
        assert_eq!(outcome.root.children, vec![UrlNode::leaf("https://docs.example.com/guide")]);
        assert_eq!(outcome.root.external_links, vec!["https://other.com/"]);
        assert_eq!(outcome.stats.pages_fetched, 1);
    }
}
