// src/config.rs
// =============================================================================
// Turns raw command-line values into a validated crawl configuration.
//
// Everything that can be wrong with the input is caught here, before the
// first request goes out:
// - the seed URL must be an absolute http(s) URL with a host
// - the base domain defaults to the seed's host
// - the anchor selector must be valid CSS
// =============================================================================

use crate::cli::RevisitArg;
use crate::crawl::{normalize_domain, RevisitPolicy};
use crate::extract::LinkExtractor;
use anyhow::{anyhow, bail, Result};
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    pub seed_url: Url,
    pub base_domain: String,
    pub max_depth: usize,
    pub revisit: RevisitPolicy,
    pub extractor: LinkExtractor,
    pub timeout: Option<Duration>,
}

impl CrawlConfig {
    pub fn new(
        seed_url: &str,
        base_domain: Option<&str>,
        max_depth: usize,
        revisit: RevisitPolicy,
        selector: &str,
        timeout_secs: u64,
    ) -> Result<Self> {
        let seed_url = parse_page_url(seed_url)?;

        let base_domain = match base_domain {
            Some(domain) => normalize_domain(domain),
            // parse_page_url guarantees a host
            None => seed_url.host_str().unwrap_or_default().to_string(),
        };
        if base_domain.is_empty() {
            bail!("Base domain must not be empty");
        }

        Ok(Self {
            seed_url,
            base_domain,
            max_depth,
            revisit,
            extractor: LinkExtractor::new(selector)?,
            timeout: timeout_from_secs(timeout_secs),
        })
    }
}

impl From<RevisitArg> for RevisitPolicy {
    fn from(arg: RevisitArg) -> Self {
        match arg {
            RevisitArg::Placeholder => RevisitPolicy::Placeholder,
            RevisitArg::Reuse => RevisitPolicy::Reuse,
        }
    }
}

// Parses a page URL given on the command line
//
// Relative URLs, non-http schemes and host-less URLs are rejected.
pub fn parse_page_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| anyhow!("Invalid URL '{}': {}", raw, e))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        bail!("URL must use http or https: {}", raw);
    }
    if url.host_str().is_none() {
        bail!("URL has no host: {}", raw);
    }

    Ok(url)
}

// 0 means "no timeout"
pub fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}
