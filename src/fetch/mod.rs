// src/fetch/mod.rs
// =============================================================================
// This module is the crawler's only door to the network.
//
// The crawl engine never talks to reqwest directly. It holds something that
// implements `Fetcher`, which turns a URL into the page's HTML or an error.
// The real implementation is `HttpFetcher`; tests swap in an in-memory one.
//
// Rust concepts:
// - Traits: A shared interface many types can implement
// - async-trait: Lets trait methods be async (and usable behind &dyn)
// - thiserror: Derives std::error::Error for our error enum
// =============================================================================

mod http;

use async_trait::async_trait;
use thiserror::Error;

pub use http::HttpFetcher;

// Why a fetch failed
//
// Either way the crawler logs it and moves on; the page simply has no links.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered, but not with a 2xx status
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// DNS, connect, TLS, timeout, body decoding, ...
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

// Anything that can turn a URL into page content
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches `url` and returns the response body as text
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
