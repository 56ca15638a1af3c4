// src/extract/html.rs
// =============================================================================
// Anchor extraction with a configurable CSS selector.
//
// The selector is parsed once when the extractor is built, so an invalid
// selector is reported as a configuration error before any page is fetched.
//
// Rust concepts:
// - Iterators: filter_map over the selected elements
// - Borrowing: hrefs are copied out of the DOM so the DOM can be dropped
// =============================================================================

use anyhow::{anyhow, Result};
use scraper::{Html, Selector};
use url::Url;

#[derive(Debug, Clone)]
pub struct LinkExtractor {
    selector: Selector,
}

impl LinkExtractor {
    // Parses the CSS selector used to find anchors
    //
    // Example:
    //   "a[href]" -> every anchor with an href
    //   "nav a"   -> only anchors inside <nav>
    pub fn new(css: &str) -> Result<Self> {
        let selector = Selector::parse(css)
            .map_err(|e| anyhow!("Invalid selector '{}': {:?}", css, e))?;
        Ok(Self { selector })
    }

    // Returns the raw href of every matching element, in document order
    //
    // Elements without an href attribute are left out. Empty hrefs are kept;
    // the caller decides what to do with them.
    pub fn hrefs(&self, html: &str) -> Vec<String> {
        // Html is dropped at the end of this function, so callers can hold
        // the returned strings across an .await
        let document = Html::parse_document(html);

        let hrefs = document
            .select(&self.selector)
            .filter_map(|element| element.value().attr("href"))
            .map(|href| href.to_string())
            .collect();
        hrefs
    }

    // Returns every matching href resolved against `base`
    //
    // Hrefs that cannot be resolved are dropped.
    //
    // Example:
    //   base = "https://docs.example.com/guide/index.html"
    //   href = "../api/" -> "https://docs.example.com/api/"
    pub fn resolved_links(&self, html: &str, base: &Url) -> Vec<String> {
        self.hrefs(html)
            .iter()
            .filter_map(|href| base.join(href).ok())
            .map(|url| url.to_string())
            .collect()
    }
}
