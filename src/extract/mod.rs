// src/extract/mod.rs
// =============================================================================
// This module pulls hyperlink targets out of HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Deciding what a link *means* (internal, external, ignored) is the crawler's
// job, see crawl/link.rs. This module only finds the hrefs.
// =============================================================================

mod html;

pub use html::LinkExtractor;
