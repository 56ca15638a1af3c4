// src/crawl/node.rs
// =============================================================================
// The crawl tree.
//
// One UrlNode per crawled link. `children` holds the internal links of the
// page in document order, `external_links` the links that leave the site.
// The same URL can show up as several nodes (one per page that links to it),
// but only the first one was actually fetched.
// =============================================================================

use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlNode {
    /// Absolute URL of the page
    pub url: String,
    /// One node per internal link, in document order
    pub children: Vec<UrlNode>,
    /// Links to other sites, in discovery order
    pub external_links: Vec<String>,
}

impl UrlNode {
    // A node with no children and no external links
    pub fn leaf(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            children: Vec::new(),
            external_links: Vec::new(),
        }
    }
}

// Removes repeated external links from every node of the tree, in place
//
// The first occurrence of each URL keeps its position. Running it twice
// changes nothing the second time.
pub fn deduplicate(node: &mut UrlNode) {
    let mut seen = HashSet::new();
    node.external_links.retain(|link| seen.insert(link.clone()));

    for child in &mut node.children {
        deduplicate(child);
    }
}
