// src/crawl/session.rs
// =============================================================================
// This module implements the recursive, depth-first crawl.
//
// How it works:
// 1. Take a URL and its depth (the seed is depth 0)
// 2. If we've already seen the URL, return a leaf (or the cached node)
// 3. Mark it visited; if it's deeper than max_depth, return it unexpanded
// 4. Fetch the page and walk its anchors in document order
// 5. Internal links are crawled right away (depth + 1) and become children,
//    external links are recorded on the node
//
// All state for one crawl lives in a CrawlSession, so two crawls never share
// a visited-set. Children are crawled one at a time: the visited-set has to be
// up to date before the next sibling is looked at, or the same page could be
// fetched twice.
//
// Rust concepts:
// - HashSet/HashMap: visited URLs and finished nodes (O(1) lookup)
// - Boxed futures: an async fn can't call itself directly, so crawl()
//   returns a LocalBoxFuture that can
// - Trait objects: &dyn Fetcher lets tests swap out the network
// =============================================================================

use super::link::{self, LinkKind};
use super::node::UrlNode;
use crate::extract::LinkExtractor;
use crate::fetch::Fetcher;
use futures::future::{FutureExt, LocalBoxFuture};
use log::{debug, error, info};
use std::collections::{HashMap, HashSet};
use url::Url;

// What a URL reached a second time contributes to the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevisitPolicy {
    /// An empty leaf: the page's links only show up under its first parent
    #[default]
    Placeholder,
    /// A copy of the node built on the first visit, if that visit has finished.
    /// A link back to a page still being crawled (a cycle) is still a leaf.
    Reuse,
}

// Counters collected while crawling, printed in the final summary
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CrawlStats {
    pub pages_fetched: usize,
    pub fetch_failures: usize,
    pub revisits: usize,
    pub depth_limited: usize,
    pub external_links: usize,
    pub skipped_links: usize,
    pub malformed_links: usize,
}

// The finished tree plus the counters for the run
#[derive(Debug)]
pub struct CrawlOutcome {
    pub root: UrlNode,
    pub stats: CrawlStats,
}

pub struct CrawlSession<'a> {
    fetcher: &'a dyn Fetcher,
    extractor: &'a LinkExtractor,
    base_domain: String,
    max_depth: usize,
    revisit: RevisitPolicy,
    visited: HashSet<String>,
    // Only filled under RevisitPolicy::Reuse
    completed: HashMap<String, UrlNode>,
    stats: CrawlStats,
}

impl<'a> CrawlSession<'a> {
    pub fn new(
        fetcher: &'a dyn Fetcher,
        extractor: &'a LinkExtractor,
        base_domain: &str,
        max_depth: usize,
        revisit: RevisitPolicy,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            base_domain: link::normalize_domain(base_domain),
            max_depth,
            revisit,
            visited: HashSet::new(),
            completed: HashMap::new(),
            stats: CrawlStats::default(),
        }
    }

    // Crawls everything reachable from `seed` and consumes the session
    pub async fn run(mut self, seed: &str) -> CrawlOutcome {
        let root = self.crawl(seed.to_string(), 0).await;
        CrawlOutcome {
            root,
            stats: self.stats,
        }
    }

    // Builds the node for `url`, found `depth` links away from the seed
    //
    // Never fails: a page that can't be fetched is returned without links.
    pub fn crawl(&mut self, url: String, depth: usize) -> LocalBoxFuture<'_, UrlNode> {
        async move {
            let indent = "  ".repeat(depth);

            if self.visited.contains(&url) {
                self.stats.revisits += 1;
                if let Some(node) = self.completed.get(&url) {
                    debug!("{}Reusing: {}", indent, url);
                    return node.clone();
                }
                debug!("{}Already visited: {}", indent, url);
                return UrlNode::leaf(url);
            }

            self.visited.insert(url.clone());
            let mut node = UrlNode::leaf(url.as_str());

            if depth > self.max_depth {
                self.stats.depth_limited += 1;
                debug!("{}Depth limit reached: {}", indent, url);
                return self.finish(node);
            }

            // Node URLs come from Url::to_string or a validated seed, so this
            // only fails if a caller hands us garbage
            let page = match Url::parse(&url) {
                Ok(page) => page,
                Err(e) => {
                    error!("{}Error scraping {}: {}", indent, url, e);
                    return self.finish(node);
                }
            };

            info!("{}Scraping: {}", indent, url);

            let html = match self.fetcher.fetch(&url).await {
                Ok(html) => html,
                Err(e) => {
                    self.stats.fetch_failures += 1;
                    error!("{}Error scraping {}: {}", indent, url, e);
                    return self.finish(node);
                }
            };
            self.stats.pages_fetched += 1;

            for href in self.extractor.hrefs(&html) {
                match link::classify(&href, &page, &self.base_domain) {
                    LinkKind::Internal(target) => {
                        let child = self.crawl(target, depth + 1).await;
                        node.children.push(child);
                    }
                    LinkKind::External(target) => {
                        self.stats.external_links += 1;
                        node.external_links.push(target);
                    }
                    LinkKind::Ignored => {
                        self.stats.skipped_links += 1;
                    }
                    LinkKind::Malformed => {
                        self.stats.malformed_links += 1;
                        debug!("{}Skipping malformed link on {}: {:?}", indent, url, href);
                    }
                }
            }

            self.finish(node)
        }
        .boxed_local()
    }

    fn finish(&mut self, node: UrlNode) -> UrlNode {
        if self.revisit == RevisitPolicy::Reuse {
            self.completed.insert(node.url.clone(), node.clone());
        }
        node
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why can't an async fn just call itself?
//    - An async fn compiles to a state machine that contains its own future
//    - Calling itself would make that type infinitely large
//    - Boxing the future (LocalBoxFuture) puts the recursive part on the heap
//
// 2. Why LocalBoxFuture and not BoxFuture?
//    - BoxFuture must be Send so it can move between threads
//    - The crawl runs on one task and never gets spawned, so Local is enough
//
// 3. Why &mut self in crawl()?
//    - The visited-set and stats change on every call
//    - Only one crawl() can hold &mut self at a time, which is exactly the
//      "one page at a time" rule the crawler needs
//
// 4. Why return a clone under RevisitPolicy::Reuse?
//    - The tree owns its nodes, so the same node can't sit in two places
//    - Rc<UrlNode> would avoid the copy but make deduplication harder
// -----------------------------------------------------------------------------
