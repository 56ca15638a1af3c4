// src/report/mod.rs
// =============================================================================
// This module writes crawl results to disk.
//
// Submodules:
// - text: the indented, globally deduplicated URL report
// - json: the full tree as JSON (--json)
//
// The output file is opened once, written as the tree is walked, flushed,
// and closed when the writer goes out of scope at the end of write_report.
// =============================================================================

mod json;
mod text;

use crate::crawl::UrlNode;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

// Writes the tree to `path` in the given format
//
// Returns the number of distinct URLs in the report.
pub fn write_report(root: &UrlNode, path: &Path, format: ReportFormat) -> Result<usize> {
    let file = File::create(path)
        .with_context(|| format!("Could not create output file {}", path.display()))?;
    let mut out = BufWriter::new(file);

    let count = match format {
        ReportFormat::Text => text::write_tree(root, &mut out)
            .with_context(|| format!("Could not write {}", path.display()))?,
        ReportFormat::Json => {
            json::write_tree(root, &mut out)
                .with_context(|| format!("Could not write {}", path.display()))?;
            count_unique_urls(root)
        }
    };

    out.flush()
        .with_context(|| format!("Could not write {}", path.display()))?;

    Ok(count)
}

// Writes one URL per line with no trailing newline
pub fn write_list(path: &Path, urls: &[String]) -> Result<()> {
    std::fs::write(path, urls.join("\n"))
        .with_context(|| format!("Could not write {}", path.display()))
}

fn count_unique_urls(root: &UrlNode) -> usize {
    fn collect<'a>(node: &'a UrlNode, seen: &mut HashSet<&'a str>) {
        seen.insert(node.url.as_str());
        seen.extend(node.external_links.iter().map(String::as_str));
        for child in &node.children {
            collect(child, seen);
        }
    }

    let mut seen = HashSet::new();
    collect(root, &mut seen);
    seen.len()
}
