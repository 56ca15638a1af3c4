// src/report/text.rs
// =============================================================================
// Writes the crawl tree as an indented list of URLs.
//
// Layout for one node:
//   <indent>node url
//   <indent + 2 spaces>...every child, depth-first, in document order...
//   <indent + 2 spaces>...the node's external links...
//
// A URL is written the first time it comes up anywhere in the tree and never
// again, so each URL appears in the report exactly once.
// =============================================================================

use crate::crawl::UrlNode;
use std::collections::HashSet;
use std::io::{self, Write};

const INDENT_UNIT: &str = "  ";

// Writes `root` and everything below it to `out`
//
// Returns the number of lines written. The written-set lives only for this
// call, so every report starts fresh.
pub fn write_tree<W: Write>(root: &UrlNode, out: &mut W) -> io::Result<usize> {
    let mut written = HashSet::new();
    write_node(root, out, "", &mut written)?;
    Ok(written.len())
}

fn write_node<'a, W: Write>(
    node: &'a UrlNode,
    out: &mut W,
    indent: &str,
    written: &mut HashSet<&'a str>,
) -> io::Result<()> {
    if written.insert(node.url.as_str()) {
        writeln!(out, "{}{}", indent, node.url)?;
    }

    let child_indent = format!("{}{}", indent, INDENT_UNIT);

    for child in &node.children {
        write_node(child, out, &child_indent, written)?;
    }

    for link in &node.external_links {
        if written.insert(link.as_str()) {
            writeln!(out, "{}{}", child_indent, link)?;
        }
    }

    Ok(())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why HashSet<&'a str> instead of HashSet<String>?
//    - The URLs already live in the tree for the whole call
//    - Borrowing them avoids copying every URL into the set
//    - The lifetime 'a says "these borrows come from the tree"
//
// 2. Why generic over W: Write?
//    - The same code writes to a BufWriter<File> in production and a
//      Vec<u8> in tests
// -----------------------------------------------------------------------------
