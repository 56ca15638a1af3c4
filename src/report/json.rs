// src/report/json.rs
// Pretty JSON dump of the whole tree. Unlike the text report nothing is
// dropped: a URL appears once per node that references it.

use crate::crawl::UrlNode;
use anyhow::Result;
use std::io::Write;

pub fn write_tree<W: Write>(root: &UrlNode, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, root)?;
    writeln!(out)?;
    Ok(())
}
