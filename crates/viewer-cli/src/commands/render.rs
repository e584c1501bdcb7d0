//! `render` command - render a snapshot file to HTML

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use viewer_core::decode_snapshot;
use viewer_html::render_page;

pub fn run(snapshot: &Path, out: Option<&Path>) -> Result<()> {
    let body = fs::read_to_string(snapshot)
        .with_context(|| format!("failed to read {}", snapshot.display()))?;
    let doc = decode_snapshot(&body)
        .with_context(|| format!("failed to decode {}", snapshot.display()))?;
    write_output(&render_page(&doc), out)
}

pub(crate) fn write_output(html: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, html).with_context(|| format!("failed to write {}", path.display()))
        }
        None => {
            print!("{}", html);
            Ok(())
        }
    }
}
