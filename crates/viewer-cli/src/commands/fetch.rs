//! `fetch` command - load /state from a running agent and render it
//!
//! One request, no retries: a transport failure or malformed body aborts
//! the whole pass with a non-zero exit instead of rendering a partial
//! transcript.

use std::path::Path;

use anyhow::{Context, Result};
use viewer_core::{decode_state, StateDocument};
use viewer_html::render_page;

use super::render::write_output;

/// Fetch and decode the state document from `{base}/state`.
pub async fn fetch_state(base: &str) -> Result<StateDocument> {
    let url = format!("{}/state", base.trim_end_matches('/'));
    let body = reqwest::get(&url)
        .await
        .and_then(|resp| resp.error_for_status())
        .with_context(|| format!("GET {} failed", url))?
        .text()
        .await
        .with_context(|| format!("failed to read body from {}", url))?;

    decode_state(&body).with_context(|| format!("failed to decode state from {}", url))
}

pub async fn run(base: &str, out: Option<&Path>) -> Result<()> {
    let doc = fetch_state(base).await?;
    write_output(&render_page(&doc), out)
}
