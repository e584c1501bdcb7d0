//! `serve` command - serve the rendered transcript over HTTP
//!
//! The route table mirrors the agent's own UI server: `/` is the rendered
//! page, `/state` the raw document. The state file is re-read and fully
//! re-rendered on every request, so refreshing the page always shows the
//! latest snapshot.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use viewer_core::decode_snapshot;
use viewer_html::render_page;

pub async fn run(state: PathBuf, port: u16) -> Result<()> {
    let app = router(Arc::new(state));

    let addr = format!("127.0.0.1:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("serving transcript on http://{}", addr);
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

fn router(state: Arc<PathBuf>) -> Router {
    Router::new()
        .route("/", get(page))
        .route("/state", get(state_document))
        .with_state(state)
}

async fn page(State(path): State<Arc<PathBuf>>) -> Response {
    match load_and_render(&path).await {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!("render failed: {:#}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("render failed: {:#}", err),
            )
                .into_response()
        }
    }
}

async fn load_and_render(path: &PathBuf) -> Result<String> {
    let body = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let doc = decode_snapshot(&body)?;
    Ok(render_page(&doc))
}

async fn state_document(State(path): State<Arc<PathBuf>>) -> Response {
    match tokio::fs::read_to_string(path.as_ref()).await {
        Ok(body) => (
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(err) => {
            tracing::error!("failed to read state file: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_page_renders_state_file() {
        let tmp = tempfile::tempdir().unwrap();
        let state = tmp.path().join("state.json");
        std::fs::write(
            &state,
            r#"{"history": [{"role": "user", "parts": [{"text": "hi"}]}]}"#,
        )
        .unwrap();

        let html = load_and_render(&state).await.unwrap();
        assert!(html.contains(r#"<div id="history">"#));
        assert!(html.contains("User → Model"));
    }

    #[tokio::test]
    async fn test_page_fails_on_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.json");
        assert!(load_and_render(&missing).await.is_err());
    }
}
