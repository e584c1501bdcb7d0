//! Markup conversion for text parts
//!
//! Text parts carry lightweight markup. The converted HTML is injected by
//! the renderer without re-escaping, so the output of this module must be
//! trusted-safe: raw HTML in the source is downgraded to escaped text
//! instead of being passed through.

use pulldown_cmark::{html, Event, Options, Parser};

/// Convert markup text to trusted-safe HTML.
pub fn markdown_to_html(text: &str) -> String {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES;
    let events = Parser::new_ext(text, options).map(|event| match event {
        // Re-emit raw HTML as text so it gets escaped by the writer.
        Event::Html(html) | Event::InlineHtml(html) => Event::Text(html),
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, events);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_formatting() {
        let html = markdown_to_html("some **bold** text");
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_code_block() {
        let html = markdown_to_html("```\nlet x = 1;\n```");
        assert!(html.contains("<pre><code>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = markdown_to_html("before <script>alert(1)</script> after");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
