//! Entry and transcript rendering

use viewer_core::{HistoryEntry, StateDocument};

use crate::parts::render_part;
use crate::tree::{Element, Node};

/// Render one history entry: role header plus its parts in order.
pub fn render_entry(entry: &HistoryEntry) -> Node {
    Element::new("div")
        .class("entry")
        .child(Element::new("div").class("role").text(entry.role.label()))
        .children(entry.parts.iter().map(render_part))
        .into()
}

/// Render the full transcript. Entry order is transcript order; nothing is
/// reordered or deduplicated.
pub fn render_transcript(doc: &StateDocument) -> Node {
    Element::new("div")
        .id("history")
        .children(doc.history.iter().map(render_entry))
        .into()
}

/// Render a complete standalone HTML page for the document.
pub fn render_page(doc: &StateDocument) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Transcript</title>\n<style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        STYLESHEET,
        render_transcript(doc).to_html()
    )
}

/// Minimal page styling; the structure is carried by semantic classes.
const STYLESHEET: &str = "\
body { font-family: sans-serif; max-width: 60em; margin: 1em auto; }\n\
.entry { border-bottom: 1px solid #ddd; padding: 0.5em 0; }\n\
.role { font-weight: bold; color: #555; }\n\
.function-call, .function-response { background: #f6f6f6; padding: 0.5em; margin: 0.25em 0; }\n\
.fn-name { font-weight: bold; }\n\
.fn-args { color: #777; margin-left: 0.5em; }\n\
.arg-name { color: #777; margin-right: 0.5em; }\n\
.unknown-part { background: #fff3f3; padding: 0.5em; }\n\
pre { overflow-x: auto; }\n";

#[cfg(test)]
mod tests {
    use super::*;
    use viewer_core::decode_state;

    const BODY: &str = r#"{"history": [
        {"role": "user", "parts": [{"text": "do the thing"}]},
        {"role": "model", "parts": [
            {"text": "on it"},
            {"function_call": {"id": null, "name": "read_file", "args": {"path": "a.txt"}}}
        ]},
        {"role": "user", "parts": [
            {"function_response": {"id": null, "name": "read_file", "response": {"result": "x\ny"}}}
        ]}
    ]}"#;

    #[test]
    fn test_one_entry_block_per_history_entry() {
        let doc = decode_state(BODY).unwrap();
        let html = render_transcript(&doc).to_html();
        assert_eq!(html.matches(r#"<div class="entry">"#).count(), 3);
    }

    #[test]
    fn test_entries_keep_input_order() {
        let doc = decode_state(BODY).unwrap();
        let html = render_transcript(&doc).to_html();
        let first = html.find("do the thing").unwrap();
        let second = html.find("on it").unwrap();
        let third = html.find("File contents (2 lines)").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_role_headers() {
        let doc = decode_state(BODY).unwrap();
        let html = render_transcript(&doc).to_html();
        assert!(html.contains("User → Model"));
        assert!(html.contains("Model → User"));
    }

    #[test]
    fn test_render_page_is_idempotent() {
        let doc = decode_state(BODY).unwrap();
        assert_eq!(render_page(&doc), render_page(&doc));
    }

    #[test]
    fn test_page_wraps_transcript_once() {
        let doc = decode_state(BODY).unwrap();
        let page = render_page(&doc);
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert_eq!(page.matches(r#"<div id="history">"#).count(), 1);
    }
}
