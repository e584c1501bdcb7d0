//! Part rendering - dispatch by part kind
//!
//! Text parts go through the markup converter; function calls and
//! responses get one labeled block per field, with value renderers
//! special-cased for the agent's file tools (`write_file`, `read_file`,
//! `list_directory`). Unknown shapes always fall back to a JSON dump.

use serde_json::{Map, Value};
use viewer_core::{markdown_to_html, FunctionCall, FunctionResponse, Part};

use crate::tree::{Element, Node};

/// Render a single part.
pub fn render_part(part: &Part) -> Node {
    match part {
        Part::Text(text) => Element::new("div")
            .class("text")
            .child(Node::Raw(markdown_to_html(text)))
            .into(),
        Part::FunctionCall(call) => render_function_call(call),
        Part::FunctionResponse(resp) => render_function_response(resp),
        Part::Unknown { key, raw } => render_unknown(key, raw),
    }
}

/// Render a function call: name, a one-line args summary, and one labeled
/// block per argument.
fn render_function_call(call: &FunctionCall) -> Node {
    let args = narrow_call_args(&call.name, &call.args);
    let summary = Value::Object(args.clone()).to_string();

    let mut el = Element::new("div")
        .class("function-call")
        .child(Element::new("span").class("fn-name").text(call.name.as_str()))
        .child(Element::new("code").class("fn-args").text(summary));

    for (arg, value) in &args {
        el = el.child(labeled_value(&call.name, arg, value));
    }
    el.into()
}

/// Render a function response: name plus one labeled block per response
/// field.
fn render_function_response(resp: &FunctionResponse) -> Node {
    let mut el = Element::new("div")
        .class("function-response")
        .child(Element::new("span").class("fn-name").text(resp.name.as_str()));

    for (field, value) in &resp.response {
        el = el.child(labeled_value(&resp.name, field, value));
    }
    el.into()
}

/// `write_file` calls carry the whole file in `args.contents`; the call
/// view keeps only `path` so the payload is not duplicated outside the
/// file-contents block. Applies to calls only, never to responses.
fn narrow_call_args(function: &str, args: &Map<String, Value>) -> Map<String, Value> {
    if function == "write_file" {
        args.iter()
            .filter(|(key, _)| key.as_str() == "path")
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    } else {
        args.clone()
    }
}

/// A labeled sub-block for one argument or response field.
fn labeled_value(function: &str, field: &str, value: &Value) -> Node {
    Element::new("div")
        .class("arg")
        .child(Element::new("span").class("arg-name").text(field))
        .child(render_arg_value(function, field, value))
        .into()
}

/// Render one argument or response value, special-cased per tool field.
pub fn render_arg_value(function: &str, field: &str, value: &Value) -> Node {
    match (function, field) {
        ("write_file", "contents") | ("read_file", "result") => file_contents_block(value),
        ("list_directory", "result") => directory_listing(value),
        _ => Element::new("span")
            .class("arg-value")
            .text(value_text(value))
            .into(),
    }
}

/// Collapsible block for file contents; the summary shows the line count.
fn file_contents_block(value: &Value) -> Node {
    let text = value_text(value);
    let line_count = text.lines().count();
    Element::new("details")
        .class("file-contents")
        .child(Element::new("summary").text(format!("File contents ({} lines)", line_count)))
        .child(Element::new("pre").text(text))
        .into()
}

/// Directory listing as an unordered list of filenames.
fn directory_listing(value: &Value) -> Node {
    let mut list = Element::new("ul").class("directory");
    match value.as_array() {
        Some(entries) => {
            for entry in entries {
                list = list.child(Element::new("li").class("filename").text(value_text(entry)));
            }
        }
        // Not a list; still render something.
        None => {
            list = list.child(Element::new("li").class("filename").text(value_text(value)));
        }
    }
    list.into()
}

/// Fallback block for unknown or shape-violating parts. Never fails.
fn render_unknown(key: &str, raw: &Value) -> Node {
    let dump = serde_json::to_string_pretty(raw).unwrap_or_else(|_| raw.to_string());
    Element::new("div")
        .class("unknown-part")
        .child(Element::new("span").class("part-kind").text(key))
        .child(Element::new("pre").text(dump))
        .into()
}

/// Stringify a value for plain display (strings verbatim, everything else
/// compact JSON).
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use viewer_core::decode_part;

    #[test]
    fn test_text_part_is_markdown_converted() {
        let html = render_part(&Part::Text("**bold**".to_string())).to_html();
        assert!(html.contains(r#"<div class="text">"#));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_write_file_call_narrows_to_path() {
        let part = decode_part(&json!({
            "function_call": {
                "id": null,
                "name": "write_file",
                "args": {"path": "/a.txt", "contents": "hello"}
            }
        }))
        .unwrap();
        let html = render_part(&part).to_html();
        assert!(html.contains(r#"{"path":"/a.txt"}"#));
        assert!(!html.contains("hello"));
    }

    #[test]
    fn test_other_call_args_are_not_narrowed() {
        let part = decode_part(&json!({
            "function_call": {
                "id": null,
                "name": "list_directory",
                "args": {"path": "src"}
            }
        }))
        .unwrap();
        let html = render_part(&part).to_html();
        assert!(html.contains("list_directory"));
        assert!(html.contains(r#"{"path":"src"}"#));
    }

    #[test]
    fn test_read_file_result_collapsible_counts_lines() {
        let node = render_arg_value("read_file", "result", &json!("line1\nline2\nline3"));
        let html = node.to_html();
        assert!(html.contains("<details"));
        assert!(html.contains("File contents (3 lines)"));
        assert!(html.contains("line2"));
    }

    #[test]
    fn test_write_file_contents_uses_file_block() {
        let html = render_arg_value("write_file", "contents", &json!("a\nb")).to_html();
        assert!(html.contains("File contents (2 lines)"));
    }

    #[test]
    fn test_list_directory_result_renders_list_items() {
        let part = decode_part(&json!({
            "function_response": {
                "id": null,
                "name": "list_directory",
                "response": {"result": ["a.txt", "b.txt"]}
            }
        }))
        .unwrap();
        let html = render_part(&part).to_html();
        assert_eq!(html.matches("<li class=\"filename\">").count(), 2);
        assert!(html.contains(">a.txt</li>"));
        assert!(html.contains(">b.txt</li>"));
    }

    #[test]
    fn test_plain_value_fallback_stringifies() {
        let html = render_arg_value("fx_build", "target", &json!("//foo:bar")).to_html();
        assert!(html.contains("//foo:bar"));

        let html = render_arg_value("check_gn_label", "result", &json!(true)).to_html();
        assert!(html.contains("true"));
    }

    #[test]
    fn test_unknown_part_renders_key_and_dump() {
        let part = decode_part(&json!({"thought": {"x": 1}})).unwrap();
        let html = render_part(&part).to_html();
        assert!(html.contains(r#"<div class="unknown-part">"#));
        assert!(html.contains("thought"));
        assert!(html.contains("\"x\": 1"));
    }

    #[test]
    fn test_shape_violation_renders_joined_key() {
        let part = decode_part(&json!({"text": "a", "function_call": {"name": "f"}})).unwrap();
        let html = render_part(&part).to_html();
        assert!(html.contains("text,function_call"));
    }
}
