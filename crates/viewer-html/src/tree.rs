//! HTML node tree and serialization
//!
//! Renderers build a `Node` tree and serialize it in one deterministic
//! pass, so identical documents always yield byte-identical HTML.

use std::fmt::Write;

/// A renderable HTML node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Text content; escaped during serialization.
    Text(String),
    /// Pre-rendered trusted HTML (markup converter output); injected verbatim.
    Raw(String),
}

impl Node {
    /// Serialize the node and its subtree to HTML text.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => escape_into(out, text),
            Node::Raw(html) => out.push_str(html),
            Node::Element(el) => {
                out.push('<');
                out.push_str(el.tag);
                if let Some(id) = el.id {
                    let _ = write!(out, " id=\"{}\"", id);
                }
                if let Some(class) = el.class {
                    let _ = write!(out, " class=\"{}\"", class);
                }
                out.push('>');
                for child in &el.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", el.tag);
            }
        }
    }
}

/// An element node with an optional id and class.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub id: Option<&'static str>,
    pub class: Option<&'static str>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            id: None,
            class: None,
            children: Vec::new(),
        }
    }

    pub fn id(mut self, id: &'static str) -> Self {
        self.id = Some(id);
        self
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Append an escaped text child.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// Escape text content for HTML. Quotes stay verbatim: this is only ever
/// used for text nodes, never for attribute values.
fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}
