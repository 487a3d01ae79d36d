//! XML fragment serializer.

use std::fmt::Write;

use crate::tree::XmlNode;

/// Serialize a parsed fragment back to text, skipping the synthetic root
/// wrapper.
#[must_use]
pub fn serialize(root: &XmlNode) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str(&escape_text(&root.text));
    for child in &root.children {
        serialize_node(child, &mut out);
    }
    out
}

/// Serialize the content of a node: its text and children, without the
/// node's own tags or tail.
#[must_use]
pub fn serialize_inner(node: &XmlNode) -> String {
    let mut out = String::with_capacity(256);
    out.push_str(&escape_text(&node.text));
    for child in &node.children {
        serialize_node(child, &mut out);
    }
    out
}

/// Serialize one node and its tail.
pub(crate) fn serialize_node(node: &XmlNode, out: &mut String) {
    out.push('<');
    out.push_str(&node.tag);
    for (key, value) in &node.attrs {
        // Infallible for String targets.
        let _ = write!(out, r#" {}="{}""#, key, escape_attr(value));
    }

    if node.children.is_empty() && node.text.is_empty() {
        out.push_str(" />");
    } else {
        out.push('>');
        out.push_str(&escape_text(&node.text));
        for child in &node.children {
            serialize_node(child, out);
        }
        let _ = write!(out, "</{}>", node.tag);
    }

    out.push_str(&escape_text(&node.tail));
}

/// Escape text for XML content.
pub(crate) fn escape_text(text: &str) -> String {
    escape_xml(text, false)
}

/// Escape text for XML attribute values.
pub(crate) fn escape_attr(text: &str) -> String {
    escape_xml(text, true)
}

fn escape_xml(text: &str, escape_quotes: bool) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' if escape_quotes => result.push_str("&quot;"),
            '\'' if escape_quotes => result.push_str("&apos;"),
            _ => result.push(ch),
        }
    }
    result
}
