//! XML fragment parser for documentation-comment content.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::CommentError;
use crate::tree::XmlNode;

/// Parse a documentation-comment XML fragment into an [`XmlNode`] tree.
///
/// The fragment is a sequence of elements and text with no single root, so
/// it is wrapped in a synthetic `root` element; the returned node is that
/// wrapper. Entity and character references are decoded into the text.
///
/// # Errors
///
/// Returns an error if the fragment is not well-formed XML.
pub fn parse_fragment(fragment: &str) -> Result<XmlNode, CommentError> {
    let wrapped = format!("<root>{fragment}</root>");
    let mut reader = Reader::from_str(&wrapped);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let tag = decode_name(&reader, e.name().as_ref());
                let attrs = decode_attrs(&reader, &e)?;
                let mut node = parse_children(&mut reader, &tag)?;
                node.tag = tag;
                node.attrs = attrs;
                return Ok(node);
            }
            Event::Eof => return Ok(XmlNode::new("root")),
            _ => {}
        }
        buf.clear();
    }
}

/// Parse the content of an open element until its matching end tag.
fn parse_children(reader: &mut Reader<&[u8]>, parent_tag: &str) -> Result<XmlNode, CommentError> {
    let mut buf = Vec::new();
    let mut node = XmlNode::default();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let tag = decode_name(reader, e.name().as_ref());
                let attrs = decode_attrs(reader, &e)?;
                let mut child = parse_children(reader, &tag)?;
                child.tag = tag;
                child.attrs = attrs;
                node.children.push(child);
            }
            Event::Empty(e) => {
                let child = XmlNode::new(decode_name(reader, e.name().as_ref()))
                    .with_attrs(decode_attrs(reader, &e)?);
                node.children.push(child);
            }
            Event::Text(e) => {
                let text = reader.decoder().decode(&e)?;
                node.append_text(&text);
            }
            Event::GeneralRef(e) => {
                let entity = reader.decoder().decode(&e)?;
                node.append_text(&decode_entity(&entity));
            }
            Event::CData(e) => {
                let text = String::from_utf8_lossy(&e);
                node.append_text(&text);
                node.cdata = true;
            }
            Event::End(e) => {
                if decode_name(reader, e.name().as_ref()) == parent_tag {
                    return Ok(node);
                }
            }
            Event::Eof => return Ok(node),
            Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
        }
        buf.clear();
    }
}

fn decode_name(reader: &Reader<&[u8]>, name: &[u8]) -> String {
    reader.decoder().decode(name).map_or_else(
        |_| String::from_utf8_lossy(name).into_owned(),
        std::borrow::Cow::into_owned,
    )
}

fn decode_attrs(
    reader: &Reader<&[u8]>,
    e: &BytesStart,
) -> Result<Vec<(String, String)>, CommentError> {
    let mut attrs = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = decode_name(reader, attr.key.as_ref());
        let value = attr.unescape_value().map_or_else(
            |_| String::from_utf8_lossy(&attr.value).into_owned(),
            std::borrow::Cow::into_owned,
        );
        attrs.push((key, value));
    }
    Ok(attrs)
}

/// Decode an entity or character reference to its text value. Unknown
/// entities are preserved verbatim.
fn decode_entity(entity: &str) -> String {
    match entity {
        "lt" => "<".to_owned(),
        "gt" => ">".to_owned(),
        "amp" => "&".to_owned(),
        "apos" => "'".to_owned(),
        "quot" => "\"".to_owned(),
        s if s.starts_with('#') => {
            let code = if s.starts_with("#x") || s.starts_with("#X") {
                u32::from_str_radix(&s[2..], 16).ok()
            } else {
                s[1..].parse::<u32>().ok()
            };
            code.and_then(char::from_u32)
                .map_or_else(|| format!("&{entity};"), |c| c.to_string())
        }
        _ => format!("&{entity};"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_simple_element() {
        let tree = parse_fragment("<summary>Hello</summary>").unwrap();

        assert_eq!(tree.children.len(), 1);
        let summary = &tree.children[0];
        assert_eq!(summary.tag, "summary");
        assert_eq!(summary.text, "Hello");
    }

    #[test]
    fn test_parse_nested_elements() {
        let tree = parse_fragment("<para><strong>Bold</strong> text</para>").unwrap();

        let para = &tree.children[0];
        assert!(para.text.is_empty());
        assert_eq!(para.children.len(), 1);
        assert_eq!(para.children[0].tag, "strong");
        assert_eq!(para.children[0].text, "Bold");
        assert_eq!(para.children[0].tail, " text");
    }

    #[test]
    fn test_parse_attributes_keep_order() {
        let tree = parse_fragment(r#"<list type="number" start="3"></list>"#).unwrap();

        let list = &tree.children[0];
        assert_eq!(
            list.attrs,
            vec![
                ("type".to_owned(), "number".to_owned()),
                ("start".to_owned(), "3".to_owned()),
            ]
        );
    }

    #[test]
    fn test_parse_self_closing_element() {
        let tree = parse_fragment("<para>Before<br />After</para>").unwrap();

        let para = &tree.children[0];
        assert_eq!(para.text, "Before");
        assert_eq!(para.children[0].tag, "br");
        assert_eq!(para.children[0].tail, "After");
    }

    #[test]
    fn test_parse_decodes_entities() {
        let tree = parse_fragment("<para>a &lt; b &amp; c &#65;</para>").unwrap();
        assert_eq!(tree.children[0].text, "a < b & c A");
    }

    #[test]
    fn test_parse_leading_and_trailing_text() {
        let tree = parse_fragment(" <summary>x</summary>\n").unwrap();
        assert_eq!(tree.text, " ");
        assert_eq!(tree.children[0].tail, "\n");
    }

    #[test]
    fn test_parse_rejects_malformed_fragment() {
        assert!(parse_fragment("<summary>a < b</summary>").is_err());
    }

    #[test]
    fn test_parse_empty_fragment() {
        let tree = parse_fragment("").unwrap();
        assert!(tree.children.is_empty());
        assert!(tree.text.is_empty());
    }
}
