//! Removal of redundant paragraph wrappers from rendered comments.
//!
//! The renderer wraps every loose paragraph in `<para>`, but the host
//! comment format treats the body of `<summary>` as an implicit paragraph
//! already. This pass reconciles the two conventions after rendering.

use crate::tree::XmlNode;

const PARA_TAG: &str = "para";
const SUMMARY_TAG: &str = "summary";

/// Remove unnecessary `para` wrappers in place.
///
/// Two passes: first every removable wrapper is marked, then each marked
/// wrapper is replaced by its own content. Marking happens entirely before
/// splicing, so lifted content is never re-evaluated in the same run.
pub fn remove_unnecessary_paragraphs(root: &mut XmlNode) {
    mark(root);
    splice(root);
}

fn mark(node: &mut XmlNode) {
    for child in &mut node.children {
        if is_unnecessary_para(child) {
            child.unnecessary = true;
        }
        mark(child);
    }

    // A summary whose entire trimmed content is a single attribute-free
    // paragraph sheds that paragraph too, loose content and all.
    if node.tag == SUMMARY_TAG && node.children.len() == 1 && !node.has_loose_content() {
        let only = &mut node.children[0];
        if only.tag == PARA_TAG && only.attrs.is_empty() && only.tail.trim().is_empty() {
            only.unnecessary = true;
        }
    }
}

/// A `para` is removable when it carries no attributes and no content of
/// its own beyond child elements and whitespace.
fn is_unnecessary_para(node: &XmlNode) -> bool {
    node.tag == PARA_TAG && node.attrs.is_empty() && !node.has_loose_content()
}

fn splice(node: &mut XmlNode) {
    for child in &mut node.children {
        splice(child);
    }

    if !node.children.iter().any(|child| child.unnecessary) {
        return;
    }

    let old_children = std::mem::take(&mut node.children);
    for mut child in old_children {
        if child.unnecessary {
            node.append_text(&child.text);
            node.children.append(&mut child.children);
            node.append_text(&child.tail);
        } else {
            node.children.push(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parser::parse_fragment;
    use crate::serializer::serialize;

    fn unwrap_fragment(fragment: &str) -> String {
        let mut tree = parse_fragment(fragment).unwrap();
        remove_unnecessary_paragraphs(&mut tree);
        serialize(&tree)
    }

    #[test]
    fn test_summary_single_para_is_unwrapped() {
        assert_eq!(
            unwrap_fragment("<summary>\n <para>Text</para>\n </summary>"),
            "<summary>\n Text\n </summary>"
        );
    }

    #[test]
    fn test_summary_with_two_paras_keeps_both() {
        let fragment = "<summary>\n<para>One</para>\n<para>Two</para>\n</summary>";
        assert_eq!(unwrap_fragment(fragment), fragment);
    }

    #[test]
    fn test_summary_para_with_attributes_is_kept() {
        let fragment = r#"<summary><para id="x">Text</para></summary>"#;
        assert_eq!(unwrap_fragment(fragment), fragment);
    }

    #[test]
    fn test_remarks_single_para_is_kept() {
        // The implicit-paragraph convention applies to summary only.
        let fragment = "<remarks>\n <para>Text</para>\n </remarks>";
        assert_eq!(unwrap_fragment(fragment), fragment);
    }

    #[test]
    fn test_para_with_only_elements_is_spliced() {
        assert_eq!(
            unwrap_fragment("<remarks><para><see href=\"x\">link</see></para></remarks>"),
            "<remarks><see href=\"x\">link</see></remarks>"
        );
    }

    #[test]
    fn test_para_with_loose_text_is_kept() {
        let fragment = "<remarks><para>prose</para></remarks>";
        assert_eq!(unwrap_fragment(fragment), fragment);
    }

    #[test]
    fn test_para_with_cdata_is_kept() {
        // CDATA counts as loose content even when it is only whitespace.
        let fragment = "<remarks><para><![CDATA[ ]]><em>x</em></para></remarks>";
        assert_eq!(
            unwrap_fragment(fragment),
            "<remarks><para> <em>x</em></para></remarks>"
        );
    }

    #[test]
    fn test_splicing_is_idempotent() {
        let fragment = "<summary>\n <para>One <em>word</em></para>\n </summary>";
        let once = unwrap_fragment(fragment);
        let twice = unwrap_fragment(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_splice_preserves_surrounding_text_order() {
        let fragment = "<remarks>before <para><em>x</em></para> after</remarks>";
        assert_eq!(
            unwrap_fragment(fragment),
            "<remarks>before <em>x</em> after</remarks>"
        );
    }
}
