//! Doc-comment rewriting: Markdown bodies to structured markup.

use std::fmt::Write;

use mddoc_render::{LineEnding, RenderContext, render_to_string};

use crate::error::CommentError;
use crate::parser::parse_fragment;
use crate::serializer::{escape_attr, escape_text, serialize, serialize_inner, serialize_node};
use crate::tree::XmlNode;
use crate::unwrap::remove_unnecessary_paragraphs;

/// Top-level elements whose bodies are treated as Markdown.
const BLOCK_TAGS: &[&str] = &["summary", "remarks", "returns", "value"];

/// Comment line prefix, without the indentation that may precede it.
const PREFIX: &str = "///";

/// Rewrite a `///` documentation comment, rendering the Markdown inside
/// `summary`, `remarks`, `returns` and `value` elements as structured
/// markup.
///
/// Any failure along the way — the comment is not well-formed XML, a line
/// is not prefixed, the Markdown tree holds an unsupported node — leaves
/// the comment unchanged. A comment that is already in rendered form comes
/// back unchanged too.
#[must_use]
pub fn rewrite_doc_comment(
    comment: &str,
    context: &RenderContext<'_>,
    line_ending: LineEnding,
) -> String {
    match try_rewrite(comment, context, line_ending) {
        Ok(Some(rewritten)) => rewritten,
        Ok(None) => comment.to_owned(),
        Err(error) => {
            tracing::debug!(%error, "leaving doc comment unchanged");
            comment.to_owned()
        }
    }
}

fn try_rewrite(
    comment: &str,
    context: &RenderContext<'_>,
    line_ending: LineEnding,
) -> Result<Option<String>, CommentError> {
    let Some(stripped) = strip_prefixes(comment) else {
        return Ok(None);
    };

    let tree = parse_fragment(&stripped.content)?;
    let Some(spliced) = render_block_elements(&tree, context)? else {
        return Ok(None);
    };

    // Trailing whitespace on each line goes away before the rendered
    // markup is parsed back; a final blank line is dropped entirely.
    let mut lines: Vec<&str> = spliced.split('\n').map(str::trim_end).collect();
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    let cleaned = lines.join("\n");

    let mut tree = parse_fragment(&cleaned)?;
    remove_unnecessary_paragraphs(&mut tree);
    let rebuilt = reassemble(&serialize(&tree), &stripped, line_ending);

    if rebuilt == comment {
        Ok(None)
    } else {
        Ok(Some(rebuilt))
    }
}

struct StrippedComment {
    /// Comment content with the per-line `///` decoration removed.
    content: String,
    /// Indentation plus `///`, taken from the first line and applied to
    /// every rewritten line.
    prefix: String,
    /// Whether the comment ended with a line terminator.
    trailing_newline: bool,
}

/// Remove the line-prefix decoration. Returns `None` when some line is not
/// a `///` comment line.
fn strip_prefixes(comment: &str) -> Option<StrippedComment> {
    let mut content = String::with_capacity(comment.len());
    let mut prefix = None;
    for line in comment.lines() {
        let start = line.find(PREFIX)?;
        if !line[..start].trim().is_empty() {
            return None;
        }
        if prefix.is_none() {
            prefix = Some(line[..start + PREFIX.len()].to_owned());
        }
        if !content.is_empty() {
            content.push('\n');
        }
        content.push_str(&line[start + PREFIX.len()..]);
    }
    Some(StrippedComment {
        content,
        prefix: prefix?,
        trailing_newline: comment.ends_with('\n'),
    })
}

/// Serialize the fragment with each Markdown block element's body replaced
/// by its rendered markup. Returns `None` when the fragment holds no such
/// element.
fn render_block_elements(
    root: &XmlNode,
    context: &RenderContext<'_>,
) -> Result<Option<String>, CommentError> {
    let mut out = String::with_capacity(1024);
    out.push_str(&escape_text(&root.text));
    let mut rendered_any = false;

    for child in &root.children {
        if !BLOCK_TAGS.contains(&child.tag.as_str()) {
            serialize_node(child, &mut out);
            continue;
        }

        // The body is rendered with plain newlines and re-indented by one
        // space per line to sit under the element tags.
        let rendered = render_to_string(&serialize_inner(child), context, LineEnding::Lf)?;
        out.push('<');
        out.push_str(&child.tag);
        for (key, value) in &child.attrs {
            let _ = write!(out, r#" {}="{}""#, key, escape_attr(value));
        }
        out.push_str(">\n ");
        out.push_str(&rendered.trim().replace('\n', "\n "));
        out.push_str("\n ");
        let _ = write!(out, "</{}>", child.tag);
        out.push_str(&escape_text(&child.tail));
        rendered_any = true;
    }

    Ok(rendered_any.then_some(out))
}

/// Put the `///` decoration back on every line.
fn reassemble(content: &str, stripped: &StrippedComment, line_ending: LineEnding) -> String {
    let mut out = String::with_capacity(content.len() * 2);
    for (i, line) in content.split('\n').enumerate() {
        if i > 0 {
            out.push_str(line_ending.as_str());
        }
        out.push_str(&stripped.prefix);
        out.push_str(line);
    }
    if stripped.trailing_newline {
        out.push_str(line_ending.as_str());
    }
    out
}
