//! Inline-span rendering.
//!
//! Both walkers are iterative: Markdown nesting depth is attacker
//! controlled, so descent state lives in an explicit frame stack instead of
//! the call stack. Each frame holds the pending closing markup, the sibling
//! to resume at, and the ambient within-link flag to restore.

use std::borrow::Cow;

use comrak::nodes::{AstNode, NodeValue};

use crate::context::RenderContext;
use crate::emitter::DocWriter;
use crate::error::RenderError;
use crate::escape::{escape_markup, escape_url};

pub(crate) struct InlineFrame<'a> {
    closer: Option<&'static str>,
    resume: Option<&'a AstNode<'a>>,
    within_link: bool,
}

/// Render an inline chain as documentation markup.
///
/// `stack` is shared with the block renderer so its allocation is reused
/// across paragraphs; entries below the initial length are left untouched.
pub(crate) fn render_inlines<'a>(
    first: Option<&'a AstNode<'a>>,
    context: &RenderContext<'_>,
    writer: &mut DocWriter,
    stack: &mut Vec<InlineFrame<'a>>,
) -> Result<(), RenderError> {
    let base = stack.len();
    let mut within_link = false;
    let mut node = first;

    while let Some(current) = node {
        // Some((closer, within)) descends into the children; None moves on.
        let descend = {
            let ast = current.data.borrow();
            match &ast.value {
                NodeValue::Text(text) => {
                    escape_markup(text, writer);
                    None
                }
                NodeValue::LineBreak => {
                    writer.write_constant_line("<br />");
                    None
                }
                NodeValue::SoftBreak => {
                    if context.soft_breaks_as_hard {
                        writer.write_constant_line("<br />");
                    } else {
                        writer.write_line();
                    }
                    None
                }
                NodeValue::Code(code) => {
                    let literal = code.literal.as_str();
                    if context.symbol.has_parameter(literal) {
                        writer.write_constant("<paramref name=\"");
                        escape_markup(literal, writer);
                        writer.write_constant("\"/>");
                    } else if context.symbol.has_type_parameter(literal) {
                        writer.write_constant("<typeparamref name=\"");
                        escape_markup(literal, writer);
                        writer.write_constant("\"/>");
                    } else {
                        writer.write_constant("<c>");
                        escape_markup(literal, writer);
                        writer.write_constant("</c>");
                    }
                    None
                }
                NodeValue::HtmlInline(html) => {
                    // The source vouches for raw markup; pass it through.
                    writer.write(html);
                    None
                }
                NodeValue::Link(link) => {
                    if within_link {
                        // Nested links are invalid in the target format;
                        // degrade to literal brackets around the content.
                        writer.write_char('[');
                        Some((Some("]"), within_link))
                    } else {
                        writer.write_constant("<see href=\"");
                        escape_url(&resolve_target(context, &link.url), writer);
                        writer.write_char('"');
                        if !link.title.is_empty() {
                            writer.write_constant(" title=\"");
                            escape_markup(&link.title, writer);
                            writer.write_char('"');
                        }
                        writer.write_char('>');
                        Some((Some("</see>"), true))
                    }
                }
                NodeValue::Image(link) => {
                    writer.write_constant("<img src=\"");
                    escape_url(&resolve_target(context, &link.url), writer);
                    writer.write_constant("\" alt=\"");
                    render_inlines_plain(current.first_child(), writer, stack)?;
                    writer.write_char('"');
                    if !link.title.is_empty() {
                        writer.write_constant(" title=\"");
                        escape_markup(&link.title, writer);
                        writer.write_char('"');
                    }
                    writer.write_constant(" />");
                    None
                }
                NodeValue::Strong => {
                    writer.write_constant("<strong>");
                    Some((Some("</strong>"), within_link))
                }
                NodeValue::Emph => {
                    writer.write_constant("<em>");
                    Some((Some("</em>"), within_link))
                }
                NodeValue::Strikethrough => {
                    writer.write_constant("<del>");
                    Some((Some("</del>"), within_link))
                }
                value => return Err(RenderError::inline(value)),
            }
        };

        node = advance(current, descend, &mut within_link, stack);

        while node.is_none() && stack.len() > base {
            if let Some(frame) = stack.pop() {
                if let Some(closer) = frame.closer {
                    writer.write_constant(closer);
                }
                within_link = frame.within_link;
                node = frame.resume;
            }
        }
    }

    Ok(())
}

/// Render an inline chain as plain text: no markup elements, only escaped
/// literal content and line breaks. Used for image alt text.
///
/// Link and image content collapses to its inner text; a link nested inside
/// another link keeps its literal brackets.
pub(crate) fn render_inlines_plain<'a>(
    first: Option<&'a AstNode<'a>>,
    writer: &mut DocWriter,
    stack: &mut Vec<InlineFrame<'a>>,
) -> Result<(), RenderError> {
    let base = stack.len();
    let mut within_link = false;
    let mut node = first;

    while let Some(current) = node {
        let descend = {
            let ast = current.data.borrow();
            match &ast.value {
                NodeValue::Text(text) => {
                    escape_markup(text, writer);
                    None
                }
                NodeValue::Code(code) => {
                    escape_markup(&code.literal, writer);
                    None
                }
                NodeValue::HtmlInline(html) => {
                    escape_markup(html, writer);
                    None
                }
                NodeValue::LineBreak | NodeValue::SoftBreak => {
                    writer.write_line();
                    None
                }
                NodeValue::Link(_) => {
                    if within_link {
                        writer.write_char('[');
                        Some((Some("]"), within_link))
                    } else {
                        Some((None, true))
                    }
                }
                NodeValue::Image(_) => Some((None, true)),
                NodeValue::Strong | NodeValue::Emph | NodeValue::Strikethrough => {
                    Some((None, within_link))
                }
                value => return Err(RenderError::inline(value)),
            }
        };

        node = advance(current, descend, &mut within_link, stack);

        while node.is_none() && stack.len() > base {
            if let Some(frame) = stack.pop() {
                if let Some(closer) = frame.closer {
                    writer.write_constant(closer);
                }
                within_link = frame.within_link;
                node = frame.resume;
            }
        }
    }

    Ok(())
}

/// Either descend into `current`'s children, pushing a frame, or step to
/// the next sibling.
fn advance<'a>(
    current: &'a AstNode<'a>,
    descend: Option<(Option<&'static str>, bool)>,
    within_link: &mut bool,
    stack: &mut Vec<InlineFrame<'a>>,
) -> Option<&'a AstNode<'a>> {
    if let Some((closer, child_within_link)) = descend {
        stack.push(InlineFrame {
            closer,
            resume: current.next_sibling(),
            within_link: *within_link,
        });
        *within_link = child_within_link;
        current.first_child()
    } else {
        current.next_sibling()
    }
}

fn resolve_target<'a>(context: &RenderContext<'_>, url: &'a str) -> Cow<'a, str> {
    match context.uri_resolver {
        Some(resolver) => Cow::Owned(resolver(url)),
        None => Cow::Borrowed(url),
    }
}
