//! Block-tree rendering.
//!
//! Same explicit-stack traversal as the inline walker; the ambient state a
//! frame restores here is the enclosing list's tightness.

use comrak::nodes::{AstNode, ListType, NodeValue};

use crate::context::RenderContext;
use crate::emitter::DocWriter;
use crate::error::RenderError;
use crate::escape::escape_markup;
use crate::inline::{InlineFrame, render_inlines};

const HEADING_OPENERS: [&str; 6] = ["<h1>", "<h2>", "<h3>", "<h4>", "<h5>", "<h6>"];
const HEADING_CLOSERS: [&str; 6] = ["</h1>", "</h2>", "</h3>", "</h4>", "</h5>", "</h6>"];

struct BlockFrame<'a> {
    /// Closing markup written on its own line when the frame pops; the
    /// document frame has none.
    closer: Option<&'static str>,
    resume: Option<&'a AstNode<'a>>,
    tight: bool,
}

/// Render a parsed document as documentation markup.
///
/// The tree is read-only; all output goes through `writer`. An unknown
/// block or inline node aborts the render: the parser and renderer have
/// drifted out of sync and partial output is not safe to use.
pub fn render_document<'a>(
    root: &'a AstNode<'a>,
    context: &RenderContext<'_>,
    writer: &mut DocWriter,
) -> Result<(), RenderError> {
    let mut stack: Vec<BlockFrame<'a>> = Vec::new();
    let mut inline_stack: Vec<InlineFrame<'a>> = Vec::new();
    let mut tight = false;
    let mut node = Some(root);

    while let Some(current) = node {
        // Some((closer, tight)) descends into the children; None moves on.
        let descend = {
            let ast = current.data.borrow();
            match &ast.value {
                NodeValue::Document => Some((None, false)),
                NodeValue::Paragraph => {
                    if tight {
                        render_inlines(current.first_child(), context, writer, &mut inline_stack)?;
                    } else {
                        writer.ensure_line();
                        writer.write_constant("<para>");
                        render_inlines(current.first_child(), context, writer, &mut inline_stack)?;
                        writer.write_constant_line("</para>");
                    }
                    None
                }
                NodeValue::BlockQuote => {
                    writer.ensure_line();
                    writer.write_constant_line("<note>");
                    Some((Some("</note>"), false))
                }
                NodeValue::Item(_) => {
                    writer.ensure_line();
                    writer.write_constant("<item><description>");
                    Some((Some("</description></item>"), tight))
                }
                NodeValue::List(list) => {
                    // A list always starts at the beginning of a line.
                    writer.ensure_line();
                    writer.write_constant(match list.list_type {
                        ListType::Bullet => "<list type=\"bullet\"",
                        ListType::Ordered => "<list type=\"number\"",
                    });
                    if list.list_type == ListType::Ordered && list.start != 1 {
                        writer.write_constant(" start=\"");
                        writer.write_constant(&list.start.to_string());
                        writer.write_char('"');
                    }
                    writer.write_constant_line(">");
                    Some((Some("</list>"), list.tight))
                }
                NodeValue::Heading(heading) => {
                    writer.ensure_line();
                    let level = usize::from(heading.level);
                    if let Some(opener) = HEADING_OPENERS.get(level.wrapping_sub(1)) {
                        writer.write_constant(opener);
                    } else {
                        writer.write_constant(&format!("<h{level}>"));
                    }
                    render_inlines(current.first_child(), context, writer, &mut inline_stack)?;
                    if let Some(closer) = HEADING_CLOSERS.get(level.wrapping_sub(1)) {
                        writer.write_constant_line(closer);
                    } else {
                        writer.write_constant_line(&format!("</h{level}>"));
                    }
                    None
                }
                NodeValue::CodeBlock(code) => {
                    writer.ensure_line();
                    if code.fenced {
                        writer.write_constant("<code");
                        if !code.info.is_empty() {
                            // The language is the first space-delimited
                            // token of the info string.
                            let end = code.info.find(' ').unwrap_or(code.info.len());
                            writer.write_constant(" language=\"");
                            escape_markup(&code.info[..end], writer);
                            writer.write_char('"');
                        }
                        writer.write_char('>');
                        writer.write_line();
                    } else {
                        writer.write_constant("<code>");
                    }
                    escape_markup(&code.literal, writer);
                    writer.write_constant_line("</code>");
                    None
                }
                NodeValue::HtmlBlock(html) => {
                    writer.write(&html.literal);
                    None
                }
                NodeValue::ThematicBreak => {
                    writer.ensure_line();
                    writer.write_constant_line("<hr />");
                    None
                }
                value => return Err(RenderError::block(value)),
            }
        };

        node = if let Some((closer, child_tight)) = descend {
            stack.push(BlockFrame {
                closer,
                resume: current.next_sibling(),
                tight,
            });
            tight = child_tight;
            current.first_child()
        } else {
            current.next_sibling()
        };

        while node.is_none() {
            let Some(frame) = stack.pop() else { break };
            if let Some(closer) = frame.closer {
                writer.write_constant_line(closer);
            }
            tight = frame.tight;
            node = frame.resume;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::context::StaticSymbol;
    use crate::emitter::LineEnding;
    use crate::parse_markdown;
    use comrak::Arena;

    fn render(markdown: &str) -> String {
        let arena = Arena::new();
        let root = parse_markdown(&arena, markdown);
        let symbol = StaticSymbol::default();
        let context = RenderContext::new(&symbol);
        let mut writer = DocWriter::new(LineEnding::Lf);
        render_document(root, &context, &mut writer).expect("render");
        writer.into_string()
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(render("Hello, world."), "<para>Hello, world.</para>\n");
    }

    #[test]
    fn test_two_paragraphs() {
        assert_eq!(
            render("First.\n\nSecond."),
            "<para>First.</para>\n<para>Second.</para>\n"
        );
    }

    #[test]
    fn test_loose_bullet_list() {
        // Loose items carry their paragraph wrappers; only tight lists
        // render item content bare.
        assert_eq!(
            render("- Item 1\n\n- Item 2"),
            "<list type=\"bullet\">\n<item><description>\n<para>Item 1</para>\n</description></item>\n<item><description>\n<para>Item 2</para>\n</description></item>\n</list>\n"
        );
    }

    #[test]
    fn test_tight_bullet_list() {
        assert_eq!(
            render("- Item 1\n- Item 2"),
            "<list type=\"bullet\">\n<item><description>Item 1</description></item>\n<item><description>Item 2</description></item>\n</list>\n"
        );
    }

    #[test]
    fn test_tight_ordered_list() {
        assert_eq!(
            render("1. a\n2. b\n3. c"),
            "<list type=\"number\">\n<item><description>a</description></item>\n<item><description>b</description></item>\n<item><description>c</description></item>\n</list>\n"
        );
    }

    #[test]
    fn test_ordered_list_start_attribute() {
        assert_eq!(
            render("3. a\n4. b"),
            "<list type=\"number\" start=\"3\">\n<item><description>a</description></item>\n<item><description>b</description></item>\n</list>\n"
        );
    }

    #[test]
    fn test_nested_list_restores_tightness() {
        // The outer list is loose, the inner tight; after the inner list
        // closes, the outer item's second paragraph is wrapped again.
        let markdown = "- outer\n\n  - a\n  - b\n\n  more\n";
        let rendered = render(markdown);
        assert!(rendered.contains("<item><description>a</description></item>"));
        assert!(rendered.contains("<para>more</para>"));
    }

    #[test]
    fn test_block_quote_is_note() {
        assert_eq!(render("> quoted"), "<note>\n<para>quoted</para>\n</note>\n");
    }

    #[test]
    fn test_headings() {
        assert_eq!(render("# Title"), "<h1>Title</h1>\n");
        assert_eq!(render("### Third"), "<h3>Third</h3>\n");
        assert_eq!(render("###### Sixth"), "<h6>Sixth</h6>\n");
    }

    #[test]
    fn test_setext_heading() {
        assert_eq!(render("Title\n=====\n"), "<h1>Title</h1>\n");
    }

    #[test]
    fn test_fenced_code_with_language() {
        assert_eq!(
            render("```rust\nfn main() {}\n```"),
            "<code language=\"rust\">\nfn main() {}\n</code>\n"
        );
    }

    #[test]
    fn test_fenced_code_language_is_first_token() {
        assert_eq!(
            render("```csharp ignore\nvar x;\n```"),
            "<code language=\"csharp\">\nvar x;\n</code>\n"
        );
    }

    #[test]
    fn test_fenced_code_without_info() {
        assert_eq!(render("```\ntext\n```"), "<code>\ntext\n</code>\n");
    }

    #[test]
    fn test_indented_code() {
        assert_eq!(render("    indented\n"), "<code>indented\n</code>\n");
    }

    #[test]
    fn test_code_content_is_escaped() {
        assert_eq!(
            render("```\na < b && c\n```"),
            "<code>\na &lt; b &amp;&amp; c\n</code>\n"
        );
    }

    #[test]
    fn test_thematic_break() {
        assert_eq!(render("---"), "<hr />\n");
    }

    #[test]
    fn test_reference_definition_produces_no_output() {
        assert_eq!(
            render("[label]: https://example.com\n\n[label]"),
            "<para><see href=\"https://example.com\">label</see></para>\n"
        );
    }

    #[test]
    fn test_html_block_passes_through() {
        let rendered = render("<div>\nraw\n</div>\n");
        assert_eq!(rendered, "<div>\nraw\n</div>\n");
    }

    #[test]
    fn test_crlf_output() {
        let arena = Arena::new();
        let root = parse_markdown(&arena, "First.\n\nSecond.");
        let symbol = StaticSymbol::default();
        let context = RenderContext::new(&symbol);
        let mut writer = DocWriter::new(LineEnding::CrLf);
        render_document(root, &context, &mut writer).expect("render");
        assert_eq!(
            writer.into_string(),
            "<para>First.</para>\r\n<para>Second.</para>\r\n"
        );
    }

    #[test]
    fn test_deeply_nested_quotes() {
        let mut markdown = String::new();
        for _ in 0..300 {
            markdown.push_str("> ");
        }
        markdown.push('x');
        let rendered = render(&markdown);
        assert!(rendered.contains("<para>x</para>"));
    }

    #[test]
    fn test_unsupported_block_is_fatal() {
        // Tables are outside the supported tag set; the strikethrough-only
        // parser options never produce them, so build the node by hand.
        use comrak::nodes::{Ast, LineColumn, NodeTable, TableAlignment};
        use std::cell::RefCell;

        let arena = Arena::new();
        let root = arena.alloc(AstNode::new(RefCell::new(Ast::new(
            NodeValue::Document,
            LineColumn { line: 1, column: 1 },
        ))));
        let table = arena.alloc(AstNode::new(RefCell::new(Ast::new(
            NodeValue::Table(Box::new(NodeTable {
                alignments: vec![TableAlignment::None],
                num_columns: 1,
                num_rows: 0,
                num_nonempty_cells: 0,
            })),
            LineColumn { line: 1, column: 1 },
        ))));
        root.append(table);

        let symbol = StaticSymbol::default();
        let context = RenderContext::new(&symbol);
        let mut writer = DocWriter::new(LineEnding::Lf);
        let err = render_document(root, &context, &mut writer).expect_err("must fail");
        assert_eq!(err.to_string(), "unsupported block node: Table");
    }
}
