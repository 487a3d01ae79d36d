//! Rendering error types.

use comrak::nodes::NodeValue;

/// Fatal rendering failure.
///
/// The parser and renderer share a closed tag set; a node outside it means
/// the two have drifted apart, and no partial output is safe to use.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    /// Block node outside the supported CommonMark set.
    #[error("unsupported block node: {0}")]
    UnsupportedBlock(&'static str),

    /// Inline node outside the supported CommonMark set.
    #[error("unsupported inline node: {0}")]
    UnsupportedInline(&'static str),
}

impl RenderError {
    pub(crate) fn block(value: &NodeValue) -> Self {
        Self::UnsupportedBlock(node_kind(value))
    }

    pub(crate) fn inline(value: &NodeValue) -> Self {
        Self::UnsupportedInline(node_kind(value))
    }
}

/// Name of a node kind, for diagnostics.
fn node_kind(value: &NodeValue) -> &'static str {
    match value {
        NodeValue::Document => "Document",
        NodeValue::FrontMatter(_) => "FrontMatter",
        NodeValue::BlockQuote => "BlockQuote",
        NodeValue::List(_) => "List",
        NodeValue::Item(_) => "Item",
        NodeValue::CodeBlock(_) => "CodeBlock",
        NodeValue::HtmlBlock(_) => "HtmlBlock",
        NodeValue::Paragraph => "Paragraph",
        NodeValue::Heading(_) => "Heading",
        NodeValue::ThematicBreak => "ThematicBreak",
        NodeValue::Table(_) => "Table",
        NodeValue::TableRow(_) => "TableRow",
        NodeValue::TableCell => "TableCell",
        NodeValue::FootnoteDefinition(_) => "FootnoteDefinition",
        NodeValue::FootnoteReference(_) => "FootnoteReference",
        NodeValue::TaskItem(_) => "TaskItem",
        NodeValue::DescriptionList => "DescriptionList",
        NodeValue::DescriptionItem(_) => "DescriptionItem",
        NodeValue::DescriptionTerm => "DescriptionTerm",
        NodeValue::DescriptionDetails => "DescriptionDetails",
        NodeValue::Text(_) => "Text",
        NodeValue::SoftBreak => "SoftBreak",
        NodeValue::LineBreak => "LineBreak",
        NodeValue::Code(_) => "Code",
        NodeValue::HtmlInline(_) => "HtmlInline",
        NodeValue::Emph => "Emph",
        NodeValue::Strong => "Strong",
        NodeValue::Strikethrough => "Strikethrough",
        NodeValue::Superscript => "Superscript",
        NodeValue::Subscript => "Subscript",
        NodeValue::Link(_) => "Link",
        NodeValue::Image(_) => "Image",
        NodeValue::Math(_) => "Math",
        NodeValue::WikiLink(_) => "WikiLink",
        _ => "Unknown",
    }
}
