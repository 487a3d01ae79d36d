//! Markdown to XML documentation comment rendering.
//!
//! Parses CommonMark (plus strikethrough) with [`comrak`] and renders the
//! tree as the markup used inside `///` documentation comments: `<para>`,
//! `<list>`, `<code>`, `<see href>`, `<paramref>` and friends. The renderer
//! is a pure function of the parse tree and a [`RenderContext`]; it never
//! consults the source text.
//!
//! ```
//! use mddoc_render::{LineEnding, RenderContext, StaticSymbol, render_to_string};
//!
//! let symbol = StaticSymbol::new(["value"], Vec::<String>::new());
//! let context = RenderContext::new(&symbol);
//! let rendered = render_to_string("Sets `value`.", &context, LineEnding::Lf).unwrap();
//! assert_eq!(rendered, "<para>Sets <paramref name=\"value\"/>.</para>\n");
//! ```

mod block;
mod context;
mod emitter;
mod error;
mod escape;
mod inline;

pub use block::render_document;
pub use context::{RenderContext, StaticSymbol, SymbolResolver};
pub use emitter::{DocWriter, LineEnding};
pub use error::RenderError;
pub use escape::{escape_markup, escape_url};

use comrak::nodes::AstNode;
use comrak::{Arena, Options, parse_document};

/// Parse Markdown with the options the renderer supports.
///
/// CommonMark core plus the strikethrough extension; everything else stays
/// off so the parser cannot produce nodes the renderer rejects.
pub fn parse_markdown<'a>(arena: &'a Arena<'a>, text: &str) -> &'a AstNode<'a> {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    parse_document(arena, text, &options)
}

/// Parse and render Markdown in one step.
///
/// # Errors
///
/// Returns [`RenderError`] if the tree contains a node kind the renderer
/// does not support.
pub fn render_to_string(
    text: &str,
    context: &RenderContext<'_>,
    line_ending: LineEnding,
) -> Result<String, RenderError> {
    let arena = Arena::new();
    let root = parse_markdown(&arena, text);
    let mut writer = DocWriter::new(line_ending);
    render_document(root, context, &mut writer)?;
    Ok(writer.into_string())
}
