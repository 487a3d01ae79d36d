//! Error types for doc-comment rewriting.

use std::str::Utf8Error;

/// Error while parsing or rewriting a documentation comment.
///
/// Callers recover from every variant the same way: leave the comment
/// unchanged.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CommentError {
    /// XML parsing error.
    #[error("XML parse error")]
    XmlParse(#[from] quick_xml::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error")]
    Utf8(#[from] Utf8Error),

    /// XML attribute error.
    #[error("XML attribute error")]
    XmlAttr(#[from] quick_xml::events::attributes::AttrError),

    /// Encoding error during XML parsing.
    #[error("encoding error")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    /// Markdown rendering error.
    #[error(transparent)]
    Render(#[from] mddoc_render::RenderError),
}
