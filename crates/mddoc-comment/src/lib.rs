//! Rewriting of `///` documentation comments.
//!
//! Wraps [`mddoc_render`] with the comment-level plumbing: an XML fragment
//! parser and serializer over an owned element tree, a post-processing pass
//! that removes redundant `<para>` wrappers, and the orchestrator that
//! strips `///` decoration, renders the Markdown body of `summary`,
//! `remarks`, `returns` and `value` elements, and reassembles the comment.
//!
//! The whole pipeline is best-effort: a comment that cannot be processed is
//! returned unchanged.

mod comment;
mod error;
mod parser;
mod serializer;
mod tree;
mod unwrap;

pub use comment::rewrite_doc_comment;
pub use error::CommentError;
pub use parser::parse_fragment;
pub use serializer::{serialize, serialize_inner};
pub use tree::XmlNode;
pub use unwrap::remove_unnecessary_paragraphs;
