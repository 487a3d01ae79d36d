//! `mddoc comment` command implementation.

use std::path::PathBuf;

use clap::Args;
use mddoc_comment::rewrite_doc_comment;
use mddoc_render::{RenderContext, StaticSymbol};

use crate::error::CliError;

use super::render::line_ending;
use super::{read_input, write_output};

/// Arguments for the comment command.
#[derive(Args)]
pub(crate) struct CommentArgs {
    /// File holding a `///` documentation comment (default: stdin).
    pub(crate) input: Option<PathBuf>,

    /// Use Windows line endings in the output.
    #[arg(long)]
    pub(crate) crlf: bool,

    /// Parameter name of the documented declaration (repeatable).
    #[arg(long = "param")]
    pub(crate) params: Vec<String>,

    /// Type-parameter name of the documented declaration (repeatable).
    #[arg(long = "type-param")]
    pub(crate) type_params: Vec<String>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl CommentArgs {
    /// Execute the comment command. A comment that cannot be rewritten is
    /// echoed back unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let comment = read_input(self.input.as_deref())?;

        let symbol = StaticSymbol::new(self.params, self.type_params);
        let context = RenderContext::new(&symbol);

        let rewritten = rewrite_doc_comment(&comment, &context, line_ending(self.crlf));
        write_output(&rewritten)
    }
}
