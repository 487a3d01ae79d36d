//! `mddoc render` command implementation.

use std::path::PathBuf;

use clap::Args;
use mddoc_render::{LineEnding, RenderContext, StaticSymbol, render_to_string};

use crate::error::CliError;

use super::{read_input, write_output};

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown input file (default: stdin, `-` also reads stdin).
    pub(crate) input: Option<PathBuf>,

    /// Use Windows line endings in the output.
    #[arg(long)]
    pub(crate) crlf: bool,

    /// Render soft line breaks as hard break elements.
    #[arg(long)]
    pub(crate) hard_breaks: bool,

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

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or the Markdown tree
    /// contains an unsupported node.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let text = read_input(self.input.as_deref())?;

        let symbol = StaticSymbol::new(self.params, self.type_params);
        let mut context = RenderContext::new(&symbol);
        if self.hard_breaks {
            context = context.with_hard_soft_breaks();
        }

        let rendered = render_to_string(&text, &context, line_ending(self.crlf))?;
        write_output(&rendered)
    }
}

pub(crate) fn line_ending(crlf: bool) -> LineEnding {
    if crlf { LineEnding::CrLf } else { LineEnding::Lf }
}
