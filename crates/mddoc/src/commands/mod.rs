//! CLI command implementations.

pub(crate) mod comment;
pub(crate) mod render;

use std::io::Read;
use std::path::Path;

pub(crate) use comment::CommentArgs;
pub(crate) use render::RenderArgs;

use crate::error::CliError;

/// Read the input text from a file, or from stdin when the path is missing
/// or `-`.
pub(crate) fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path.as_os_str() != "-" => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Write the result to stdout, exactly as rendered.
pub(crate) fn write_output(text: &str) -> Result<(), CliError> {
    use std::io::Write;

    std::io::stdout().lock().write_all(text.as_bytes())?;
    Ok(())
}
