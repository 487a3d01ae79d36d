//! mddoc CLI - Markdown to documentation-comment markup.
//!
//! Provides commands for:
//! - `render`: Render a Markdown document as documentation markup
//! - `comment`: Rewrite the Markdown inside a `///` documentation comment

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CommentArgs, RenderArgs};
use output::Output;

/// mddoc - Markdown to documentation-comment markup.
#[derive(Parser)]
#[command(name = "mddoc", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a Markdown document as documentation markup.
    Render(RenderArgs),
    /// Rewrite the Markdown inside a documentation comment.
    Comment(CommentArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Render(args) => args.verbose,
        Commands::Comment(args) => args.verbose,
    };

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Comment(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
