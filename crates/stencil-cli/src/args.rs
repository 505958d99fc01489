use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::GenerateArgs;

/// Prompt generator for console command scaffolding
///
/// Stencil fills command templates with a command name and description and
/// prints the resulting prompt. It can also run as an MCP (Model Context
/// Protocol) server so AI assistants can request the same prompts.
#[derive(Parser)]
#[command(version, about, name = "stencil")]
pub struct Args {
    /// Directory holding command-basic.txt and command-interactive.txt.
    /// Defaults to $XDG_DATA_HOME/stencil/templates when present, then a
    /// templates directory installed next to the executable
    #[arg(long, global = true)]
    pub template_dir: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Stencil CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a console command prompt
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// List registered prompts
    #[command(alias = "ls")]
    List,
    /// Start the MCP server
    Serve,
}
