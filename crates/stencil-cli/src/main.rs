//! Stencil CLI Application
//!
//! Command-line interface and MCP server for the stencil prompt generator.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, StencilMcpServer};
use renderer::TerminalRenderer;
use stencil_core::{PromptGenerator, PromptRegistry, TemplateLoaderBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        template_dir,
        no_color,
        command,
    } = Args::parse();

    let loader = TemplateLoaderBuilder::new()
        .with_template_dir(template_dir)
        .build();
    let generator = PromptGenerator::new(loader);
    let registry = PromptRegistry::with_builtin_prompts();

    info!("Stencil started");

    match command {
        Some(Generate(args)) => {
            Cli::new(generator, registry, TerminalRenderer::new(!no_color)).generate(&args)
        }
        Some(Serve) => {
            info!("Starting Stencil MCP server");
            run_stdio_server(StencilMcpServer::new(generator, registry))
                .await
                .context("MCP server failed")
        }
        Some(List) | None => {
            Cli::new(generator, registry, TerminalRenderer::new(!no_color)).list_prompts()
        }
    }
}
