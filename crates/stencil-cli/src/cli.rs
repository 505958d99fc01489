//! Command handlers for the terminal interface.
//!
//! Arguments are parsed with clap and converted into core parameter types
//! before reaching the generator, so the core stays free of clap derives.

use anyhow::{Context, Result};
use clap::Args;
use log::debug;
use stencil_core::{GenerateCommand, PromptGenerator, PromptRegistry};

use crate::renderer::TerminalRenderer;

/// Arguments for generating a command prompt
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Command name, e.g. app:import-users
    pub command_name: String,
    /// What the command does
    pub description: String,
    /// Generate a command that asks for missing input interactively
    #[arg(short, long)]
    pub interactive: bool,
    /// Print the message list as JSON instead of the prompt text
    #[arg(long)]
    pub json: bool,
}

impl From<&GenerateArgs> for GenerateCommand {
    fn from(val: &GenerateArgs) -> Self {
        GenerateCommand::new(
            val.command_name.as_str(),
            val.description.as_str(),
            val.interactive,
        )
    }
}

/// Runs CLI commands against a generator and prompt registry
pub struct Cli {
    generator: PromptGenerator,
    registry: PromptRegistry,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(
        generator: PromptGenerator,
        registry: PromptRegistry,
        renderer: TerminalRenderer,
    ) -> Self {
        Self {
            generator,
            registry,
            renderer,
        }
    }

    /// Generate a prompt and print it
    pub fn generate(&self, args: &GenerateArgs) -> Result<()> {
        debug!("generate: {:?}", args);

        let messages = self
            .generator
            .generate(&GenerateCommand::from(args))
            .context("Failed to generate prompt")?;

        if args.json {
            let json =
                serde_json::to_string_pretty(&messages).context("Failed to serialize messages")?;
            println!("{json}");
            return Ok(());
        }

        // Prompt text is not markdown; styling it would change the content
        for message in &messages {
            self.renderer.render_verbatim(&message.content)?;
        }
        Ok(())
    }

    /// Print every registered prompt with its arguments
    pub fn list_prompts(&self) -> Result<()> {
        self.renderer.render(&format_prompt_list(&self.registry))
    }
}

fn format_prompt_list(registry: &PromptRegistry) -> String {
    if registry.is_empty() {
        return "No prompts registered.\n".to_string();
    }

    let mut output = String::from("# Prompts\n");
    for prompt in registry.list() {
        output.push_str(&format!(
            "\n## {}\n\n{}\n\n",
            prompt.name, prompt.description
        ));
        for arg in &prompt.arguments {
            let requirement = if arg.required { "required" } else { "optional" };
            output.push_str(&format!(
                "- `{}` ({requirement}): {}\n",
                arg.name, arg.description
            ));
        }
    }
    output
}
