//! Explicit registry of prompt operations.
//!
//! Hosts enumerate and invoke prompts through a [`PromptRegistry`] populated
//! at startup. Every prompt is registered by an explicit call; nothing is
//! discovered at runtime.
//!
//! ```
//! use serde_json::json;
//! use stencil_core::{PromptGenerator, PromptRegistry, TemplateLoader, loader};
//!
//! let registry = PromptRegistry::with_builtin_prompts();
//! let generator = PromptGenerator::new(TemplateLoader::new(loader::bundled_template_dir()));
//!
//! let args = json!({"command_name": "app:import-users", "description": "Import users"});
//! let messages = registry
//!     .invoke("symfony_command", &generator, args.as_object().unwrap())
//!     .unwrap();
//! assert!(messages[0].content.contains("app:import-users"));
//! ```

use std::fmt;

use log::debug;
use serde_json::{Map, Value};

use crate::{
    error::{Result, StencilError},
    generator::PromptGenerator,
    message::Message,
};

/// Name of the console command prompt.
pub const SYMFONY_COMMAND: &str = "symfony_command";

/// Arguments supplied by a host, keyed by argument name.
pub type PromptArguments = Map<String, Value>;

/// Callable bound to a registered prompt name.
pub type PromptHandler = fn(&PromptGenerator, &PromptArguments) -> Result<Vec<Message>>;

/// Argument accepted by a registered prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptArgumentSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

/// A named prompt operation together with its metadata.
#[derive(Clone)]
pub struct PromptDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub arguments: Vec<PromptArgumentSpec>,
    pub handler: PromptHandler,
}

impl PromptDefinition {
    /// Runs the prompt's handler.
    pub fn invoke(
        &self,
        generator: &PromptGenerator,
        args: &PromptArguments,
    ) -> Result<Vec<Message>> {
        (self.handler)(generator, args)
    }
}

impl fmt::Debug for PromptDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("arguments", &self.arguments)
            .finish_non_exhaustive()
    }
}

/// Table of prompt operations, in registration order.
#[derive(Debug, Clone, Default)]
pub struct PromptRegistry {
    prompts: Vec<PromptDefinition>,
}

impl PromptRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            prompts: Vec::new(),
        }
    }

    /// Creates a registry holding every built-in prompt.
    pub fn with_builtin_prompts() -> Self {
        Self {
            prompts: vec![symfony_command_definition()],
        }
    }

    /// Adds a prompt to the registry.
    ///
    /// # Errors
    ///
    /// Returns `StencilError::DuplicatePrompt` if the name is already taken
    pub fn register(&mut self, definition: PromptDefinition) -> Result<()> {
        if self.get(definition.name).is_some() {
            return Err(StencilError::DuplicatePrompt {
                name: definition.name.to_string(),
            });
        }
        debug!("Registered prompt '{}'", definition.name);
        self.prompts.push(definition);
        Ok(())
    }

    /// Looks up a prompt by name.
    pub fn get(&self, name: &str) -> Option<&PromptDefinition> {
        self.prompts.iter().find(|prompt| prompt.name == name)
    }

    /// Iterates over the registered prompts in registration order.
    pub fn list(&self) -> impl Iterator<Item = &PromptDefinition> {
        self.prompts.iter()
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// Invokes the prompt registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns `StencilError::PromptNotFound` for an unknown name, otherwise
    /// whatever the prompt's handler returns
    pub fn invoke(
        &self,
        name: &str,
        generator: &PromptGenerator,
        args: &PromptArguments,
    ) -> Result<Vec<Message>> {
        let prompt = self.get(name).ok_or_else(|| StencilError::PromptNotFound {
            name: name.to_string(),
        })?;
        debug!("Invoking prompt '{name}'");
        prompt.invoke(generator, args)
    }
}

fn symfony_command_definition() -> PromptDefinition {
    PromptDefinition {
        name: SYMFONY_COMMAND,
        description: "Generate a prompt for creating a Symfony console command",
        arguments: vec![
            PromptArgumentSpec {
                name: "command_name",
                description: "Command name, e.g. app:import-users",
                required: true,
            },
            PromptArgumentSpec {
                name: "description",
                description: "What the command does",
                required: true,
            },
            PromptArgumentSpec {
                name: "interactive",
                description: "Whether the command asks for missing input interactively (default: false)",
                required: false,
            },
        ],
        handler: symfony_command,
    }
}

fn symfony_command(generator: &PromptGenerator, args: &PromptArguments) -> Result<Vec<Message>> {
    let command_name = required_str(args, "command_name")?;
    let description = required_str(args, "description")?;
    let interactive = optional_bool(args, "interactive")?;
    generator.generate_from(command_name, description, interactive)
}

fn required_str<'a>(args: &'a PromptArguments, name: &str) -> Result<&'a str> {
    match args.get(name) {
        Some(Value::String(value)) => Ok(value.as_str()),
        None | Some(Value::Null) => {
            Err(StencilError::invalid_parameter(name).with_reason("is required"))
        }
        Some(_) => Err(StencilError::invalid_parameter(name).with_reason("must be a string")),
    }
}

/// Prompt arguments travel as strings over MCP, so textual booleans are accepted.
fn optional_bool(args: &PromptArguments, name: &str) -> Result<bool> {
    let invalid = || StencilError::invalid_parameter(name).with_reason("must be a boolean");
    match args.get(name) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(value)) => Ok(*value),
        Some(Value::String(value)) => match value.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" | "" => Ok(false),
            _ => Err(invalid()),
        },
        Some(_) => Err(invalid()),
    }
}
