//! Core library for the stencil prompt generator.
//!
//! Stencil loads plain-text command templates, substitutes the
//! `{command_name}` and `{description}` placeholders with caller-supplied
//! values and returns the text as a single user [`Message`] for a
//! model-facing tool-calling protocol.
//!
//! # Quick Start
//!
//! ```rust
//! use stencil_core::{GenerateCommand, PromptGenerator, TemplateLoaderBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = PromptGenerator::new(TemplateLoaderBuilder::new().build());
//!
//! let messages = generator.generate(&GenerateCommand::new(
//!     "app:import-users",
//!     "Import users from CSV file",
//!     true,
//! ))?;
//! println!("{}", messages[0]);
//! # Ok(())
//! # }
//! ```
//!
//! Hosts that expose prompts by name go through the [`PromptRegistry`]
//! instead, which binds `symfony_command` to the generator.

pub mod error;
pub mod generator;
pub mod loader;
pub mod message;
pub mod params;
pub mod registry;
pub mod template;

// Re-export commonly used types
pub use error::{Result, StencilError};
pub use generator::PromptGenerator;
pub use loader::{TemplateLoader, TemplateLoaderBuilder};
pub use message::{Message, Role};
pub use params::GenerateCommand;
pub use registry::{
    PromptArgumentSpec, PromptArguments, PromptDefinition, PromptHandler, PromptRegistry,
    SYMFONY_COMMAND,
};
pub use template::{Placeholders, TemplateId};
