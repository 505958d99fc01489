//! Prompt generation for console commands.
//!
//! [`PromptGenerator::generate`] validates the parameters, picks the basic or
//! interactive template, substitutes the placeholders and wraps the text in a
//! single user [`Message`]. Validation happens before any file is touched.

use log::debug;

use crate::{
    error::{Result, StencilError},
    loader::TemplateLoader,
    message::Message,
    params::GenerateCommand,
    template::{Placeholders, TemplateId},
};

/// Generates command prompts from the templates of a [`TemplateLoader`].
#[derive(Debug, Clone, Default)]
pub struct PromptGenerator {
    loader: TemplateLoader,
}

impl PromptGenerator {
    /// Creates a generator reading templates through `loader`.
    pub fn new(loader: TemplateLoader) -> Self {
        Self { loader }
    }

    /// Loader used to read templates.
    pub fn loader(&self) -> &TemplateLoader {
        &self.loader
    }

    /// Generates the prompt described by `params`.
    ///
    /// # Errors
    ///
    /// Returns `StencilError::InvalidParameter` if `command_name` or
    /// `description` is empty, checked in that order
    /// Returns `StencilError::TemplateNotFound` or
    /// `StencilError::TemplateUnreadable` if the selected template cannot be
    /// loaded
    pub fn generate(&self, params: &GenerateCommand) -> Result<Vec<Message>> {
        self.generate_from(
            &params.command_name,
            &params.description,
            params.interactive,
        )
    }

    /// Same as [`generate`](Self::generate) with borrowed arguments.
    pub fn generate_from(
        &self,
        command_name: &str,
        description: &str,
        interactive: bool,
    ) -> Result<Vec<Message>> {
        require_non_empty("command_name", command_name)?;
        require_non_empty("description", description)?;

        let id = TemplateId::for_mode(interactive);
        debug!("Generating '{command_name}' prompt with template '{id}'");

        let template = self.loader.load(id)?;
        let content = Placeholders::new(command_name, description).apply(&template);

        Ok(vec![Message::user(content)])
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(StencilError::invalid_parameter(field).with_reason("must not be empty"));
    }
    Ok(())
}
