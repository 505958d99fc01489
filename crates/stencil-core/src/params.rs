//! Parameter structures for stencil operations
//!
//! These structures are shared by every interface (CLI, MCP) and carry no
//! framework-specific derives beyond serde. JSON schema generation is enabled
//! with the `schema` feature for interfaces that need it.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for generating a console command prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GenerateCommand {
    /// Command identifier, e.g. `app:import-users` (must not be empty)
    pub command_name: String,
    /// What the command does (must not be empty)
    pub description: String,
    /// Generate a command that asks for missing input interactively
    #[serde(default)]
    pub interactive: bool,
}

impl GenerateCommand {
    pub fn new(
        command_name: impl Into<String>,
        description: impl Into<String>,
        interactive: bool,
    ) -> Self {
        Self {
            command_name: command_name.into(),
            description: description.into(),
            interactive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interactive_defaults_to_false() {
        let params: GenerateCommand = serde_json::from_str(
            r#"{"command_name": "app:import-users", "description": "Import users"}"#,
        )
        .unwrap();
        assert_eq!(
            params,
            GenerateCommand::new("app:import-users", "Import users", false)
        );
    }

    #[test]
    fn test_required_fields_must_be_present() {
        let result = serde_json::from_str::<GenerateCommand>(r#"{"command_name": "app:x"}"#);
        assert!(result.is_err());
    }
}
