//! MCP prompt and tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{
        CallToolResult, Content, GetPromptRequestParam, GetPromptResult, ListPromptsResult,
        Prompt, PromptArgument, PromptMessage, PromptMessageContent, PromptMessageRole,
    },
    ErrorData as McpError,
};
use schemars::JsonSchema;
use serde::Deserialize;
use stencil_core::{params as core, Message, PromptGenerator, PromptRegistry, Role};
use tokio::task;

use super::{join_error, to_mcp_error};

/// Generic MCP wrapper for core parameter types with serde integration
///
/// Deserialization and schema generation pass straight through to the
/// wrapped core type, which keeps the core free of MCP-specific derives.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> McpParams<T>
where
    T: JsonSchema,
{
    pub fn into_inner(self) -> T {
        self.0
    }
}

pub type GenerateCommand = McpParams<core::GenerateCommand>;

pub type McpResult = Result<CallToolResult, McpError>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    generator: Arc<PromptGenerator>,
    registry: Arc<PromptRegistry>,
}

impl McpHandlers {
    pub fn new(generator: Arc<PromptGenerator>, registry: Arc<PromptRegistry>) -> Self {
        Self {
            generator,
            registry,
        }
    }

    /// Generate a console command prompt and return its text as tool output
    pub async fn symfony_command(
        &self,
        Parameters(params): Parameters<GenerateCommand>,
    ) -> McpResult {
        debug!("symfony_command: {:?}", params);

        let params = params.into_inner();
        let generator = self.generator.clone();
        let messages = task::spawn_blocking(move || generator.generate(&params))
            .await
            .map_err(join_error)?
            .map_err(|e| to_mcp_error("Failed to generate prompt", &e))?;

        Ok(CallToolResult::success(
            messages
                .into_iter()
                .map(|message| Content::text(message.content))
                .collect(),
        ))
    }

    /// List all available prompts
    pub fn list_prompts(&self) -> ListPromptsResult {
        debug!("list_prompts");

        let prompts = self
            .registry
            .list()
            .map(|prompt| {
                Prompt::new(
                    prompt.name,
                    Some(prompt.description),
                    Some(
                        prompt
                            .arguments
                            .iter()
                            .map(|arg| PromptArgument {
                                name: arg.name.to_string(),
                                description: Some(arg.description.to_string()),
                                required: Some(arg.required),
                            })
                            .collect(),
                    ),
                )
            })
            .collect();

        ListPromptsResult {
            next_cursor: None,
            prompts,
        }
    }

    /// Get a specific prompt by name and apply arguments
    pub async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
    ) -> Result<GetPromptResult, McpError> {
        debug!("get_prompt: {}", request.name);

        let description = self
            .registry
            .get(&request.name)
            .map(|prompt| prompt.description.to_string())
            .ok_or_else(|| {
                McpError::invalid_params(format!("Prompt '{}' not found", request.name), None)
            })?;

        let GetPromptRequestParam { name, arguments } = request;
        let arguments = arguments.unwrap_or_default();
        let generator = self.generator.clone();
        let registry = self.registry.clone();
        let messages = task::spawn_blocking(move || registry.invoke(&name, &generator, &arguments))
            .await
            .map_err(join_error)?
            .map_err(|e| to_mcp_error("Failed to generate prompt", &e))?;

        Ok(GetPromptResult {
            description: Some(description),
            messages: messages.into_iter().map(to_prompt_message).collect(),
        })
    }
}

fn to_prompt_message(message: Message) -> PromptMessage {
    let role = match message.role {
        Role::User => PromptMessageRole::User,
    };
    PromptMessage {
        role,
        content: PromptMessageContent::text(message.content),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rmcp::model::ErrorCode;
    use serde_json::{json, Value};
    use stencil_core::{TemplateId, TemplateLoader, SYMFONY_COMMAND};
    use tempfile::TempDir;

    use super::*;

    const TEMPLATE: &str = "Command Name: {command_name}\nDescription: {description}";

    fn create_test_handlers(with_interactive: bool) -> (TempDir, McpHandlers) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(temp_dir.path().join(TemplateId::Basic.file_name()), TEMPLATE).unwrap();
        if with_interactive {
            fs::write(
                temp_dir.path().join(TemplateId::Interactive.file_name()),
                format!("Interactive\n{TEMPLATE}"),
            )
            .unwrap();
        }
        let generator = PromptGenerator::new(TemplateLoader::new(temp_dir.path()));
        let handlers = McpHandlers::new(
            Arc::new(generator),
            Arc::new(PromptRegistry::with_builtin_prompts()),
        );
        (temp_dir, handlers)
    }

    fn prompt_request(name: &str, arguments: Value) -> GetPromptRequestParam {
        GetPromptRequestParam {
            name: name.to_string(),
            arguments: arguments.as_object().cloned(),
        }
    }

    #[test]
    fn test_list_prompts_exposes_registry() {
        let (_temp_dir, handlers) = create_test_handlers(true);
        let result = serde_json::to_value(handlers.list_prompts()).unwrap();

        let prompts = result["prompts"].as_array().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0]["name"], SYMFONY_COMMAND);
        assert_eq!(prompts[0]["arguments"][0]["name"], "command_name");
        assert_eq!(prompts[0]["arguments"][0]["required"], true);
        assert_eq!(prompts[0]["arguments"][2]["required"], false);
    }

    #[tokio::test]
    async fn test_get_prompt_returns_single_user_message() {
        let (_temp_dir, handlers) = create_test_handlers(true);
        let request = prompt_request(
            SYMFONY_COMMAND,
            json!({
                "command_name": "app:import-users",
                "description": "Import users from CSV file",
                "interactive": "true",
            }),
        );

        let result = serde_json::to_value(handlers.get_prompt(request).await.unwrap()).unwrap();
        let messages = result["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["role"], "user");
        assert_eq!(
            messages[0]["content"]["text"],
            "Interactive\nCommand Name: app:import-users\nDescription: Import users from CSV file"
        );
    }

    #[tokio::test]
    async fn test_get_prompt_unknown_name() {
        let (_temp_dir, handlers) = create_test_handlers(true);
        let err = handlers
            .get_prompt(prompt_request("missing", json!({})))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_get_prompt_empty_argument_is_invalid_params() {
        let (_temp_dir, handlers) = create_test_handlers(true);
        let request = prompt_request(
            SYMFONY_COMMAND,
            json!({"command_name": "", "description": "d"}),
        );

        let err = handlers.get_prompt(request).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("command_name"));
    }

    #[tokio::test]
    async fn test_get_prompt_missing_template_is_internal_error() {
        let (_temp_dir, handlers) = create_test_handlers(false);
        let request = prompt_request(
            SYMFONY_COMMAND,
            json!({"command_name": "app:x", "description": "d", "interactive": "true"}),
        );

        let err = handlers.get_prompt(request).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert!(err.message.contains("command-interactive"));
    }

    #[tokio::test]
    async fn test_symfony_command_tool_returns_text() {
        let (_temp_dir, handlers) = create_test_handlers(true);
        let params: GenerateCommand =
            serde_json::from_value(json!({"command_name": "app:x", "description": "Does x"}))
                .unwrap();

        let result = handlers.symfony_command(Parameters(params)).await.unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("Command Name: app:x\\nDescription: Does x"));
    }
}
