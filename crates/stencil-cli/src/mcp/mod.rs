//! MCP server implementation for Stencil
//!
//! This module implements the Model Context Protocol server for Stencil.
//! Every prompt in the [`PromptRegistry`] is exposed through `prompts/list`
//! and `prompts/get`; `symfony_command` is additionally available as a tool
//! for hosts without prompt support.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{
        GetPromptRequestParam, GetPromptResult, Implementation, ListPromptsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler,
};
use stencil_core::{PromptGenerator, PromptRegistry};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use errors::{join_error, to_mcp_error};
pub use handlers::{GenerateCommand, McpResult};

/// MCP server for Stencil
#[derive(Clone)]
pub struct StencilMcpServer {
    generator: Arc<PromptGenerator>,
    registry: Arc<PromptRegistry>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl StencilMcpServer {
    /// Create a new Stencil MCP server
    pub fn new(generator: PromptGenerator, registry: PromptRegistry) -> Self {
        Self {
            generator: Arc::new(generator),
            registry: Arc::new(registry),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.generator.clone(), self.registry.clone())
    }

    #[tool(
        name = "symfony_command",
        description = "Generate a prompt for creating a Symfony console command. Provide the command name (e.g. 'app:import-users') and a description of what it does. Set interactive=true for a command that asks for missing input. Returns the prompt text."
    )]
    async fn symfony_command(&self, params: Parameters<GenerateCommand>) -> McpResult {
        self.handlers().symfony_command(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for StencilMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "stencil".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Stencil generates prompts for scaffolding Symfony console commands.

## Prompts
- **symfony_command**: arguments `command_name` (required), `description` (required) and `interactive` (optional, "true" or "false"). Returns a single user message describing the command to build.

## Tools
- **symfony_command**: same inputs as the prompt, returns the prompt text as tool output.

Interactive commands ask for missing arguments in `interact()` and still run with `--no-interaction`."#.to_string()),
        }
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        Ok(self.handlers().list_prompts())
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.handlers().get_prompt(request).await
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: StencilMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Stencil MCP server on stdio");
    debug!(
        "Server created with {} tools and {} prompts",
        server.tool_router.list_all().len(),
        server.registry.len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    // Set up signal handlers for graceful shutdown
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
