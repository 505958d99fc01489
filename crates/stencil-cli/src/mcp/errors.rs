//! Error handling utilities for MCP server

use rmcp::ErrorData;
use stencil_core::StencilError;
use tokio::task::JoinError;

/// Helper to convert stencil errors to MCP errors
///
/// Caller mistakes become `invalid_params`; template faults become
/// `internal_error`.
pub fn to_mcp_error(message: &str, error: &StencilError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_caller_error() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}

/// Helper to convert a failed blocking task to an MCP error
pub fn join_error(error: JoinError) -> ErrorData {
    ErrorData::internal_error(format!("Task join error: {error}"), None)
}
