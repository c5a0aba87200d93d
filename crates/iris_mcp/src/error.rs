//! Error types for MCP tool execution.

use derive_more::Display;
use iris_error::{IrisError, UpstreamError};

/// Errors raised while resolving or running a tool.
#[derive(Debug, Clone, Display)]
pub enum McpError {
    /// No tool registered under the requested name.
    #[display("Tool not found: {}", _0)]
    ToolNotFound(String),

    /// Arguments were missing or had the wrong type.
    #[display("Invalid input: {}", _0)]
    InvalidInput(String),

    /// The Computer Vision service rejected the call.
    #[display("{}", _0)]
    Upstream(UpstreamError),

    /// The call failed before the service could answer.
    #[display("Tool execution failed: {}", _0)]
    ToolExecutionFailed(String),

    /// The result could not be serialized.
    #[display("Serialization error: {}", _0)]
    Serialization(String),
}

impl std::error::Error for McpError {}

impl From<UpstreamError> for McpError {
    fn from(err: UpstreamError) -> Self {
        McpError::Upstream(err)
    }
}

impl From<IrisError> for McpError {
    fn from(err: IrisError) -> Self {
        match err.upstream() {
            Some(upstream) => McpError::Upstream(upstream.clone()),
            None => McpError::ToolExecutionFailed(err.to_string()),
        }
    }
}

impl McpError {
    /// Text handed back to the MCP caller.
    ///
    /// Upstream failures yield the service's error payload as JSON, unchanged.
    pub fn caller_message(&self) -> String {
        match self {
            McpError::Upstream(upstream) => serde_json::to_string(&upstream.error)
                .unwrap_or_else(|_| upstream.error.message.clone()),
            other => other.to_string(),
        }
    }
}

/// Result type for MCP tool operations.
pub type McpResult<T> = Result<T, McpError>;
