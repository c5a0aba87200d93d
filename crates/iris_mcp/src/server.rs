//! MCP server implementation.

use crate::McpError;
use crate::tools::ToolRegistry;
use iris_core::json;
use mcp_server::Router;
use mcp_server::router::CapabilitiesBuilder;
use mcp_spec::{
    content::Content,
    handler::{PromptError, ResourceError, ToolError},
    protocol::ServerCapabilities,
    prompt::Prompt,
    resource::Resource,
    tool::Tool,
};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use tracing::{debug, info, instrument, warn};

/// MCP router exposing the Computer Vision tools.
#[derive(Clone)]
pub struct IrisRouter {
    name: String,
    version: String,
    tools: ToolRegistry,
}

impl IrisRouter {
    /// Creates a new router builder.
    pub fn builder() -> IrisRouterBuilder {
        IrisRouterBuilder::default()
    }

    /// The tools this router serves.
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }
}

/// Maps a tool failure onto the MCP error the caller sees.
///
/// `RouterService` answers a failed call with a result flagged `isError` whose
/// text is the error's display form. For upstream failures that text is
/// `Execution failed: ` followed by the service's error JSON, unchanged.
fn to_tool_error(err: &McpError) -> ToolError {
    match err {
        McpError::ToolNotFound(name) => ToolError::NotFound(name.clone()),
        McpError::InvalidInput(_) => ToolError::InvalidParameters(err.caller_message()),
        McpError::Upstream(_) | McpError::ToolExecutionFailed(_) | McpError::Serialization(_) => {
            ToolError::ExecutionError(err.caller_message())
        }
    }
}

impl Router for IrisRouter {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn instructions(&self) -> String {
        format!(
            "Iris MCP Server v{}\n\n\
            This server analyzes images through the Computer Vision API. \
            Every tool takes a publicly reachable image URL; results are returned as JSON. \
            Errors reported by the service are returned unchanged.\n\n\
            Available tools: {}",
            self.version,
            self.tools.names().join(", ")
        )
    }

    fn capabilities(&self) -> ServerCapabilities {
        CapabilitiesBuilder::new().with_tools(false).build()
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tools
            .list()
            .iter()
            .map(|tool| {
                Tool::new(
                    tool.name().to_string(),
                    tool.description().to_string(),
                    tool.input_schema(),
                )
            })
            .collect()
    }

    #[instrument(skip(self, arguments), fields(tool = %tool_name))]
    fn call_tool(
        &self,
        tool_name: &str,
        arguments: Value,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Content>, ToolError>> + Send + 'static>> {
        debug!(tool = %tool_name, args = ?arguments, "Tool called");

        let tools = self.tools.clone();
        let tool_name = tool_name.to_string();

        Box::pin(async move {
            match tools.execute(&tool_name, arguments).await {
                Ok(result) => {
                    info!(tool = %tool_name, "Tool executed successfully");
                    let text = json::to_string_pretty(&result);
                    json::dispose(result);
                    let text = text.map_err(|e| ToolError::ExecutionError(e.to_string()))?;
                    Ok(vec![Content::text(text)])
                }
                Err(e) => {
                    warn!(tool = %tool_name, error = %e, "Tool execution failed");
                    Err(to_tool_error(&e))
                }
            }
        })
    }

    fn list_resources(&self) -> Vec<Resource> {
        vec![]
    }

    fn read_resource(
        &self,
        uri: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String, ResourceError>> + Send + 'static>> {
        let uri = uri.to_string();
        Box::pin(async move {
            Err(ResourceError::NotFound(format!(
                "Resource {} not found",
                uri
            )))
        })
    }

    fn list_prompts(&self) -> Vec<Prompt> {
        vec![]
    }

    fn get_prompt(
        &self,
        prompt_name: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String, PromptError>> + Send + 'static>> {
        let prompt_name = prompt_name.to_string();
        Box::pin(async move {
            Err(PromptError::NotFound(format!(
                "Prompt {} not found",
                prompt_name
            )))
        })
    }
}

/// Builder for [`IrisRouter`].
#[derive(Default)]
pub struct IrisRouterBuilder {
    name: Option<String>,
    version: Option<String>,
    tools: Option<ToolRegistry>,
}

impl IrisRouterBuilder {
    /// Sets the server name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the server version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the tool registry.
    pub fn tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = Some(tools);
        self
    }

    /// Builds the router.
    pub fn build(self) -> IrisRouter {
        IrisRouter {
            name: self.name.unwrap_or_else(|| "iris".to_string()),
            version: self
                .version
                .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
            tools: self.tools.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iris_error::{ComputerVisionError, UpstreamError};
    use serde_json::json;

    #[test]
    fn error_mapping() {
        assert!(matches!(
            to_tool_error(&McpError::ToolNotFound("x".into())),
            ToolError::NotFound(_)
        ));
        assert!(matches!(
            to_tool_error(&McpError::InvalidInput("Missing 'url'".into())),
            ToolError::InvalidParameters(ref m) if m.contains("url")
        ));

        let upstream = UpstreamError::new(
            400,
            ComputerVisionError {
                code: json!("InvalidImageUrl"),
                message: "Image URL is badly formatted.".to_string(),
                request_id: None,
            },
        );
        match to_tool_error(&McpError::Upstream(upstream)) {
            ToolError::ExecutionError(message) => {
                let payload: Value = serde_json::from_str(&message).unwrap();
                assert_eq!(
                    payload,
                    json!({"code": "InvalidImageUrl", "message": "Image URL is badly formatted."})
                );
            }
            other => panic!("expected execution error, got {:?}", other),
        }
    }

    #[test]
    fn builder_defaults() {
        let router = IrisRouter::builder().build();
        assert_eq!(router.name(), "iris");
        assert!(router.list_tools().is_empty());
        assert!(router.list_resources().is_empty());
        assert!(router.list_prompts().is_empty());
    }
}
