//! MCP tools wrapping the Computer Vision API.
//!
//! Each tool maps onto one API operation: it checks the caller's arguments,
//! makes a single request through [`ComputerVisionClient`], and returns the
//! parsed result as JSON.

use crate::{McpError, McpResult};
use async_trait::async_trait;
use iris_client::ComputerVisionClient;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

mod analyze;
mod area_of_interest;
mod args;
mod describe;
mod detect;
mod models;
mod ocr;
mod tag;

pub use analyze::AnalyzeImageTool;
pub use area_of_interest::GetAreaOfInterestTool;
pub use describe::DescribeImageTool;
pub use detect::DetectObjectsTool;
pub use models::{AnalyzeImageByDomainTool, ListModelsTool};
pub use ocr::RecognizePrintedTextTool;
pub use tag::TagImageTool;

/// A tool LLMs can call.
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Unique tool name.
    fn name(&self) -> &str;

    /// Description shown to the model.
    fn description(&self) -> &str;

    /// JSON Schema of the tool's arguments.
    fn input_schema(&self) -> Value;

    /// Runs the tool.
    async fn execute(&self, input: Value) -> McpResult<Value>;
}

/// Registry of MCP tools, in registration order.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Arc<Vec<Arc<dyn McpTool>>>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding one tool per Computer Vision operation.
    #[instrument(skip(client))]
    pub fn vision(client: ComputerVisionClient) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(GetAreaOfInterestTool::new(client.clone())));
        registry.register(Arc::new(DescribeImageTool::new(client.clone())));
        registry.register(Arc::new(RecognizePrintedTextTool::new(client.clone())));
        registry.register(Arc::new(AnalyzeImageByDomainTool::new(client.clone())));
        registry.register(Arc::new(TagImageTool::new(client.clone())));
        registry.register(Arc::new(AnalyzeImageTool::new(client.clone())));
        registry.register(Arc::new(DetectObjectsTool::new(client.clone())));
        registry.register(Arc::new(ListModelsTool::new(client)));
        debug!(count = registry.len(), "Registered vision tools");
        registry
    }

    /// Registers a tool, replacing any tool with the same name.
    pub fn register(&mut self, tool: Arc<dyn McpTool>) {
        let tools = Arc::make_mut(&mut self.tools);
        match tools.iter().position(|t| t.name() == tool.name()) {
            Some(index) => tools[index] = tool,
            None => tools.push(tool),
        }
    }

    /// Looks up a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn McpTool>> {
        self.tools.iter().find(|t| t.name() == name).cloned()
    }

    /// Lists all tools.
    pub fn list(&self) -> Vec<Arc<dyn McpTool>> {
        self.tools.as_ref().clone()
    }

    /// Names of all tools.
    pub fn names(&self) -> Vec<String> {
        self.tools.iter().map(|t| t.name().to_string()).collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Runs the named tool.
    #[instrument(skip(self, input), fields(tool = %name))]
    pub async fn execute(&self, name: &str, input: Value) -> McpResult<Value> {
        let tool = self
            .get(name)
            .ok_or_else(|| McpError::ToolNotFound(name.to_string()))?;
        tool.execute(input).await
    }
}

/// Serializes a result shape for the caller.
///
/// The value can be as deep as the service's object hierarchy. Print it with
/// `iris_core::json` and release it with `iris_core::json::dispose`.
pub(crate) fn to_output<T: Serialize>(result: &T) -> McpResult<Value> {
    serde_json::to_value(result).map_err(|e| McpError::Serialization(e.to_string()))
}

/// Schema of the `url` argument shared by image-taking tools.
pub(crate) fn url_property() -> Value {
    serde_json::json!({
        "type": "string",
        "description": "Publicly reachable URL of the image (JPEG, PNG, GIF or BMP, under 4 MB)"
    })
}

/// Schema of the optional `language` argument.
pub(crate) fn language_property() -> Value {
    serde_json::json!({
        "type": "string",
        "description": "Language of the returned text, e.g. 'en', 'es', 'ja', 'pt', 'zh'. \
                        The service default is 'en'."
    })
}
