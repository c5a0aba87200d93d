//! Tools for domain-specific models: list_models and analyze_image_by_domain.

use crate::McpResult;
use crate::tools::{McpTool, args, language_property, to_output, url_property};
use async_trait::async_trait;
use iris_client::ComputerVisionClient;
use serde_json::{Value, json};
use tracing::instrument;

/// Lists the domain-specific models the service supports.
pub struct ListModelsTool {
    client: ComputerVisionClient,
}

impl ListModelsTool {
    /// Creates the tool.
    pub fn new(client: ComputerVisionClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl McpTool for ListModelsTool {
    fn name(&self) -> &str {
        "list_models"
    }

    fn description(&self) -> &str {
        "List the domain-specific models supported by the Computer Vision API, \
         with the categories each model applies to. Use a model name with analyze_image_by_domain."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    #[instrument(skip(self, input))]
    async fn execute(&self, input: Value) -> McpResult<Value> {
        args::object(&input)?;

        let result = self.client.list_models().await?;
        to_output(&result)
    }
}

/// Analyzes an image with a domain-specific model.
pub struct AnalyzeImageByDomainTool {
    client: ComputerVisionClient,
}

impl AnalyzeImageByDomainTool {
    /// Creates the tool.
    pub fn new(client: ComputerVisionClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl McpTool for AnalyzeImageByDomainTool {
    fn name(&self) -> &str {
        "analyze_image_by_domain"
    }

    fn description(&self) -> &str {
        "Recognize content within an image using a domain-specific model. \
         Supported models are 'celebrities' and 'landmarks'; call list_models for the current list."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "model": {
                    "type": "string",
                    "description": "Domain-specific model name, e.g. 'celebrities' or 'landmarks'"
                },
                "url": url_property(),
                "language": language_property()
            },
            "required": ["model", "url"]
        })
    }

    #[instrument(skip(self, input))]
    async fn execute(&self, input: Value) -> McpResult<Value> {
        let model = args::required_str(&input, "model")?;
        let url = args::required_str(&input, "url")?;
        let language = args::optional_str(&input, "language")?;

        let result = self
            .client
            .analyze_image_by_domain(model, url, language)
            .await?;
        to_output(&result)
    }
}
