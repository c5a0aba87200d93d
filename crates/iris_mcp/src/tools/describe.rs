//! Tool: describe_image.

use crate::tools::{McpTool, args, language_property, to_output, url_property};
use crate::{McpError, McpResult};
use async_trait::async_trait;
use iris_client::{ComputerVisionClient, DescribeImageParams};
use iris_core::Detail;
use serde_json::{Value, json};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Generates human-readable captions for an image.
pub struct DescribeImageTool {
    client: ComputerVisionClient,
}

impl DescribeImageTool {
    /// Creates the tool.
    pub fn new(client: ComputerVisionClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl McpTool for DescribeImageTool {
    fn name(&self) -> &str {
        "describe_image"
    }

    fn description(&self) -> &str {
        "Describe an image in human-readable language with complete sentences. \
         Returns one or more captions ordered by confidence, plus content tags."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "url": url_property(),
                "maxCandidates": {
                    "type": "integer",
                    "description": "Maximum number of candidate captions to return",
                    "minimum": 1,
                    "default": 1
                },
                "language": language_property(),
                "descriptionExclude": {
                    "type": "array",
                    "description": "Domain models to exclude when generating the description",
                    "items": {
                        "type": "string",
                        "enum": Detail::iter().map(|d| d.to_string()).collect::<Vec<_>>()
                    }
                }
            },
            "required": ["url"]
        })
    }

    #[instrument(skip(self, input))]
    async fn execute(&self, input: Value) -> McpResult<Value> {
        let url = args::required_str(&input, "url")?;
        let params = DescribeImageParams::builder()
            .max_candidates(args::optional_positive_u32(&input, "maxCandidates")?)
            .language(args::optional_str(&input, "language")?.map(str::to_string))
            .description_exclude(args::enum_list::<Detail>(&input, "descriptionExclude")?)
            .build()
            .map_err(|e| McpError::InvalidInput(e.to_string()))?;

        let result = self.client.describe_image(url, &params).await?;
        to_output(&result)
    }
}
