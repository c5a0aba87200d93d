//! Tool: analyze_image.

use crate::tools::{McpTool, args, language_property, to_output, url_property};
use crate::{McpError, McpResult};
use async_trait::async_trait;
use iris_client::{AnalyzeImageParams, ComputerVisionClient};
use iris_core::{Detail, VisualFeature};
use serde_json::{Value, json};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Extracts a rich set of visual features from an image.
pub struct AnalyzeImageTool {
    client: ComputerVisionClient,
}

impl AnalyzeImageTool {
    /// Creates the tool.
    pub fn new(client: ComputerVisionClient) -> Self {
        Self { client }
    }
}

fn detail_names() -> Vec<String> {
    Detail::iter().map(|d| d.to_string()).collect()
}

#[async_trait]
impl McpTool for AnalyzeImageTool {
    fn name(&self) -> &str {
        "analyze_image"
    }

    fn description(&self) -> &str {
        "Extract a rich set of visual features from an image: categories, tags, description, \
         faces, image type, color scheme, adult content, objects and brands. \
         Choose which ones with visualFeatures; celebrity and landmark details with details."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "url": url_property(),
                "visualFeatures": {
                    "type": "array",
                    "description": "Visual feature types to return. \
                                    Defaults to Categories when omitted.",
                    "items": {
                        "type": "string",
                        "enum": VisualFeature::iter().map(|f| f.to_string()).collect::<Vec<_>>()
                    }
                },
                "details": {
                    "type": "array",
                    "description": "Domain-specific details to return",
                    "items": {"type": "string", "enum": detail_names()}
                },
                "language": language_property(),
                "descriptionExclude": {
                    "type": "array",
                    "description": "Domain models to exclude when generating the description",
                    "items": {"type": "string", "enum": detail_names()}
                }
            },
            "required": ["url"]
        })
    }

    #[instrument(skip(self, input))]
    async fn execute(&self, input: Value) -> McpResult<Value> {
        let url = args::required_str(&input, "url")?;
        let params = AnalyzeImageParams::builder()
            .visual_features(args::enum_list::<VisualFeature>(&input, "visualFeatures")?)
            .details(args::enum_list::<Detail>(&input, "details")?)
            .language(args::optional_str(&input, "language")?.map(str::to_string))
            .description_exclude(args::enum_list::<Detail>(&input, "descriptionExclude")?)
            .build()
            .map_err(|e| McpError::InvalidInput(e.to_string()))?;

        let result = self.client.analyze_image(url, &params).await?;
        to_output(&result)
    }
}
