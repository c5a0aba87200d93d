//! Tool: tag_image.

use crate::McpResult;
use crate::tools::{McpTool, args, language_property, to_output, url_property};
use async_trait::async_trait;
use iris_client::ComputerVisionClient;
use serde_json::{Value, json};
use tracing::instrument;

/// Tags an image with recognizable objects, living beings, scenery and actions.
pub struct TagImageTool {
    client: ComputerVisionClient,
}

impl TagImageTool {
    /// Creates the tool.
    pub fn new(client: ComputerVisionClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl McpTool for TagImageTool {
    fn name(&self) -> &str {
        "tag_image"
    }

    fn description(&self) -> &str {
        "Generate a list of words, or tags, relevant to the content of an image. \
         Tags cover objects, living beings, scenery and actions, each with a confidence score. \
         A tag may carry a hint that gives context, e.g. 'animal' for 'bird'."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "url": url_property(),
                "language": language_property()
            },
            "required": ["url"]
        })
    }

    #[instrument(skip(self, input))]
    async fn execute(&self, input: Value) -> McpResult<Value> {
        let url = args::required_str(&input, "url")?;
        let language = args::optional_str(&input, "language")?;

        let result = self.client.tag_image(url, language).await?;
        to_output(&result)
    }
}
