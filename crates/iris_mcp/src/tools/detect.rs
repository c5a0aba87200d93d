//! Tool: detect_objects.

use crate::McpResult;
use crate::tools::{McpTool, args, to_output, url_property};
use async_trait::async_trait;
use iris_client::ComputerVisionClient;
use serde_json::{Value, json};
use tracing::instrument;

/// Detects objects in an image and returns their bounding boxes.
pub struct DetectObjectsTool {
    client: ComputerVisionClient,
}

impl DetectObjectsTool {
    /// Creates the tool.
    pub fn new(client: ComputerVisionClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl McpTool for DetectObjectsTool {
    fn name(&self) -> &str {
        "detect_objects"
    }

    fn description(&self) -> &str {
        "Detect objects in an image. Returns a bounding box, label and confidence for each object, \
         plus the object's ancestors in the object taxonomy (e.g. beagle -> dog -> mammal)."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "url": url_property()
            },
            "required": ["url"]
        })
    }

    #[instrument(skip(self, input))]
    async fn execute(&self, input: Value) -> McpResult<Value> {
        let url = args::required_str(&input, "url")?;

        let result = self.client.detect_objects(url).await?;
        to_output(&result)
    }
}
