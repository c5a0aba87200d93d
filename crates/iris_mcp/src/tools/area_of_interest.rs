//! Tool: get_area_of_interest.

use crate::McpResult;
use crate::tools::{McpTool, args, to_output, url_property};
use async_trait::async_trait;
use iris_client::ComputerVisionClient;
use serde_json::{Value, json};
use tracing::instrument;

/// Finds the most important area of an image.
pub struct GetAreaOfInterestTool {
    client: ComputerVisionClient,
}

impl GetAreaOfInterestTool {
    /// Creates the tool.
    pub fn new(client: ComputerVisionClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl McpTool for GetAreaOfInterestTool {
    fn name(&self) -> &str {
        "get_area_of_interest"
    }

    fn description(&self) -> &str {
        "Return a bounding box around the most important area of an image, \
         as x, y, w and h in pixels."
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

        let result = self.client.get_area_of_interest(url).await?;
        to_output(&result)
    }
}
