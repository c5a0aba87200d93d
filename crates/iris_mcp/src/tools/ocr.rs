//! Tool: recognize_printed_text.

use crate::tools::{McpTool, args, to_output, url_property};
use crate::{McpError, McpResult};
use async_trait::async_trait;
use iris_client::{ComputerVisionClient, RecognizeTextParams};
use serde_json::{Value, json};
use tracing::instrument;

/// Recognizes printed text in an image (OCR).
pub struct RecognizePrintedTextTool {
    client: ComputerVisionClient,
}

impl RecognizePrintedTextTool {
    /// Creates the tool.
    pub fn new(client: ComputerVisionClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl McpTool for RecognizePrintedTextTool {
    fn name(&self) -> &str {
        "recognize_printed_text"
    }

    fn description(&self) -> &str {
        "Detect printed text in an image and extract it as machine-readable characters (OCR). \
         Text is returned as regions, lines and words, each with a bounding box."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "url": url_property(),
                "detectOrientation": {
                    "type": "boolean",
                    "description": "Detect the text orientation and correct it before recognition",
                    "default": true
                },
                "language": {
                    "type": "string",
                    "description": "BCP-47 language code of the text, e.g. 'en', 'de', 'zh-Hans'. \
                                    Defaults to 'unk' (auto-detect)."
                }
            },
            "required": ["url"]
        })
    }

    #[instrument(skip(self, input))]
    async fn execute(&self, input: Value) -> McpResult<Value> {
        let url = args::required_str(&input, "url")?;
        let params = RecognizeTextParams::builder()
            .detect_orientation(args::optional_bool(&input, "detectOrientation")?.unwrap_or(true))
            .language(args::optional_str(&input, "language")?.map(str::to_string))
            .build()
            .map_err(|e| McpError::InvalidInput(e.to_string()))?;

        let result = self.client.recognize_printed_text(url, &params).await?;
        to_output(&result)
    }
}
