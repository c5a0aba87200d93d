//! HTTP client for the Computer Vision REST API.

use crate::params::language_query;
use crate::{AnalyzeImageParams, DescribeImageParams, RecognizeTextParams, VisionConfig};
use iris_core::{
    AreaOfInterestResult, ComputerVisionError, DetectResult, DomainModelResults, ImageAnalysis,
    ImageDescription, ImageUrl, ListModelsResult, OcrResult, TagResult, json,
};
use iris_error::{DecodeError, HttpError, IrisResult, UpstreamError};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};

/// Header carrying the subscription key.
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Client for the Computer Vision REST API.
///
/// One method per API operation. Each method makes exactly one HTTP request and
/// parses the response into the matching data shape. A non-success response
/// becomes an [`UpstreamError`] holding the service's error payload unchanged.
#[derive(Clone)]
pub struct ComputerVisionClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ComputerVisionClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be constructed.
    #[instrument(skip(config), fields(base_url = %config.base_url()))]
    pub fn new(config: &VisionConfig) -> IrisResult<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;

        debug!(timeout_secs = config.timeout_secs(), "Created Computer Vision client");

        Ok(Self {
            client,
            base_url: config.base_url().trim_end_matches('/').to_string(),
            api_key: config.api_key().clone(),
        })
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Extracts a rich set of visual features from an image.
    #[instrument(skip(self, params), fields(url = %url))]
    pub async fn analyze_image(
        &self,
        url: &str,
        params: &AnalyzeImageParams,
    ) -> IrisResult<ImageAnalysis> {
        self.post_image("ImageAnalysis", "analyze", &params.query(), url)
            .await
    }

    /// Generates human-readable captions for an image.
    #[instrument(skip(self, params), fields(url = %url))]
    pub async fn describe_image(
        &self,
        url: &str,
        params: &DescribeImageParams,
    ) -> IrisResult<ImageDescription> {
        self.post_image("ImageDescription", "describe", &params.query(), url)
            .await
    }

    /// Detects objects and returns their bounding boxes.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn detect_objects(&self, url: &str) -> IrisResult<DetectResult> {
        self.post_image("DetectResult", "detect", &[], url).await
    }

    /// Tags an image with recognizable entities.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn tag_image(&self, url: &str, language: Option<&str>) -> IrisResult<TagResult> {
        self.post_image("TagResult", "tag", &language_query(language), url)
            .await
    }

    /// Recognizes printed text (OCR).
    #[instrument(skip(self, params), fields(url = %url))]
    pub async fn recognize_printed_text(
        &self,
        url: &str,
        params: &RecognizeTextParams,
    ) -> IrisResult<OcrResult> {
        self.post_image("OcrResult", "ocr", &params.query(), url).await
    }

    /// Returns a bounding box around the most important area of an image.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get_area_of_interest(&self, url: &str) -> IrisResult<AreaOfInterestResult> {
        self.post_image("AreaOfInterestResult", "areaOfInterest", &[], url)
            .await
    }

    /// Analyzes an image with a domain-specific model such as `celebrities`.
    #[instrument(skip(self), fields(model = %model, url = %url))]
    pub async fn analyze_image_by_domain(
        &self,
        model: &str,
        url: &str,
        language: Option<&str>,
    ) -> IrisResult<DomainModelResults> {
        let path = format!("models/{}/analyze", urlencoding::encode(model));
        self.post_image("DomainModelResults", &path, &language_query(language), url)
            .await
    }

    /// Lists the domain-specific models the service supports.
    #[instrument(skip(self))]
    pub async fn list_models(&self) -> IrisResult<ListModelsResult> {
        let request = self.client.get(self.endpoint("models"));
        self.send("ListModelsResult", request).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn post_image<T: DeserializeOwned>(
        &self,
        shape: &'static str,
        path: &str,
        query: &[(&'static str, String)],
        url: &str,
    ) -> IrisResult<T> {
        let request = self
            .client
            .post(self.endpoint(path))
            .query(query)
            .json(&ImageUrl::new(url));
        self.send(shape, request).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        shape: &'static str,
        request: RequestBuilder,
    ) -> IrisResult<T> {
        let response = request
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                HttpError::new(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!(status = %status, error = ?e, "Failed to read response body");
            HttpError::new(format!("Failed to read response body: {}", e))
        })?;

        if !status.is_success() {
            let payload = ComputerVisionError::from_response_body(status.as_u16(), &body);
            error!(
                status = %status,
                code = %payload.code,
                message = %payload.message,
                request_id = ?payload.request_id,
                "API error"
            );
            return Err(UpstreamError::new(status.as_u16(), payload).into());
        }

        debug!(status = %status, bytes = body.len(), shape, "Received response");

        json::from_str(&body).map_err(|e| {
            error!(shape, error = %e, "Failed to parse response");
            DecodeError::new(shape, e.to_string()).into()
        })
    }
}

impl std::fmt::Debug for ComputerVisionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComputerVisionClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
