//! Domain-specific models (celebrities, landmarks) and their results.

use crate::{CelebritiesModel, ImageMetadata, LandmarksModel};
use iris_error::DecodeError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A domain-specific model offered by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelDescription {
    /// The name of the model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Categories of the model.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
}

/// Result of the list models operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListModelsResult {
    /// Supported models.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub models: Vec<ModelDescription>,
}

/// Result of analyzing an image with a domain-specific model.
///
/// The `result` object is model specific. Use [`celebrities`](Self::celebrities)
/// or [`landmarks`](Self::landmarks) to decode the two known models.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainModelResults {
    /// Model-specific response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Map<String, Value>>,
    /// Id of the REST API request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Image metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ImageMetadata>,
}

impl DomainModelResults {
    /// Decodes `result` as the output of the `celebrities` model.
    pub fn celebrities(&self) -> Result<CelebrityResults, DecodeError> {
        let mut decoded: CelebrityResults = self.decode_result("CelebrityResults")?;
        decoded.request_id = decoded.request_id.or_else(|| self.request_id.clone());
        decoded.metadata = decoded.metadata.or_else(|| self.metadata.clone());
        Ok(decoded)
    }

    /// Decodes `result` as the output of the `landmarks` model.
    pub fn landmarks(&self) -> Result<LandmarkResults, DecodeError> {
        let mut decoded: LandmarkResults = self.decode_result("LandmarkResults")?;
        decoded.request_id = decoded.request_id.or_else(|| self.request_id.clone());
        decoded.metadata = decoded.metadata.or_else(|| self.metadata.clone());
        Ok(decoded)
    }

    fn decode_result<T>(&self, shape: &'static str) -> Result<T, DecodeError>
    where
        T: DeserializeOwned + Default,
    {
        match &self.result {
            Some(map) => serde_json::from_value(Value::Object(map.clone()))
                .map_err(|e| DecodeError::new(shape, e.to_string())),
            None => Ok(T::default()),
        }
    }
}

/// Output of the `celebrities` domain model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelebrityResults {
    /// Celebrities recognized in the image.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub celebrities: Vec<CelebritiesModel>,
    /// Id of the REST API request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Image metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ImageMetadata>,
}

/// Output of the `landmarks` domain model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandmarkResults {
    /// Landmarks recognized in the image.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub landmarks: Vec<LandmarksModel>,
    /// Id of the REST API request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Image metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ImageMetadata>,
}
