//! Full image analysis and area of interest results.

use crate::{
    AdultInfo, BoundingRect, Category, ColorInfo, DetectedBrand, DetectedObject, FaceRectangle,
    ImageDescriptionDetails, ImageMetadata, ImageTag, ImageType,
};
use serde::{Deserialize, Serialize};

/// A face detected in the image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceDescription {
    /// Possible age of the face.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    /// Possible gender of the face.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Location of the face.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face_rectangle: Option<FaceRectangle>,
}

/// Result of the analyze operation.
///
/// Which fields are populated depends on the visual features requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAnalysis {
    /// Identified categories.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,
    /// Adult and racy content assessment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adult: Option<AdultInfo>,
    /// Color attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorInfo>,
    /// Image type confidence levels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_type: Option<ImageType>,
    /// Tags with confidence level.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<ImageTag>,
    /// Tags and captions describing the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<ImageDescriptionDetails>,
    /// Faces found in the image.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub faces: Vec<FaceDescription>,
    /// Objects detected in the image.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub objects: Vec<DetectedObject>,
    /// Brands detected in the image.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub brands: Vec<DetectedBrand>,
    /// Id of the REST API request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Image metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ImageMetadata>,
}

/// Result of the area of interest operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaOfInterestResult {
    /// The most important area of the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_of_interest: Option<BoundingRect>,
    /// Id of the REST API request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Image metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ImageMetadata>,
}
