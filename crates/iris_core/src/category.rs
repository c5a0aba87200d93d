//! Categories and the celebrity/landmark details attached to them.

use crate::FaceRectangle;
use serde::{Deserialize, Serialize};

/// A recognized celebrity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelebritiesModel {
    /// Name of the celebrity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Confidence level for the celebrity recognition, from 0 to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Location of the celebrity's face.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face_rectangle: Option<FaceRectangle>,
}

/// A recognized landmark.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandmarksModel {
    /// Name of the landmark.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Confidence level for the landmark recognition, from 0 to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// Additional category details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryDetail {
    /// Celebrities identified, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub celebrities: Vec<CelebritiesModel>,
    /// Landmarks identified, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub landmarks: Vec<LandmarksModel>,
}

/// An identified category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Name of the category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Scoring of the category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Additional category details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<CategoryDetail>,
}
