//! Image-level shapes: the request body and per-image attributes.

use serde::{Deserialize, Serialize};

/// Request body for every image-taking operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageUrl {
    /// Publicly reachable URL of an image.
    pub url: String,
}

impl ImageUrl {
    /// Wraps an image URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Image metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageMetadata {
    /// Image width, in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    /// Image height, in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    /// Image format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// Possible image types and matching confidence levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageType {
    /// Confidence level that the image is a clip art.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clip_art_type: Option<i32>,
    /// Confidence level that the image is a line drawing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_drawing_type: Option<i32>,
}

/// Color attributes of an image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorInfo {
    /// Possible dominant foreground color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dominant_color_foreground: Option<String>,
    /// Possible dominant background color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dominant_color_background: Option<String>,
    /// An array of possible dominant colors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dominant_colors: Vec<String>,
    /// Possible accent color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    /// A value indicating if the image is black and white.
    #[serde(rename = "isBWImg", default, skip_serializing_if = "Option::is_none")]
    pub is_bw_img: Option<bool>,
}

/// Whether the image contains adult-oriented or racy content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdultInfo {
    /// A value indicating if the image contains adult-oriented content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_adult_content: Option<bool>,
    /// A value indicating if the image is racy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_racy_content: Option<bool>,
    /// Score from 0 to 1 that indicates how much the content is considered adult-oriented.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adult_score: Option<f64>,
    /// Score from 0 to 1 that indicates how suggestive is the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub racy_score: Option<f64>,
}
