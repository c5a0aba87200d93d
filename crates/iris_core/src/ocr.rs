//! Printed text recognition (OCR) shapes.
//!
//! Bounding boxes are strings of four comma-separated integers: left, top,
//! width and height, in the coordinate system of the input image after it has
//! been rotated by the detected text angle.

use serde::{Deserialize, Serialize};

/// A recognized word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrWord {
    /// Bounding box of the word.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<String>,
    /// String value of the word.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A recognized line of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrLine {
    /// Bounding box of the line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<String>,
    /// Words of the line.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub words: Vec<OcrWord>,
}

/// A region of recognized text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrRegion {
    /// Bounding box of the region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<String>,
    /// Lines of text in the region.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<OcrLine>,
}

/// Result of the OCR operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrResult {
    /// The BCP-47 language code of the text in the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Angle in degrees of the detected text relative to the closest horizontal
    /// or vertical direction. Absent when it cannot be confidently detected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_angle: Option<f64>,
    /// Direction the top of the text is facing: up, down, left or right.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
    /// Regions of recognized text.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<OcrRegion>,
}
