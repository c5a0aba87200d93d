//! Rectangles locating regions within an image.

use serde::{Deserialize, Serialize};

/// A bounding box for an area inside an image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingRect {
    /// X-coordinate of the top left point of the area, in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    /// Y-coordinate of the top left point of the area, in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
    /// Width measured from the top-left point of the area, in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<i32>,
    /// Height measured from the top-left point of the area, in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<i32>,
}

impl BoundingRect {
    /// Creates a fully populated rectangle.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            w: Some(w),
            h: Some(h),
        }
    }
}

/// An object describing a face rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceRectangle {
    /// X-coordinate of the top left point of the face, in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<i32>,
    /// Y-coordinate of the top left point of the face, in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<i32>,
    /// Width measured from the top-left point of the face, in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    /// Height measured from the top-left point of the face, in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
}
