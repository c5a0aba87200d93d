//! Data shapes mirroring the Computer Vision REST API.
//!
//! Every shape serializes with the API's camelCase field names. Optional fields
//! that are absent stay absent through a round trip, and empty lists are omitted.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod category;
mod domain;
mod geometry;
mod image;
pub mod json;
mod objects;
mod ocr;
mod params;
mod tagging;

pub use analysis::{AreaOfInterestResult, FaceDescription, ImageAnalysis};
pub use category::{Category, CategoryDetail, CelebritiesModel, LandmarksModel};
pub use domain::{
    CelebrityResults, DomainModelResults, LandmarkResults, ListModelsResult, ModelDescription,
};
pub use geometry::{BoundingRect, FaceRectangle};
pub use image::{AdultInfo, ColorInfo, ImageMetadata, ImageType, ImageUrl};
pub use objects::{Ancestors, DetectResult, DetectedBrand, DetectedObject, ObjectHierarchy};
pub use ocr::{OcrLine, OcrRegion, OcrResult, OcrWord};
pub use params::{Detail, VisualFeature, comma_list};
pub use tagging::{ImageCaption, ImageDescription, ImageDescriptionDetails, ImageTag, TagResult};

pub use iris_error::ComputerVisionError;
