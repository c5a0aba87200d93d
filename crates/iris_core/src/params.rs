//! Query parameter values accepted by the analyze and describe operations.

use strum::{AsRefStr, Display, EnumIter, EnumString};

/// A visual feature to return from the analyze operation.
///
/// Parsing is case-insensitive; the API spelling is used on the wire.
///
/// # Examples
///
/// ```
/// use iris_core::VisualFeature;
///
/// let feature: VisualFeature = "imagetype".parse().unwrap();
/// assert_eq!(feature, VisualFeature::ImageType);
/// assert_eq!(feature.to_string(), "ImageType");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum VisualFeature {
    /// Categorize image content using the 86-category taxonomy.
    Categories,
    /// Tag the image with a detailed list of words.
    Tags,
    /// Describe the image content with a complete English sentence.
    Description,
    /// Detect faces, with gender and age.
    Faces,
    /// Detect whether the image is clip art or a line drawing.
    ImageType,
    /// Determine accent color, dominant colors, and black and white.
    Color,
    /// Detect adult and racy content.
    Adult,
    /// Detect objects and their bounding boxes.
    Objects,
    /// Detect commercial brands.
    Brands,
}

/// Domain-specific detail to return, or to exclude from descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Detail {
    /// Identify celebrities.
    Celebrities,
    /// Identify landmarks.
    Landmarks,
}

/// Joins values into the comma-separated form used by list-valued query parameters.
pub fn comma_list<T: AsRef<str>>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}
