//! Optional query parameters for the API operations.
//!
//! Only values the caller set are sent. The one exception is
//! `detectOrientation`, which the OCR endpoint requires.

use derive_getters::Getters;
use iris_core::{Detail, VisualFeature, comma_list};

/// Parameters of the analyze operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into), default)]
pub struct AnalyzeImageParams {
    /// Visual features to return.
    visual_features: Vec<VisualFeature>,
    /// Domain-specific details to return.
    details: Vec<Detail>,
    /// Language of the returned text.
    language: Option<String>,
    /// Domain models to leave out of the description.
    description_exclude: Vec<Detail>,
}

impl AnalyzeImageParams {
    /// Creates a builder for AnalyzeImageParams.
    pub fn builder() -> AnalyzeImageParamsBuilder {
        AnalyzeImageParamsBuilder::default()
    }

    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if !self.visual_features.is_empty() {
            query.push(("visualFeatures", comma_list(&self.visual_features)));
        }
        if !self.details.is_empty() {
            query.push(("details", comma_list(&self.details)));
        }
        if let Some(language) = &self.language {
            query.push(("language", language.clone()));
        }
        if !self.description_exclude.is_empty() {
            query.push(("descriptionExclude", comma_list(&self.description_exclude)));
        }
        query
    }
}

/// Parameters of the describe operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into), default)]
pub struct DescribeImageParams {
    /// Maximum number of candidate captions to return.
    max_candidates: Option<u32>,
    /// Language of the returned text.
    language: Option<String>,
    /// Domain models to leave out of the description.
    description_exclude: Vec<Detail>,
}

impl DescribeImageParams {
    /// Creates a builder for DescribeImageParams.
    pub fn builder() -> DescribeImageParamsBuilder {
        DescribeImageParamsBuilder::default()
    }

    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(max_candidates) = self.max_candidates {
            query.push(("maxCandidates", max_candidates.to_string()));
        }
        if let Some(language) = &self.language {
            query.push(("language", language.clone()));
        }
        if !self.description_exclude.is_empty() {
            query.push(("descriptionExclude", comma_list(&self.description_exclude)));
        }
        query
    }
}

/// Parameters of the OCR operation.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct RecognizeTextParams {
    /// Whether to detect and correct text orientation before recognition.
    #[builder(default = "true")]
    detect_orientation: bool,
    /// BCP-47 language code of the text; the service auto-detects when unset.
    #[builder(default)]
    language: Option<String>,
}

impl Default for RecognizeTextParams {
    fn default() -> Self {
        Self {
            detect_orientation: true,
            language: None,
        }
    }
}

impl RecognizeTextParams {
    /// Creates a builder for RecognizeTextParams.
    pub fn builder() -> RecognizeTextParamsBuilder {
        RecognizeTextParamsBuilder::default()
    }

    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("detectOrientation", self.detect_orientation.to_string())];
        if let Some(language) = &self.language {
            query.push(("language", language.clone()));
        }
        query
    }
}

/// Builds the query for operations whose only parameter is `language`.
pub(crate) fn language_query(language: Option<&str>) -> Vec<(&'static str, String)> {
    language
        .map(|language| vec![("language", language.to_string())])
        .unwrap_or_default()
}
