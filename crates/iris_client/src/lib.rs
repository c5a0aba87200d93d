//! HTTP client for the Computer Vision REST API.
//!
//! # Usage
//!
//! ```no_run
//! use iris_client::{AnalyzeImageParams, ComputerVisionClient, VisionConfig};
//! use iris_core::VisualFeature;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = VisionConfig::load()?;
//! let client = ComputerVisionClient::new(&config)?;
//!
//! let params = AnalyzeImageParams::builder()
//!     .visual_features(vec![VisualFeature::Tags, VisualFeature::Description])
//!     .build()?;
//! let analysis = client
//!     .analyze_image("https://example.com/image.jpg", &params)
//!     .await?;
//! println!("{:?}", analysis.tags);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod params;
mod settings;

pub use client::{ComputerVisionClient, SUBSCRIPTION_KEY_HEADER};
pub use params::{
    AnalyzeImageParams, AnalyzeImageParamsBuilder, DescribeImageParams, DescribeImageParamsBuilder,
    RecognizeTextParams, RecognizeTextParamsBuilder,
};
pub use settings::{
    DEFAULT_CONFIG_NAME, DEFAULT_TIMEOUT_SECS, ENV_PREFIX, VisionConfig, VisionConfigBuilder,
};
