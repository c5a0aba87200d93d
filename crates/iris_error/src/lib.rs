//! Error types for the Iris computer vision tool server.
//!
//! Each error records the file and line where it was created. The only domain
//! error is [`UpstreamError`]: the remote service refused the call, and its
//! [`ComputerVisionError`] payload is kept verbatim for the caller.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod decode;
mod http;
mod upstream;

pub use config::ConfigError;
pub use decode::DecodeError;
pub use http::HttpError;
pub use upstream::{ComputerVisionError, UpstreamError};

use derive_more::{Display, Error, From};

/// Specific error conditions for Iris operations.
#[derive(Debug, Clone, Display, Error, From)]
pub enum IrisErrorKind {
    /// Transport failure before a response arrived
    #[display("{}", _0)]
    Http(HttpError),
    /// Invalid or missing configuration
    #[display("{}", _0)]
    Config(ConfigError),
    /// Non-success response from the service
    #[display("{}", _0)]
    Upstream(UpstreamError),
    /// Success response that did not match the expected shape
    #[display("{}", _0)]
    Decode(DecodeError),
}

/// Iris error wrapping an [`IrisErrorKind`].
///
/// # Examples
///
/// ```
/// use iris_error::{ConfigError, IrisError, IrisErrorKind};
///
/// let err: IrisError = ConfigError::new("api_key must not be empty").into();
/// assert!(matches!(err.kind(), IrisErrorKind::Config(_)));
/// assert!(err.upstream().is_none());
/// ```
#[derive(Debug, Clone, Display, Error)]
#[display("Iris Error: {}", _0)]
pub struct IrisError(Box<IrisErrorKind>);

impl IrisError {
    /// Create a new IrisError from a kind.
    pub fn new(kind: IrisErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &IrisErrorKind {
        &self.0
    }

    /// Returns the upstream error if the service rejected the call.
    pub fn upstream(&self) -> Option<&UpstreamError> {
        match self.kind() {
            IrisErrorKind::Upstream(err) => Some(err),
            _ => None,
        }
    }
}

impl From<IrisErrorKind> for IrisError {
    fn from(kind: IrisErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<HttpError> for IrisError {
    fn from(err: HttpError) -> Self {
        Self::new(err.into())
    }
}

impl From<ConfigError> for IrisError {
    fn from(err: ConfigError) -> Self {
        Self::new(err.into())
    }
}

impl From<UpstreamError> for IrisError {
    fn from(err: UpstreamError) -> Self {
        Self::new(err.into())
    }
}

impl From<DecodeError> for IrisError {
    fn from(err: DecodeError) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Iris operations.
pub type IrisResult<T> = Result<T, IrisError>;
