//! Upstream (remote service) error types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error payload returned by the Computer Vision service.
///
/// This is passed through to tool callers exactly as the service sent it.
///
/// # Examples
///
/// ```
/// use iris_error::ComputerVisionError;
///
/// let body = r#"{"code":"InvalidImageUrl","requestId":"abc","message":"Image URL is badly formatted."}"#;
/// let err = ComputerVisionError::from_response_body(400, body);
/// assert_eq!(err.code, "InvalidImageUrl");
/// assert_eq!(err.request_id.as_deref(), Some("abc"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputerVisionError {
    /// The error code. Usually a string, sometimes a number.
    pub code: Value,
    /// A message explaining the error reported by the service.
    pub message: String,
    /// A unique request identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ComputerVisionError,
}

impl ComputerVisionError {
    /// Parses the body of a non-success response.
    ///
    /// Accepts the bare error object or one wrapped as `{"error": {...}}`. A body
    /// that is neither becomes an error whose code is the HTTP status and whose
    /// message is the raw body text.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        if let Ok(err) = serde_json::from_str::<ComputerVisionError>(body) {
            return err;
        }
        if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
            return envelope.error;
        }

        let message = if body.trim().is_empty() {
            format!("HTTP status {}", status)
        } else {
            body.to_string()
        };

        Self {
            code: Value::from(status),
            message,
            request_id: None,
        }
    }
}

/// The remote service answered with a non-success status.
#[derive(Debug, Clone)]
pub struct UpstreamError {
    /// HTTP status code of the response
    pub status: u16,
    /// Error payload, unchanged from the service
    pub error: ComputerVisionError,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl UpstreamError {
    /// Create a new UpstreamError at the current location.
    #[track_caller]
    pub fn new(status: u16, error: ComputerVisionError) -> Self {
        let location = std::panic::Location::caller();
        Self {
            status,
            error,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Upstream Error: HTTP {} code={} message={}",
            self.status, self.error.code, self.error.message
        )?;
        if let Some(request_id) = &self.error.request_id {
            write!(f, " request_id={}", request_id)?;
        }
        write!(f, " at line {} in {}", self.line, self.file)
    }
}

impl std::error::Error for UpstreamError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wrapped_error() {
        let body = r#"{"error":{"code":"Unauthorized","message":"Access denied"}}"#;
        let err = ComputerVisionError::from_response_body(401, body);
        assert_eq!(err.code, "Unauthorized");
        assert_eq!(err.message, "Access denied");
        assert!(err.request_id.is_none());
    }

    #[test]
    fn falls_back_to_status_and_body() {
        let err = ComputerVisionError::from_response_body(502, "Bad Gateway");
        assert_eq!(err.code, 502);
        assert_eq!(err.message, "Bad Gateway");
    }

    #[test]
    fn empty_body_uses_status() {
        let err = ComputerVisionError::from_response_body(503, "  ");
        assert_eq!(err.message, "HTTP status 503");
    }

    #[test]
    fn omits_missing_request_id() {
        let err = ComputerVisionError {
            code: Value::from("InvalidArgument"),
            message: "bad".to_string(),
            request_id: None,
        };
        let json = serde_json::to_value(&err).unwrap();
        assert!(json.get("requestId").is_none());
    }
}
