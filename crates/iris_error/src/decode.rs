//! Response decoding error types.

/// A success response whose body did not match the expected data shape.
#[derive(Debug, Clone)]
pub struct DecodeError {
    /// Name of the shape that failed to decode
    pub shape: &'static str,
    /// Parser message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl DecodeError {
    /// Create a new DecodeError for `shape` at the current location.
    #[track_caller]
    pub fn new(shape: &'static str, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            shape,
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Decode Error: failed to parse {}: {} at line {} in {}",
            self.shape, self.message, self.line, self.file
        )
    }
}

impl std::error::Error for DecodeError {}
