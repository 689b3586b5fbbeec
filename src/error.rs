use crate::model::DocumentationType;

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the crate
#[derive(Debug)]
pub enum Error {
    /// An include pattern was rejected by the active path matcher
    InvalidPattern { pattern: String, message: String },
    /// No registered plugin supports the requested documentation type
    NoConfigurationFound(DocumentationType),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::InvalidPattern { pattern, message } => {
                write!(f, "Invalid include pattern '{}': {}", pattern, message)
            }
            Error::NoConfigurationFound(documentation_type) => {
                write!(
                    f,
                    "No configuration found for documentation type '{}'",
                    documentation_type
                )
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Build an `InvalidPattern` error from the pattern and the matcher's rejection
    pub fn invalid_pattern(pattern: &str, err: impl std::fmt::Display) -> Self {
        Error::InvalidPattern {
            pattern: pattern.to_string(),
            message: err.to_string(),
        }
    }
}
