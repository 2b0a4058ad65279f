//! Error types for the mockaws core.

/// Core error type for mockaws configuration and shared types.
#[derive(Debug, thiserror::Error)]
pub enum MockAwsError {
    /// Region that cannot be used as a directory of the storage layout.
    #[error("invalid region: {0:?} (must be a single non-empty path segment)")]
    InvalidRegion(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience result type for mockaws core operations.
pub type MockAwsResult<T> = Result<T, MockAwsError>;
