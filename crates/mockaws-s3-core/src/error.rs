//! S3-specific error types.
//!
//! [`S3ServiceError`] distinguishes the two not-found conditions a storage
//! client has to handle from every other filesystem failure. Each variant maps
//! to an [`S3ErrorCode`] through [`S3ServiceError::code`].
//!
//! # Usage
//!
//! ```
//! use mockaws_s3_core::error::S3ServiceError;
//! use mockaws_s3_model::S3ErrorCode;
//!
//! let err = S3ServiceError::NoSuchBucket {
//!     bucket: "my-bucket".to_owned(),
//! };
//! assert_eq!(err.code(), S3ErrorCode::NoSuchBucket);
//! assert!(err.to_string().contains("my-bucket"));
//! ```

use mockaws_s3_model::S3ErrorCode;

/// S3 service error type.
#[derive(Debug, thiserror::Error)]
pub enum S3ServiceError {
    /// The specified bucket does not exist.
    #[error("The specified bucket does not exist: {bucket}")]
    NoSuchBucket {
        /// The bucket name that was not found.
        bucket: String,
    },

    /// The specified key does not exist.
    #[error("The specified key does not exist: {bucket}/{key}")]
    NoSuchKey {
        /// The bucket that was searched.
        bucket: String,
        /// The key that was not found.
        key: String,
    },

    /// Any other filesystem failure, passed through unchanged.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl S3ServiceError {
    /// The S3 error code for this error.
    #[must_use]
    pub fn code(&self) -> S3ErrorCode {
        match self {
            Self::NoSuchBucket { .. } => S3ErrorCode::NoSuchBucket,
            Self::NoSuchKey { .. } => S3ErrorCode::NoSuchKey,
            Self::Io(_) => S3ErrorCode::InternalError,
        }
    }

    /// Whether this is a [`S3ServiceError::NoSuchBucket`] error.
    #[must_use]
    pub fn is_no_such_bucket(&self) -> bool {
        matches!(self, Self::NoSuchBucket { .. })
    }

    /// Whether this is a [`S3ServiceError::NoSuchKey`] error.
    #[must_use]
    pub fn is_no_such_key(&self) -> bool {
        matches!(self, Self::NoSuchKey { .. })
    }
}

/// Convenience result type for S3 service operations.
pub type S3ServiceResult<T> = Result<T, S3ServiceError>;
