use crate::request::StreamingBlob;

/// S3 GetObjectInput.
#[derive(Debug, Clone, Default)]
pub struct GetObjectInput {
    /// HTTP label (URI path).
    pub bucket: String,
    /// HTTP label (URI path).
    pub key: String,
}

impl GetObjectInput {
    /// Create an input fetching `key` from `bucket`.
    #[must_use]
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }
}

/// S3 PutObjectInput.
#[derive(Debug, Clone, Default)]
pub struct PutObjectInput {
    /// HTTP payload body.
    pub body: Option<StreamingBlob>,
    /// HTTP label (URI path).
    pub bucket: String,
    /// HTTP header: `Content-Length`.
    pub content_length: Option<i64>,
    /// HTTP label (URI path).
    pub key: String,
}

impl PutObjectInput {
    /// Create an input uploading `body` to `key` in `bucket`.
    ///
    /// `content_length` is set from the body length, as SDK clients do.
    #[must_use]
    pub fn new(
        bucket: impl Into<String>,
        key: impl Into<String>,
        body: impl Into<StreamingBlob>,
    ) -> Self {
        let body = body.into();
        Self {
            content_length: i64::try_from(body.len()).ok(),
            body: Some(body),
            bucket: bucket.into(),
            key: key.into(),
        }
    }
}
