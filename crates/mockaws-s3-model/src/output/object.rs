use crate::request::StreamingBlob;

/// S3 GetObjectOutput.
#[derive(Debug, Clone, Default)]
pub struct GetObjectOutput {
    /// HTTP payload body.
    pub body: Option<StreamingBlob>,
    /// HTTP header: `Content-Length`.
    pub content_length: Option<i64>,
    /// HTTP header: `ETag`.
    pub e_tag: Option<String>,
    /// HTTP header: `Last-Modified`.
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
}

/// S3 PutObjectOutput.
#[derive(Debug, Clone, Default)]
pub struct PutObjectOutput {
    /// HTTP header: `ETag`.
    pub e_tag: Option<String>,
    /// HTTP header: `x-amz-object-size`.
    pub size: Option<i64>,
}
