/// S3 ListObjectsV2Input.
#[derive(Debug, Clone, Default)]
pub struct ListObjectsV2Input {
    /// HTTP label (URI path).
    pub bucket: String,
    /// HTTP query: `max-keys`.
    pub max_keys: Option<i32>,
}

impl ListObjectsV2Input {
    /// Create an input listing `bucket` with at most `max_keys` entries.
    #[must_use]
    pub fn new(bucket: impl Into<String>, max_keys: i32) -> Self {
        Self {
            bucket: bucket.into(),
            max_keys: Some(max_keys),
        }
    }
}
