use crate::types::Object;

/// S3 ListObjectsV2Output.
#[derive(Debug, Clone, Default)]
pub struct ListObjectsV2Output {
    /// Listed objects, at most `max_keys` of them.
    pub contents: Vec<Object>,
    /// Whether entries were left out because of `max_keys`.
    pub is_truncated: Option<bool>,
    /// Number of entries in `contents`.
    pub key_count: Option<i32>,
    /// The `max-keys` value the listing was performed with.
    pub max_keys: Option<i32>,
    /// Bucket name.
    pub name: Option<String>,
}

impl ListObjectsV2Output {
    /// The listed objects.
    #[must_use]
    pub fn contents(&self) -> &[Object] {
        &self.contents
    }

    /// Iterate over the keys of the listed objects.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.contents.iter().filter_map(|o| o.key.as_deref())
    }
}
