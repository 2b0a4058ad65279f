//! Shared S3 structures.

/// S3 Object, as returned in listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Object {
    /// Entity tag, when known.
    pub e_tag: Option<String>,
    /// Object key.
    pub key: Option<String>,
    /// Last modification time.
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
    /// Size in bytes.
    pub size: Option<i64>,
}
