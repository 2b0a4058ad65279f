//! Validation of bucket names and object keys against the storage layout.
//!
//! A bucket is a single directory directly under the service root and an
//! object key is a path relative to its bucket directory. These checks only
//! decide whether a name can address such a location. The S3 bucket naming
//! rules are not applied.

use std::path::{Component, Path};

/// Maximum object key length in bytes.
const MAX_KEY_BYTES: usize = 1024;

/// Whether `name` can name a directory directly under the service root.
///
/// # Examples
///
/// ```
/// use mockaws_s3_core::validation::is_valid_bucket_name;
///
/// assert!(is_valid_bucket_name("bucket1"));
/// assert!(!is_valid_bucket_name("a/b"));
/// assert!(!is_valid_bucket_name(".."));
/// ```
#[must_use]
pub fn is_valid_bucket_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

/// Whether `key` can address a file inside its bucket directory.
///
/// Rules:
/// - non-empty and at most 1024 bytes
/// - relative, with no `..` component and no leading `./`
///
/// # Examples
///
/// ```
/// use mockaws_s3_core::validation::is_valid_object_key;
///
/// assert!(is_valid_object_key("sample.txt"));
/// assert!(is_valid_object_key("photos/2024/img.jpg"));
/// assert!(!is_valid_object_key("../escape.txt"));
/// assert!(!is_valid_object_key("/etc/passwd"));
/// ```
#[must_use]
pub fn is_valid_object_key(key: &str) -> bool {
    if key.is_empty() || key.len() > MAX_KEY_BYTES {
        return false;
    }

    Path::new(key)
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
}
