//! List operation handler.
//!
//! Implements `list_objects_v2` over the top level of a bucket directory.

use chrono::{DateTime, Utc};
use mockaws_s3_model::input::ListObjectsV2Input;
use mockaws_s3_model::output::ListObjectsV2Output;
use mockaws_s3_model::types::Object;
use tracing::debug;

use crate::error::S3ServiceResult;
use crate::provider::MockS3;
use crate::storage::EntryInfo;

/// Default maximum number of keys returned in a single listing response.
pub(crate) const DEFAULT_MAX_KEYS: i32 = 1000;

// S3 shapes use signed integers for inherently non-negative values.
#[allow(clippy::cast_possible_wrap)]
fn to_s3_object(entry: EntryInfo) -> Object {
    Object {
        e_tag: None,
        key: Some(entry.name),
        last_modified: entry.last_modified.map(DateTime::<Utc>::from),
        size: Some(entry.size as i64),
    }
}

impl MockS3 {
    /// List the objects directly inside a bucket.
    ///
    /// Entries are returned in name order. At most `max_keys` entries are
    /// returned (1000 when unset, none when zero or negative), and
    /// `is_truncated` reports whether any were left out. The echoed
    /// `max_keys` is the limit actually applied, so it is never negative.
    /// Sub-directories are listed as single entries and not descended into.
    ///
    /// # Errors
    ///
    /// - [`crate::S3ServiceError::NoSuchBucket`] if the bucket does not exist.
    /// - [`crate::S3ServiceError::Io`] if the directory or an entry's metadata
    ///   cannot be read.
    pub async fn list_objects_v2(
        &self,
        input: ListObjectsV2Input,
    ) -> S3ServiceResult<ListObjectsV2Output> {
        let bucket = input.bucket;
        self.require_bucket(&bucket).await?;

        let max_keys = input.max_keys.unwrap_or(DEFAULT_MAX_KEYS);
        self.list_existing_bucket(bucket, max_keys).await
    }

    /// List a bucket whose existence was already checked.
    ///
    /// Negative `max_keys` is clamped to zero. Filesystem failures are returned unchanged as
    /// [`crate::S3ServiceError::Io`].
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    async fn list_existing_bucket(
        &self,
        bucket: String,
        max_keys: i32,
    ) -> S3ServiceResult<ListObjectsV2Output> {
        let max_keys = max_keys.max(0);
        let limit = max_keys as usize;
        let listing = self.storage.list_entries(&bucket, limit).await?;
        let contents: Vec<Object> = listing.entries.into_iter().map(to_s3_object).collect();

        debug!(
            bucket = %bucket,
            max_keys,
            key_count = contents.len(),
            is_truncated = listing.is_truncated,
            "list_objects_v2 completed"
        );

        Ok(ListObjectsV2Output {
            key_count: Some(contents.len() as i32),
            contents,
            is_truncated: Some(listing.is_truncated),
            max_keys: Some(max_keys),
            name: Some(bucket),
        })
    }
}
