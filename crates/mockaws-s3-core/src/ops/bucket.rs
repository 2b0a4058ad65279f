//! Bucket existence check.

use tracing::debug;

use crate::error::{S3ServiceError, S3ServiceResult};
use crate::provider::MockS3;

impl MockS3 {
    /// Whether `bucket` exists in this client's region.
    ///
    /// A bucket exists when its directory under `<root>/<region>/s3/` can be
    /// enumerated. Never fails: every failure reads as "does not exist".
    ///
    /// # Examples
    ///
    /// ```
    /// use mockaws_s3_core::{MockS3, S3Options};
    ///
    /// # tokio_test::block_on(async {
    /// let dir = tempfile::tempdir().unwrap();
    /// std::fs::create_dir_all(dir.path().join("us-east-1/s3/photos")).unwrap();
    ///
    /// let client = MockS3::new(S3Options::builder().root_dir(dir.path().into()).build());
    /// assert!(client.bucket_exists("photos").await);
    /// assert!(!client.bucket_exists("videos").await);
    /// # });
    /// ```
    pub async fn bucket_exists(&self, bucket: &str) -> bool {
        let exists = self.storage.bucket_exists(bucket).await;
        debug!(bucket, region = self.region(), exists, "bucket_exists completed");
        exists
    }

    /// Fail with `NoSuchBucket` unless `bucket` exists.
    pub(super) async fn require_bucket(&self, bucket: &str) -> S3ServiceResult<()> {
        if self.storage.bucket_exists(bucket).await {
            Ok(())
        } else {
            Err(S3ServiceError::NoSuchBucket {
                bucket: bucket.to_owned(),
            })
        }
    }
}
