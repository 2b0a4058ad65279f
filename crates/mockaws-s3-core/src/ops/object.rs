//! Object operation handlers.
//!
//! Implements `get_object` and `put_object`.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use mockaws_s3_model::input::{GetObjectInput, PutObjectInput};
use mockaws_s3_model::output::{GetObjectOutput, PutObjectOutput};
use mockaws_s3_model::request::StreamingBlob;
use tracing::{debug, warn};

use crate::checksums;
use crate::error::S3ServiceResult;
use crate::provider::MockS3;

// S3 shapes use signed integers for inherently non-negative values.
#[allow(clippy::cast_possible_wrap)]
impl MockS3 {
    /// Read the full content of an object.
    ///
    /// The returned body holds the complete file content, `content_length`
    /// is its length, and `e_tag` is the quoted MD5 of the content.
    ///
    /// # Errors
    ///
    /// - [`crate::S3ServiceError::NoSuchBucket`] if the bucket does not exist.
    /// - [`crate::S3ServiceError::NoSuchKey`] if the file cannot be opened or
    ///   stat'ed, is a directory, or the key cannot address a file.
    /// - [`crate::S3ServiceError::Io`] if reading the file fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use mockaws_s3_core::{MockS3, S3Options};
    /// use mockaws_s3_model::input::GetObjectInput;
    ///
    /// # tokio_test::block_on(async {
    /// let dir = tempfile::tempdir().unwrap();
    /// let bucket = dir.path().join("us-east-1/s3/docs");
    /// std::fs::create_dir_all(&bucket).unwrap();
    /// std::fs::write(bucket.join("readme.txt"), "hi").unwrap();
    ///
    /// let client = MockS3::new(S3Options::builder().root_dir(dir.path().into()).build());
    /// let output = client
    ///     .get_object(GetObjectInput::new("docs", "readme.txt"))
    ///     .await
    ///     .unwrap();
    /// assert_eq!(output.content_length, Some(2));
    /// assert_eq!(output.body.unwrap().as_ref(), b"hi");
    /// # });
    /// ```
    pub async fn get_object(&self, input: GetObjectInput) -> S3ServiceResult<GetObjectOutput> {
        let GetObjectInput { bucket, key } = input;
        self.require_bucket(&bucket).await?;

        let stored = self.storage.read_object(&bucket, &key).await?;
        let e_tag = checksums::compute_etag(&stored.data);
        let content_length = stored.data.len() as i64;

        debug!(bucket = %bucket, key = %key, content_length, "get_object completed");

        Ok(GetObjectOutput {
            body: Some(StreamingBlob::new(stored.data)),
            content_length: Some(content_length),
            e_tag: Some(e_tag),
            last_modified: Some(DateTime::<Utc>::from(stored.last_modified)),
        })
    }

    /// Create or replace an object with the full request body.
    ///
    /// A missing body writes an empty file. Intermediate directories of a
    /// nested key are created inside the bucket; the bucket itself must
    /// already exist.
    ///
    /// # Errors
    ///
    /// - [`crate::S3ServiceError::NoSuchBucket`] if the bucket does not exist.
    /// - [`crate::S3ServiceError::Io`] if the key cannot address a file inside
    ///   the bucket, the bucket directory disappears before the write, or the
    ///   write fails.
    pub async fn put_object(&self, input: PutObjectInput) -> S3ServiceResult<PutObjectOutput> {
        let PutObjectInput {
            body,
            bucket,
            content_length,
            key,
        } = input;
        self.require_bucket(&bucket).await?;

        let data = body.map(StreamingBlob::into_bytes).unwrap_or_else(Bytes::new);
        if let Some(declared) = content_length {
            if declared != data.len() as i64 {
                warn!(
                    bucket = %bucket,
                    key = %key,
                    declared,
                    actual = data.len(),
                    "content length does not match body, writing full body"
                );
            }
        }

        let written = self.storage.write_object(&bucket, &key, data).await?;

        debug!(bucket = %bucket, key = %key, size = written.size, "put_object completed");

        Ok(PutObjectOutput {
            e_tag: Some(written.etag),
            size: Some(written.size as i64),
        })
    }
}
