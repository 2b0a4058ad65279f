//! Error handling integration tests.

#[cfg(test)]
mod tests {
    use mockaws_s3_core::S3ServiceError;
    use mockaws_s3_model::S3ErrorCode;
    use mockaws_s3_model::input::{GetObjectInput, ListObjectsV2Input, PutObjectInput};

    use crate::{SEEDED_BUCKET, SEEDED_KEY, seeded_env, test_bucket_name};

    #[tokio::test]
    async fn test_should_return_no_such_bucket_on_list() {
        let env = seeded_env();

        let err = env
            .client
            .list_objects_v2(ListObjectsV2Input::new("no-bucket", 10))
            .await
            .expect_err("list of missing bucket should fail");

        assert!(err.is_no_such_bucket());
        assert_eq!(err.code(), S3ErrorCode::NoSuchBucket);
        assert_eq!(err.code().status_code(), 404);
    }

    #[tokio::test]
    async fn test_should_return_no_such_bucket_on_get() {
        let env = seeded_env();

        let err = env
            .client
            .get_object(GetObjectInput::new("no-bucket", SEEDED_KEY))
            .await
            .expect_err("get from missing bucket should fail");
        assert!(err.is_no_such_bucket());
    }

    #[tokio::test]
    async fn test_should_return_no_such_bucket_on_put() {
        let env = seeded_env();
        let bucket = test_bucket_name("ghost");

        let err = env
            .client
            .put_object(PutObjectInput::new(&bucket, "file.txt", "data"))
            .await
            .expect_err("put to missing bucket should fail");

        assert!(matches!(err, S3ServiceError::NoSuchBucket { bucket: ref b } if *b == bucket));
        assert!(!env.bucket_dir(&bucket).exists());
    }

    #[tokio::test]
    async fn test_should_return_no_such_key_on_get() {
        let env = seeded_env();

        let err = env
            .client
            .get_object(GetObjectInput::new(SEEDED_BUCKET, "no-key"))
            .await
            .expect_err("get of missing key should fail");

        assert!(err.is_no_such_key());
        assert_eq!(err.code(), S3ErrorCode::NoSuchKey);
        assert!(err.to_string().contains("no-key"));
    }

    #[tokio::test]
    async fn test_should_return_no_such_key_for_directory() {
        let env = seeded_env();
        env.seed_object(SEEDED_BUCKET, "folder/inner.txt", b"x");

        let err = env
            .client
            .get_object(GetObjectInput::new(SEEDED_BUCKET, "folder"))
            .await
            .expect_err("get of a directory should fail");
        assert!(err.is_no_such_key());
    }

    #[tokio::test]
    async fn test_should_return_internal_error_for_key_outside_bucket() {
        let env = seeded_env();

        let err = env
            .client
            .put_object(PutObjectInput::new(SEEDED_BUCKET, "../../escape", "x"))
            .await
            .expect_err("key outside the bucket should fail");

        assert_eq!(err.code(), S3ErrorCode::InternalError);
        assert!(!env.root().join("ap-south-1/escape").exists());
    }
}
