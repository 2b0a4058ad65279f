//! End-to-end walk through a seeded layout.

#[cfg(test)]
mod tests {
    use mockaws_s3_model::input::{GetObjectInput, ListObjectsV2Input, PutObjectInput};

    use crate::{SEEDED_BUCKET, SEEDED_KEY, seeded_env};

    #[tokio::test]
    async fn test_should_serve_seeded_layout_end_to_end() -> anyhow::Result<()> {
        let env = seeded_env();
        let client = &env.client;

        assert!(client.bucket_exists(SEEDED_BUCKET).await);
        assert!(!client.bucket_exists("b").await);

        let listed = client
            .list_objects_v2(ListObjectsV2Input::new(SEEDED_BUCKET, 12))
            .await?;
        assert!(listed.key_count <= Some(12));
        assert_eq!(listed.key_count, Some(i32::try_from(listed.contents().len())?));

        let err = client
            .list_objects_v2(ListObjectsV2Input::new("no-bucket", 2))
            .await
            .expect_err("list of missing bucket");
        assert!(err.is_no_such_bucket());

        client
            .get_object(GetObjectInput::new(SEEDED_BUCKET, SEEDED_KEY))
            .await?;

        let err = client
            .get_object(GetObjectInput::new("no-bucket", SEEDED_KEY))
            .await
            .expect_err("get from missing bucket");
        assert!(err.is_no_such_bucket());

        let err = client
            .get_object(GetObjectInput::new(SEEDED_BUCKET, "no-key"))
            .await
            .expect_err("get of missing key");
        assert!(err.is_no_such_key());

        let put = client
            .put_object(PutObjectInput::new(SEEDED_BUCKET, "sample-01.txt", "some data"))
            .await?;
        assert_eq!(put.e_tag.as_deref(), Some("\"1e50210a0202497fb79bc38b6ade6c34\""));

        let err = client
            .put_object(PutObjectInput::new("no-bucket", SEEDED_KEY, "some data"))
            .await
            .expect_err("put to missing bucket");
        assert!(err.is_no_such_bucket());

        let listed = client
            .list_objects_v2(ListObjectsV2Input::new(SEEDED_BUCKET, 12))
            .await?;
        assert_eq!(
            listed.keys().collect::<Vec<_>>(),
            ["sample-01.txt", SEEDED_KEY]
        );
        Ok(())
    }
}
