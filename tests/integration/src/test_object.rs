//! Object get/put integration tests.

#[cfg(test)]
mod tests {
    use std::io::Read;

    use bytes::Bytes;
    use mockaws_s3_model::input::{GetObjectInput, PutObjectInput};
    use mockaws_s3_model::request::StreamingBlob;

    use crate::{SEEDED_BUCKET, SEEDED_CONTENT, SEEDED_KEY, seeded_env};

    #[tokio::test]
    async fn test_should_get_seeded_object() -> anyhow::Result<()> {
        let env = seeded_env();

        let resp = env
            .client
            .get_object(GetObjectInput::new(SEEDED_BUCKET, SEEDED_KEY))
            .await?;

        assert_eq!(resp.content_length, Some(i64::try_from(SEEDED_CONTENT.len())?));
        assert!(resp.e_tag.is_some());
        assert!(resp.last_modified.is_some());

        let mut data = Vec::new();
        resp.body
            .expect("body should be set")
            .reader()
            .read_to_end(&mut data)?;
        assert_eq!(data, SEEDED_CONTENT);
        Ok(())
    }

    #[tokio::test]
    async fn test_should_put_and_get_object() -> anyhow::Result<()> {
        let env = seeded_env();
        let bucket = env.create_test_bucket("putget");
        let body = Bytes::from_static(b"hello, mockaws!");

        let put = env
            .client
            .put_object(PutObjectInput::new(&bucket, "greeting.txt", body.clone()))
            .await?;
        assert_eq!(put.size, Some(15));

        let got = env
            .client
            .get_object(GetObjectInput::new(&bucket, "greeting.txt"))
            .await?;
        assert_eq!(got.content_length, Some(15));
        assert_eq!(got.e_tag, put.e_tag);
        assert_eq!(got.body.map(StreamingBlob::into_bytes), Some(body));

        let on_disk = std::fs::read(env.bucket_dir(&bucket).join("greeting.txt"))?;
        assert_eq!(on_disk, b"hello, mockaws!");
        Ok(())
    }

    #[tokio::test]
    async fn test_should_overwrite_object() -> anyhow::Result<()> {
        let env = seeded_env();

        env.client
            .put_object(PutObjectInput::new(SEEDED_BUCKET, SEEDED_KEY, "v2"))
            .await?;

        let got = env
            .client
            .get_object(GetObjectInput::new(SEEDED_BUCKET, SEEDED_KEY))
            .await?;
        assert_eq!(got.body.expect("body").as_ref(), b"v2");
        Ok(())
    }

    #[tokio::test]
    async fn test_should_round_trip_nested_keys() -> anyhow::Result<()> {
        let env = seeded_env();
        let bucket = env.create_test_bucket("nested");

        env.client
            .put_object(PutObjectInput::new(&bucket, "a/b/c/deep.json", "{}"))
            .await?;

        let got = env
            .client
            .get_object(GetObjectInput::new(&bucket, "a/b/c/deep.json"))
            .await?;
        assert_eq!(got.body.expect("body").as_ref(), b"{}");
        assert!(env.bucket_dir(&bucket).join("a/b/c").is_dir());
        Ok(())
    }

    #[tokio::test]
    async fn test_should_handle_concurrent_puts_to_distinct_keys() -> anyhow::Result<()> {
        let env = seeded_env();
        let bucket = env.create_test_bucket("concurrent");

        let mut handles = Vec::new();
        for i in 0..10 {
            let client = env.client.clone();
            let bucket = bucket.clone();
            handles.push(tokio::spawn(async move {
                client
                    .put_object(PutObjectInput::new(
                        bucket,
                        format!("obj-{i:02}"),
                        format!("payload {i}"),
                    ))
                    .await
            }));
        }
        for handle in handles {
            handle.await??;
        }

        for i in 0..10 {
            let got = env
                .client
                .get_object(GetObjectInput::new(&bucket, format!("obj-{i:02}")))
                .await?;
            assert_eq!(
                got.body.expect("body").as_ref(),
                format!("payload {i}").as_bytes()
            );
        }
        Ok(())
    }
}
