//! Integration tests for the mockaws S3 emulator.
//!
//! Each test builds its own storage root in a temporary directory, seeds it
//! the way a developer would before running code under test, and drives the
//! emulator only through the public client API.
//!
//! Run them with:
//! ```text
//! cargo test -p mockaws-integration
//! ```

use std::path::{Path, PathBuf};
use std::sync::Once;

use mockaws_s3_core::{MockS3, S3Options};
use tempfile::TempDir;

static INIT: Once = Once::new();

/// Region used by the seeded layout.
pub const TEST_REGION: &str = "ap-south-1";

/// Bucket present in the seeded layout.
pub const SEEDED_BUCKET: &str = "bucket1";

/// Object present in [`SEEDED_BUCKET`].
pub const SEEDED_KEY: &str = "sample.txt";

/// Content of [`SEEDED_KEY`].
pub const SEEDED_CONTENT: &[u8] = b"This is a sample file stored in bucket1.\n";

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// A temporary storage root and a client reading from it.
///
/// The directory is removed when the value is dropped.
#[derive(Debug)]
pub struct TestEnv {
    dir: TempDir,
    /// Client for [`TEST_REGION`] rooted at the temporary directory.
    pub client: MockS3,
}

impl TestEnv {
    /// The storage root.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Directory of `bucket` in [`TEST_REGION`].
    #[must_use]
    pub fn bucket_dir(&self, bucket: &str) -> PathBuf {
        self.root().join(TEST_REGION).join("s3").join(bucket)
    }

    /// Create an empty bucket directory with a unique name and return the name.
    #[must_use]
    pub fn create_test_bucket(&self, prefix: &str) -> String {
        let name = test_bucket_name(prefix);
        std::fs::create_dir_all(self.bucket_dir(&name))
            .unwrap_or_else(|e| panic!("failed to create bucket {name}: {e}"));
        name
    }

    /// Write `content` as `key` in `bucket` directly on disk.
    pub fn seed_object(&self, bucket: &str, key: &str, content: &[u8]) {
        let path = self.bucket_dir(bucket).join(key);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("failed to create {}: {e}", parent.display()));
        }
        std::fs::write(&path, content)
            .unwrap_or_else(|e| panic!("failed to seed {}: {e}", path.display()));
    }
}

/// Create a storage root holding [`SEEDED_BUCKET`] with [`SEEDED_KEY`].
#[must_use]
pub fn seeded_env() -> TestEnv {
    init_tracing();

    let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("failed to create temp dir: {e}"));
    let client = MockS3::new(
        S3Options::builder()
            .region(TEST_REGION.to_owned())
            .root_dir(dir.path().to_path_buf())
            .build(),
    );
    let env = TestEnv { dir, client };
    env.seed_object(SEEDED_BUCKET, SEEDED_KEY, SEEDED_CONTENT);
    env
}

/// Generate a unique bucket name for a test.
#[must_use]
pub fn test_bucket_name(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string()[..8].to_owned();
    format!("test-{prefix}-{id}")
}

mod test_error;
mod test_object;
mod test_scenario;
