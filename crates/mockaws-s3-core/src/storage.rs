//! Filesystem storage backend for S3 buckets and objects.
//!
//! [`FilesystemStorage`] owns the mapping from bucket and key names to paths
//! under `<root_dir>/<region>/s3/` and performs the `tokio::fs` work behind
//! every operation. It knows nothing about request or response shapes; the
//! handlers in [`crate::MockS3`] translate between the two.
//!
//! # Layout
//!
//! ```text
//! <root_dir>/<region>/s3/<bucket>/<key>
//! ```
//!
//! A bucket is a directory directly under the service root. An object is a
//! file under its bucket directory; keys containing `/` address nested files.

use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use bytes::Bytes;
use mockaws_core::AwsRegion;
use tokio::io::AsyncReadExt;
use tracing::{debug, trace};

use crate::checksums;
use crate::error::{S3ServiceError, S3ServiceResult};
use crate::validation::{is_valid_bucket_name, is_valid_object_key};

/// Directory name of the S3 service below a region.
pub const SERVICE_DIR: &str = "s3";

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Result of writing data to storage.
#[derive(Debug, Clone)]
pub struct WriteResult {
    /// The ETag (quoted hex MD5) of the written data.
    pub etag: String,
    /// The size in bytes.
    pub size: u64,
}

/// An object read back from storage.
#[derive(Debug, Clone)]
pub struct StoredObject {
    /// The file content.
    pub data: Bytes,
    /// File size reported by the filesystem.
    pub size: u64,
    /// File modification time.
    pub last_modified: SystemTime,
}

/// One entry directly inside a bucket directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    /// Entry name, used as the object key.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Modification time, if the platform reports one.
    pub last_modified: Option<SystemTime>,
}

/// The retained entries of a bucket listing.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    /// Entries in name order, at most the requested limit.
    pub entries: Vec<EntryInfo>,
    /// Whether more entries existed than the limit allowed.
    pub is_truncated: bool,
}

// ---------------------------------------------------------------------------
// FilesystemStorage
// ---------------------------------------------------------------------------

/// Storage rooted at `<root_dir>/<region>/s3`.
///
/// # Examples
///
/// ```
/// use bytes::Bytes;
/// use mockaws_s3_core::storage::FilesystemStorage;
///
/// # tokio_test::block_on(async {
/// let dir = tempfile::tempdir().unwrap();
/// let storage = FilesystemStorage::new(dir.path(), "ap-south-1");
/// std::fs::create_dir_all(dir.path().join("ap-south-1/s3/bucket1")).unwrap();
///
/// assert!(storage.bucket_exists("bucket1").await);
/// let written = storage
///     .write_object("bucket1", "hello.txt", Bytes::from("hello"))
///     .await
///     .unwrap();
/// assert_eq!(written.size, 5);
///
/// let stored = storage.read_object("bucket1", "hello.txt").await.unwrap();
/// assert_eq!(stored.data.as_ref(), b"hello");
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct FilesystemStorage {
    root_dir: PathBuf,
    /// `None` when the region cannot be a directory name; no bucket exists then.
    service_dir: Option<PathBuf>,
}

impl FilesystemStorage {
    /// Create a storage backend for `region` under `root_dir`.
    ///
    /// Nothing is created on disk.
    #[must_use]
    pub fn new(root_dir: impl Into<PathBuf>, region: &str) -> Self {
        let root_dir = root_dir.into();
        let service_dir = AwsRegion::new(region)
            .validate()
            .ok()
            .map(|()| root_dir.join(region).join(SERVICE_DIR));

        debug!(
            root_dir = %root_dir.display(),
            region,
            usable = service_dir.is_some(),
            "creating FilesystemStorage"
        );

        Self {
            root_dir,
            service_dir,
        }
    }

    /// The configured root directory.
    #[must_use]
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// The `<root_dir>/<region>/s3` directory, if the region is usable.
    #[must_use]
    pub fn service_dir(&self) -> Option<&Path> {
        self.service_dir.as_deref()
    }

    /// Path of the directory backing `bucket`.
    ///
    /// Returns `None` if `bucket` cannot name a directory directly under the
    /// service root.
    #[must_use]
    pub fn bucket_path(&self, bucket: &str) -> Option<PathBuf> {
        if !is_valid_bucket_name(bucket) {
            return None;
        }
        self.service_dir.as_ref().map(|dir| dir.join(bucket))
    }

    /// Path of the file backing `key` in `bucket`.
    ///
    /// Returns `None` if either name cannot address a location inside the
    /// bucket directory.
    #[must_use]
    pub fn object_path(&self, bucket: &str, key: &str) -> Option<PathBuf> {
        if !is_valid_object_key(key) {
            return None;
        }
        self.bucket_path(bucket).map(|dir| dir.join(key))
    }

    /// Whether the bucket directory can be enumerated.
    ///
    /// Any enumeration failure counts as absent: a missing directory and an
    /// unreadable one are not distinguished.
    pub async fn bucket_exists(&self, bucket: &str) -> bool {
        match self.bucket_path(bucket) {
            Some(path) => tokio::fs::read_dir(&path).await.is_ok(),
            None => false,
        }
    }

    /// List the entries directly inside the bucket directory.
    ///
    /// Entries are sorted by name and the first `limit` are kept. Entries are
    /// not filtered by type and not descended into.
    ///
    /// # Errors
    ///
    /// Returns [`S3ServiceError::Io`] if the directory or an entry's metadata
    /// cannot be read. The caller is expected to have checked that the bucket
    /// exists.
    pub async fn list_entries(&self, bucket: &str, limit: usize) -> S3ServiceResult<Listing> {
        let path = self.bucket_path(bucket).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("bucket {bucket:?} has no directory in this layout"),
            )
        })?;

        let mut dir = tokio::fs::read_dir(&path).await?;
        let mut all = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            all.push(entry);
        }
        all.sort_by_key(tokio::fs::DirEntry::file_name);

        let is_truncated = all.len() > limit;
        all.truncate(limit);

        let mut entries = Vec::with_capacity(all.len());
        for entry in all {
            let metadata = entry.metadata().await?;
            let name = entry.file_name().to_string_lossy().into_owned();
            trace!(bucket, key = %name, size = metadata.len(), "listed entry");
            entries.push(EntryInfo {
                name,
                size: metadata.len(),
                last_modified: metadata.modified().ok(),
            });
        }

        Ok(Listing {
            entries,
            is_truncated,
        })
    }

    /// Read the full content and metadata of an object.
    ///
    /// # Errors
    ///
    /// - [`S3ServiceError::NoSuchKey`] if the file cannot be opened or
    ///   stat'ed, is a directory, or the key cannot address a file.
    /// - [`S3ServiceError::Io`] if reading an opened file fails.
    pub async fn read_object(&self, bucket: &str, key: &str) -> S3ServiceResult<StoredObject> {
        let no_such_key = || S3ServiceError::NoSuchKey {
            bucket: bucket.to_owned(),
            key: key.to_owned(),
        };

        let path = self.object_path(bucket, key).ok_or_else(no_such_key)?;
        let mut file = tokio::fs::File::open(&path)
            .await
            .map_err(|_| no_such_key())?;
        let metadata = file.metadata().await.map_err(|_| no_such_key())?;
        if metadata.is_dir() {
            return Err(no_such_key());
        }
        let last_modified = metadata.modified().map_err(|_| no_such_key())?;

        let capacity = usize::try_from(metadata.len()).unwrap_or(0);
        let mut buf = Vec::with_capacity(capacity);
        file.read_to_end(&mut buf).await?;

        trace!(bucket, key, size = buf.len(), "read object data");

        Ok(StoredObject {
            data: Bytes::from(buf),
            size: metadata.len(),
            last_modified,
        })
    }

    /// Write `data` as the object `key`, creating or replacing the file.
    ///
    /// Missing intermediate directories of a nested key are created inside
    /// the bucket, one level at a time. The bucket directory itself is never
    /// created: if it is missing, the first level fails with `NotFound`.
    ///
    /// # Errors
    ///
    /// Returns [`S3ServiceError::Io`] with kind `InvalidInput` if the key
    /// cannot address a file inside the bucket, kind `NotFound` if the bucket
    /// directory is missing, or the underlying error if the write fails.
    pub async fn write_object(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
    ) -> S3ServiceResult<WriteResult> {
        let (Some(bucket_dir), true) = (self.bucket_path(bucket), is_valid_object_key(key)) else {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("object key {key:?} cannot address a file in bucket {bucket:?}"),
            )
            .into());
        };

        let key_path = Path::new(key);
        let mut dir = bucket_dir;
        if let Some(parent) = key_path.parent() {
            for component in parent.components() {
                dir.push(component);
                match tokio::fs::create_dir(&dir).await {
                    Ok(()) => trace!(bucket, dir = %dir.display(), "created key directory"),
                    Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
                    Err(e) => return Err(e.into()),
                }
            }
        }
        let path = match key_path.file_name() {
            Some(name) => dir.join(name),
            None => dir,
        };

        let etag = checksums::compute_etag(&data);
        let size = data.len() as u64;

        tokio::fs::write(&path, &data).await?;
        trace!(bucket, key, size, "stored object data");

        Ok(WriteResult { etag, size })
    }
}
