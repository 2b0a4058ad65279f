//! Filesystem-backed S3 emulator for mockaws.
//!
//! [`MockS3`] answers `ListObjectsV2`, `GetObject` and `PutObject` requests
//! from a local directory tree instead of the network, so code written against
//! an S3 client can be exercised in tests. Buckets are directories and objects
//! are files:
//!
//! ```text
//! <root_dir>/<region>/s3/<bucket>/<key>
//! ```
//!
//! # Architecture
//!
//! ```text
//! MockS3 (list_objects_v2, get_object, put_object, bucket_exists)
//!        |
//!        v
//! FilesystemStorage (layout + tokio::fs I/O)
//!        |
//!        v
//! <root_dir>/<region>/s3/...
//! ```
//!
//! Buckets are never created or deleted by the emulator; seed them on disk
//! before running the code under test.

pub mod checksums;
pub mod config;
pub mod error;
mod ops;
pub mod provider;
pub mod storage;
pub mod validation;

pub use config::S3Options;
pub use error::{S3ServiceError, S3ServiceResult};
pub use provider::{MockS3, OptionFn};
