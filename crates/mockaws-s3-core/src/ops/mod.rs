//! S3 operation handlers.
//!
//! Each submodule adds inherent `async` methods to [`crate::MockS3`]. Every
//! bucket-scoped operation checks that the bucket exists before touching any
//! object, so a missing bucket is always reported as
//! [`crate::S3ServiceError::NoSuchBucket`].

mod bucket;
mod list;
mod object;
