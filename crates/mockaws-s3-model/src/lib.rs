//! S3 request and response shapes for mockaws.
//!
//! The types here mirror the field names and optionality of the S3 API
//! (`ListObjectsV2`, `GetObject`, `PutObject`) so that code written against a
//! real S3 client maps onto the emulator field for field. Only the members the
//! emulator reads or fills are modeled.

pub mod error;
pub mod input;
pub mod output;
pub mod request;
pub mod types;

pub use error::S3ErrorCode;
pub use request::StreamingBlob;
