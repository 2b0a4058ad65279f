//! Operation outputs.

mod list;
mod object;

pub use list::ListObjectsV2Output;
pub use object::{GetObjectOutput, PutObjectOutput};
