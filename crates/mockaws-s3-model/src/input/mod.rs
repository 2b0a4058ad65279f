//! Operation inputs.

mod list;
mod object;

pub use list::ListObjectsV2Input;
pub use object::{GetObjectInput, PutObjectInput};
