//! Request and response payloads.

use bytes::{Buf, Bytes};

/// A wrapper around `bytes::Bytes` for blob payloads.
///
/// Bodies are held fully in memory; [`StreamingBlob::reader`] gives the
/// `std::io::Read` view callers of a streaming API expect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamingBlob {
    /// The underlying bytes data.
    pub data: Bytes,
}

impl StreamingBlob {
    /// Create a new `StreamingBlob` from bytes.
    #[must_use]
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }

    /// Returns true if the blob is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the length of the blob.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Consume the blob, returning the underlying bytes.
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.data
    }

    /// Consume the blob into a reader over its bytes.
    #[must_use]
    pub fn reader(self) -> bytes::buf::Reader<Bytes> {
        self.data.reader()
    }
}

impl AsRef<[u8]> for StreamingBlob {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<Bytes> for StreamingBlob {
    fn from(data: Bytes) -> Self {
        Self { data }
    }
}

impl From<Vec<u8>> for StreamingBlob {
    fn from(data: Vec<u8>) -> Self {
        Self { data: data.into() }
    }
}

impl From<&[u8]> for StreamingBlob {
    fn from(data: &[u8]) -> Self {
        Self {
            data: Bytes::copy_from_slice(data),
        }
    }
}

impl From<String> for StreamingBlob {
    fn from(data: String) -> Self {
        Self { data: data.into() }
    }
}

impl From<&str> for StreamingBlob {
    fn from(data: &str) -> Self {
        Self::from(data.as_bytes())
    }
}
