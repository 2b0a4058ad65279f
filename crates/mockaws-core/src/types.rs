//! Common AWS-shaped type definitions shared across emulated services.

use std::fmt;

use crate::error::{MockAwsError, MockAwsResult};

/// AWS Region identifier.
///
/// The region is one directory level of the emulated storage layout, so a
/// usable region must be a single, non-empty path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AwsRegion(String);

impl AwsRegion {
    /// Default region used when nothing else is configured.
    pub const DEFAULT: &str = "us-east-1";

    /// Create a new region.
    #[must_use]
    pub fn new(region: impl Into<String>) -> Self {
        Self(region.into())
    }

    /// Get the region as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check that the region can be used as a directory name.
    ///
    /// # Errors
    /// Returns [`MockAwsError::InvalidRegion`] if the region is empty, is `.`
    /// or `..`, or contains a path separator.
    pub fn validate(&self) -> MockAwsResult<()> {
        let r = self.0.as_str();
        if r.is_empty() || r == "." || r == ".." || r.contains(['/', '\\']) {
            return Err(MockAwsError::InvalidRegion(self.0.clone()));
        }
        Ok(())
    }
}

impl Default for AwsRegion {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl fmt::Display for AwsRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AwsRegion {
    fn from(region: &str) -> Self {
        Self::new(region)
    }
}

impl From<String> for AwsRegion {
    fn from(region: String) -> Self {
        Self(region)
    }
}

/// Static AWS credentials.
///
/// Emulated services accept and store credentials so that client code can be
/// pointed at them unchanged, but never verify them.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// The AWS access key ID.
    pub access_key_id: String,
    /// The AWS secret access key.
    pub secret_access_key: String,
    /// Optional session token for temporary credentials.
    pub session_token: Option<String>,
}

impl Credentials {
    /// Create credentials from an access key pair.
    #[must_use]
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[REDACTED]")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
