//! S3 client options.
//!
//! Provides [`S3Options`], the options bundle a [`crate::MockS3`] is built
//! from. Only `region` and `root_dir` drive behavior; the remaining fields are
//! accepted and stored so that callers can hand over the same options they
//! would give a real S3 client.

use std::path::PathBuf;

use mockaws_core::{Credentials, DEFAULT_ROOT_DIR, MockAwsConfig};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// S3 client options.
///
/// # Examples
///
/// ```
/// use mockaws_s3_core::config::S3Options;
///
/// let options = S3Options::builder().region("ap-south-1".into()).build();
/// assert_eq!(options.region, "ap-south-1");
/// assert_eq!(options.root_dir.to_str(), Some("/tmp/mockaws"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct S3Options {
    /// Region whose directory the client reads and writes.
    #[builder(default = String::from("us-east-1"))]
    pub region: String,

    /// Root of the emulated storage layout.
    #[builder(default = PathBuf::from(DEFAULT_ROOT_DIR))]
    pub root_dir: PathBuf,

    /// Endpoint URL override. Not interpreted.
    #[builder(default)]
    pub endpoint_url: Option<String>,

    /// Request credentials. Not interpreted and never serialized.
    #[serde(skip)]
    #[builder(default)]
    pub credentials: Option<Credentials>,

    /// Application id. Not interpreted.
    #[builder(default)]
    pub app_id: Option<String>,

    /// SDK defaults mode (e.g. `"standard"`). Not interpreted.
    #[builder(default)]
    pub defaults_mode: Option<String>,

    /// Retry attempts. Not interpreted; every operation is single-shot.
    #[builder(default)]
    pub retry_max_attempts: Option<u32>,

    /// Path-style addressing flag. Not interpreted.
    #[builder(default = false)]
    pub force_path_style: bool,
}

impl Default for S3Options {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl S3Options {
    /// Build options from a shared [`MockAwsConfig`].
    ///
    /// Copies the region, root directory and pass-through fields; S3-only
    /// fields keep their defaults.
    #[must_use]
    pub fn from_config(config: &MockAwsConfig) -> Self {
        Self {
            region: config.region.as_str().to_owned(),
            root_dir: config.root_dir.clone(),
            endpoint_url: config.endpoint_url.clone(),
            credentials: config.credentials.clone(),
            app_id: config.app_id.clone(),
            ..Self::default()
        }
    }

    /// Load options from environment variables.
    ///
    /// Starts from [`MockAwsConfig::from_env`] and then reads the S3-specific
    /// variables:
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `AWS_DEFAULTS_MODE` | *(unset)* |
    /// | `AWS_MAX_ATTEMPTS` | *(unset)* |
    /// | `S3_FORCE_PATH_STYLE` | `false` |
    #[must_use]
    pub fn from_env() -> Self {
        let mut options = Self::from_config(&MockAwsConfig::from_env());

        if let Ok(v) = std::env::var("AWS_DEFAULTS_MODE") {
            options.defaults_mode = Some(v);
        }
        if let Ok(v) = std::env::var("AWS_MAX_ATTEMPTS") {
            if let Ok(n) = v.parse::<u32>() {
                options.retry_max_attempts = Some(n);
            }
        }
        if let Ok(v) = std::env::var("S3_FORCE_PATH_STYLE") {
            options.force_path_style = parse_bool(&v);
        }

        options
    }
}

/// Parse a string as a boolean, accepting `"1"` and `"true"` (case-insensitive).
fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
