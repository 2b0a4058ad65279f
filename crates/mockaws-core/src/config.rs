//! Shared client configuration for mockaws service emulators.
//!
//! [`MockAwsConfig`] is what an SDK's shared config is to a real client: it
//! carries the region and the pass-through client options, plus the root
//! directory that stands in for the remote service. All environment-driven
//! loading lives here; the emulated services themselves never read the
//! environment.

use std::path::PathBuf;

use tracing::debug;

use crate::error::{MockAwsError, MockAwsResult};
use crate::types::{AwsRegion, Credentials};

/// Default root directory of the emulated storage layout.
pub const DEFAULT_ROOT_DIR: &str = "/tmp/mockaws";

/// Shared configuration for mockaws clients.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockAwsConfig {
    /// Region the clients operate in.
    pub region: AwsRegion,
    /// Root directory holding `<region>/<service>/...`.
    pub root_dir: PathBuf,
    /// Endpoint URL override, kept for shape compatibility only.
    pub endpoint_url: Option<String>,
    /// Credentials, kept for shape compatibility only.
    #[serde(skip)]
    pub credentials: Option<Credentials>,
    /// Application id reported by clients.
    pub app_id: Option<String>,
    /// Log level filter string (e.g. `"info"`, `"debug"`).
    pub log_level: String,
}

impl Default for MockAwsConfig {
    fn default() -> Self {
        Self {
            region: AwsRegion::default(),
            root_dir: PathBuf::from(DEFAULT_ROOT_DIR),
            endpoint_url: None,
            credentials: None,
            app_id: None,
            log_level: "info".to_owned(),
        }
    }
}

impl MockAwsConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `AWS_REGION`, then `AWS_DEFAULT_REGION` | `us-east-1` |
    /// | `MOCKAWS_ROOT` | `/tmp/mockaws` |
    /// | `AWS_ENDPOINT_URL` | *(unset)* |
    /// | `AWS_ACCESS_KEY_ID` + `AWS_SECRET_ACCESS_KEY` (+ `AWS_SESSION_TOKEN`) | *(unset)* |
    /// | `AWS_SDK_UA_APP_ID` | *(unset)* |
    /// | `LOG_LEVEL` | `info` |
    ///
    /// # Examples
    ///
    /// ```
    /// use mockaws_core::MockAwsConfig;
    ///
    /// let config = MockAwsConfig::from_env();
    /// assert!(!config.log_level.is_empty());
    /// ```
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("AWS_REGION").or_else(|_| std::env::var("AWS_DEFAULT_REGION"))
        {
            config.region = AwsRegion::new(v);
        }
        if let Ok(v) = std::env::var("MOCKAWS_ROOT") {
            config.root_dir = PathBuf::from(v);
        }
        if let Ok(v) = std::env::var("AWS_ENDPOINT_URL") {
            config.endpoint_url = Some(v);
        }
        if let (Ok(access_key), Ok(secret_key)) = (
            std::env::var("AWS_ACCESS_KEY_ID"),
            std::env::var("AWS_SECRET_ACCESS_KEY"),
        ) {
            let mut creds = Credentials::new(access_key, secret_key);
            creds.session_token = std::env::var("AWS_SESSION_TOKEN").ok();
            config.credentials = Some(creds);
        }
        if let Ok(v) = std::env::var("AWS_SDK_UA_APP_ID") {
            config.app_id = Some(v);
        }
        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = v;
        }

        debug!(
            region = %config.region,
            root_dir = %config.root_dir.display(),
            has_credentials = config.credentials.is_some(),
            "loaded shared config from environment"
        );
        config
    }

    /// Load configuration from the environment and validate it.
    ///
    /// # Errors
    /// Returns [`MockAwsError::InvalidRegion`] or [`MockAwsError::Config`] if
    /// the loaded values cannot address the storage layout.
    pub fn load_from_env() -> MockAwsResult<Self> {
        let config = Self::from_env();
        config.validate()?;
        Ok(config)
    }

    /// Override the region.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<AwsRegion>) -> Self {
        self.region = region.into();
        self
    }

    /// Override the storage root directory.
    #[must_use]
    pub fn with_root_dir(mut self, root_dir: impl Into<PathBuf>) -> Self {
        self.root_dir = root_dir.into();
        self
    }

    /// Check that the region and root directory are usable.
    pub fn validate(&self) -> MockAwsResult<()> {
        self.region.validate()?;
        if self.root_dir.as_os_str().is_empty() {
            return Err(MockAwsError::Config("root directory must not be empty".to_owned()));
        }
        Ok(())
    }
}
