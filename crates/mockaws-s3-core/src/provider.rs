//! The filesystem-backed S3 client.
//!
//! [`MockS3`] owns the client options and the storage backend. The
//! individual operations are implemented in the [`crate::ops`] submodules as
//! inherent `async` methods on [`MockS3`].

use std::sync::Arc;

use mockaws_core::MockAwsConfig;

use crate::config::S3Options;
use crate::storage::FilesystemStorage;

/// A caller-supplied mutator applied to [`S3Options`] during construction.
pub type OptionFn = Box<dyn FnOnce(&mut S3Options) + Send>;

/// S3 client that serves requests from a local directory tree.
///
/// Fields are `Arc`-wrapped; clones share the same options and storage.
/// The client holds no mutable state, so a single instance may be used from
/// many tasks at once.
///
/// # Examples
///
/// ```
/// use mockaws_s3_core::{MockS3, S3Options};
///
/// let client = MockS3::new(S3Options::builder().region("ap-south-1".into()).build());
/// assert_eq!(client.region(), "ap-south-1");
/// ```
#[derive(Debug, Clone)]
pub struct MockS3 {
    /// Options the client was built with, after all mutators ran.
    pub(crate) options: Arc<S3Options>,
    /// Directory tree backing buckets and objects.
    pub(crate) storage: Arc<FilesystemStorage>,
}

impl MockS3 {
    /// Create a client from `options`.
    #[must_use]
    pub fn new(options: S3Options) -> Self {
        let storage = FilesystemStorage::new(options.root_dir.clone(), &options.region);
        Self {
            options: Arc::new(options),
            storage: Arc::new(storage),
        }
    }

    /// Create a client from `options` after applying each mutator in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use mockaws_s3_core::{MockS3, OptionFn, S3Options};
    ///
    /// let fns: Vec<OptionFn> = vec![
    ///     Box::new(|o: &mut S3Options| o.region = "eu-west-1".to_owned()),
    ///     Box::new(|o: &mut S3Options| o.region.push_str("-x")),
    /// ];
    /// let client = MockS3::with_options(S3Options::default(), fns);
    /// assert_eq!(client.region(), "eu-west-1-x");
    /// ```
    #[must_use]
    pub fn with_options<I, F>(mut options: S3Options, opt_fns: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: FnOnce(&mut S3Options),
    {
        for f in opt_fns {
            f(&mut options);
        }
        Self::new(options)
    }

    /// Create a client from a shared [`MockAwsConfig`], then apply mutators.
    #[must_use]
    pub fn from_config<I, F>(config: &MockAwsConfig, opt_fns: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: FnOnce(&mut S3Options),
    {
        Self::with_options(S3Options::from_config(config), opt_fns)
    }

    /// The options this client was built with.
    #[must_use]
    pub fn options(&self) -> &S3Options {
        &self.options
    }

    /// The region this client serves.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.options.region
    }

    /// The storage backend.
    #[must_use]
    pub fn storage(&self) -> &FilesystemStorage {
        &self.storage
    }
}
