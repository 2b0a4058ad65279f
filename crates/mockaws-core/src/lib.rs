//! Core types, shared configuration and errors for mockaws.
//!
//! This crate provides the building blocks shared by the mockaws service
//! emulators: the AWS-shaped value types ([`AwsRegion`], [`Credentials`]) and
//! [`MockAwsConfig`], the client-side configuration every emulated service
//! client is constructed from. It plays the role an SDK's shared config plays
//! for real clients: it supplies the region, the filesystem root standing in
//! for the remote service, and pass-through options the emulators keep but do
//! not interpret.

mod config;
mod error;
mod types;

pub use config::{DEFAULT_ROOT_DIR, MockAwsConfig};
pub use error::{MockAwsError, MockAwsResult};
pub use types::{AwsRegion, Credentials};
