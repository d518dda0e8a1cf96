//! Error types for the Khademni client.
//!
//! Every failure a view can observe is a [`ClientError`]: transport problems and HTTP
//! error statuses are normalized into it once, at the API client boundary, and local
//! form checks produce it directly. [`ConfigError`] is separate and only surfaces at
//! startup while the configuration is being read.

pub mod client;
pub mod config;

pub use client::{ClientError, ErrorKind};
pub use config::ConfigError;
