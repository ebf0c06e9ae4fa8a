//! Parsing and validation of `xfault.toml` run configuration files.
//!
//! This crate reads the configuration for a single fault-evaluation run and
//! produces a strongly-typed [`RunConfig`].

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::RunConfig;
