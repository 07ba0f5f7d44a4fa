//! Safe Config Service Core Library
//!
//! Settings loader for the config service: turns environment variables, and
//! optionally a dot-env file, into an immutable configuration record.

pub mod dotenv;
pub mod env;
pub mod error;
pub mod framework;
pub mod hosts;
pub mod logging;
pub mod settings;

pub use env::EnvSource;
pub use error::{ConfigError, Result};
pub use settings::{ProjectPaths, Settings};
