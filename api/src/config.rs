//! Listener configuration

use anyhow::{Context, Result};
use safe_config_core::EnvSource;

/// Listener configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl ServerConfig {
    /// Load from the same snapshot the settings were built from
    pub fn from_env(env: &EnvSource) -> Result<Self> {
        Ok(Self {
            host: env.string("HOST", "0.0.0.0"),
            port: env.integer("PORT", 8000).context("Invalid PORT")?,
        })
    }
}
