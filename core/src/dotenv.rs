//! Dot-env file bootstrap
//!
//! The dot-file only fills gaps: values already present in the real process
//! environment are never overridden.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::env::EnvSource;
use crate::error::{ConfigError, Result};
use crate::settings::ProjectPaths;

/// Env var: read `<root>/.env` when set to `"true"`
pub const READ_DOT_ENV_FILE_ENV: &str = "DJANGO_READ_DOT_ENV_FILE";
/// Env var: explicit dot-file path, relative to the project root
pub const DOT_ENV_FILE_ENV: &str = "DJANGO_DOT_ENV_FILE";

const DEFAULT_DOT_ENV_FILE: &str = ".env";

/// Resolve which dot-file, if any, should be merged.
///
/// An explicit empty path counts as unset.
pub fn dot_env_path(env: &EnvSource, root_dir: &Path) -> Option<PathBuf> {
    let read = env.flag(READ_DOT_ENV_FILE_ENV, false);
    let explicit = explicit_dot_env(env);

    if !read && explicit.is_none() {
        return None;
    }

    Some(root_dir.join(explicit.unwrap_or(DEFAULT_DOT_ENV_FILE)))
}

fn explicit_dot_env(env: &EnvSource) -> Option<&str> {
    env.get(DOT_ENV_FILE_ENV).filter(|path| !path.is_empty())
}

/// Parse a dot-file into key/value pairs
pub fn read_dot_env(path: &Path) -> Result<Vec<(String, String)>> {
    let iter = dotenvy::from_path_iter(path).map_err(|e| match e {
        dotenvy::Error::Io(ref io) if io.kind() == ErrorKind::NotFound => {
            ConfigError::DotEnvNotFound(path.to_path_buf())
        }
        source => ConfigError::DotEnv {
            path: path.to_path_buf(),
            source,
        },
    })?;

    iter.map(|item| {
        item.map_err(|source| ConfigError::DotEnv {
            path: path.to_path_buf(),
            source,
        })
    })
    .collect()
}

impl EnvSource {
    /// Snapshot the process environment and merge the requested dot-file
    /// beneath it.
    ///
    /// The bootstrap variables are read from the real environment only.
    pub fn bootstrap(paths: &ProjectPaths) -> Result<Self> {
        let mut env = EnvSource::from_process();
        env.merge_dot_env(&paths.root_dir)?;
        Ok(env)
    }

    /// Merge the dot-file selected by this snapshot's bootstrap variables.
    ///
    /// A missing file is an error only when its path was given explicitly;
    /// a missing default `.env` is skipped. Returns the path that was read,
    /// if any.
    pub fn merge_dot_env(&mut self, root_dir: &Path) -> Result<Option<PathBuf>> {
        let Some(path) = dot_env_path(self, root_dir) else {
            return Ok(None);
        };
        let explicit = explicit_dot_env(self).is_some();

        let entries = match read_dot_env(&path) {
            Err(ConfigError::DotEnvNotFound(_)) if !explicit => {
                warn!("Dot-env file {} not found, skipping", path.display());
                return Ok(None);
            }
            result => result?,
        };
        let total = entries.len();
        let filled = self.fill_from(entries);
        debug!(
            "Merged dot-env file {}: {} of {} keys filled",
            path.display(),
            filled,
            total
        );

        Ok(Some(path))
    }
}
