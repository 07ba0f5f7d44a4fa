//! Environment snapshot and typed accessors
//!
//! The loader never reads `std::env` directly. It works on an [`EnvSource`]
//! captured once at startup, so loading stays a pure function of that
//! snapshot and tests can supply their own variables.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use tracing::debug;

use crate::error::{ConfigError, Result};

/// Snapshot of environment variables
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    vars: BTreeMap<String, String>,
}

impl EnvSource {
    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_process() -> Self {
        let mut skipped = 0usize;
        let vars = std::env::vars_os()
            .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => Some((key, value)),
                _ => {
                    skipped += 1;
                    None
                }
            })
            .collect();

        if skipped > 0 {
            debug!("Skipped {} non UTF-8 environment variables", skipped);
        }

        Self { vars }
    }

    /// Add entries for keys that are not already present.
    ///
    /// Existing values always win. Returns how many keys were filled.
    pub fn fill_from<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut filled = 0;
        for (key, value) in entries {
            if let std::collections::btree_map::Entry::Vacant(slot) = self.vars.entry(key) {
                slot.insert(value);
                filled += 1;
            }
        }
        filled
    }

    /// Raw value lookup
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// String value, or `default` when the variable is absent
    pub fn string(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_string()
    }

    pub fn optional(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }

    /// String value that has no default. An empty value counts as present.
    pub fn required(&self, key: &str) -> Result<String> {
        self.optional(key)
            .ok_or_else(|| ConfigError::MissingRequired(key.to_string()))
    }

    /// Boolean value. Only the exact string `"true"` is true.
    pub fn flag(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(value) => value == "true",
            None => default,
        }
    }

    /// Base-10 integer value, or `default` when the variable is absent.
    ///
    /// Surrounding whitespace is ignored; anything else that does not parse
    /// is an error.
    pub fn integer<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.get(key) {
            Some(raw) => raw.trim().parse::<T>().map_err(|e| {
                ConfigError::invalid(key, format!("expected an integer, got {:?} ({})", raw, e))
            }),
            None => Ok(default),
        }
    }

    /// Comma-separated list, falling back to `default` when absent
    pub fn list(&self, key: &str, default: &str) -> Vec<String> {
        split_list(self.get(key).unwrap_or(default))
    }

    /// Comma-separated list, or `None` when the variable is absent or empty
    pub fn non_empty_list(&self, key: &str) -> Option<Vec<String>> {
        self.get(key)
            .filter(|raw| !raw.is_empty())
            .map(split_list)
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSource
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Split on `,` and trim whitespace around every element.
///
/// Empty elements are kept, so `""` yields `[""]`.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|item| item.trim().to_string()).collect()
}
