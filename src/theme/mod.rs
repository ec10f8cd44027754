//! Effective theme construction.
//!
//! A built-in default theme document is layered with an optional user
//! override file through the deep merge utility. The result is an immutable
//! [`Theme`] value that callers pass down explicitly; the default document
//! is never mutated in place and nothing here lives in process-wide state.

mod default;

#[cfg(test)]
mod tests;

pub use default::default_theme;

use std::{fs, path::Path};

use serde_json::Value;

use crate::{DocsiteError, Result, merge};

/// An effective theme: defaults with user overrides already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    tree: Value,
}

impl Theme {
    /// Builds the effective theme from the defaults alone.
    pub fn builtin() -> Self {
        Self {
            tree: default_theme(),
        }
    }

    /// Builds the effective theme by layering overrides onto the defaults.
    ///
    /// Overrides only need to carry the fields they change; sibling fields
    /// of the default document survive untouched.
    ///
    /// # Errors
    ///
    /// Returns `DocsiteError::MalformedTree` if the override document is not
    /// an object at the top level.
    pub fn effective(overrides: &Value) -> Result<Self> {
        let tree = merge::merge_values(&default_theme(), overrides)?;
        Ok(Self { tree })
    }

    /// Loads a JSON override file and builds the effective theme from it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// is not an object at the top level.
    pub fn load_overrides(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| DocsiteError::IoError {
            path: path.to_path_buf(),
            details: format!("Failed to read theme overrides: {e}"),
        })?;

        let overrides: Value =
            serde_json::from_str(&content).map_err(|e| DocsiteError::json_parse(e, Some(path)))?;

        tracing::debug!(path = %path.display(), "applying theme overrides");
        Self::effective(&overrides)
    }

    /// Looks up a value by dotted path, e.g. `colors.border.default`.
    pub fn get(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.tree, |value, segment| value.get(segment))
    }

    /// Returns the full theme document.
    pub fn as_value(&self) -> &Value {
        &self.tree
    }
}
