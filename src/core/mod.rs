//! Core error types and result aliases.

use std::{
    fmt, io,
    path::{Path, PathBuf},
    result,
};

use thiserror::Error;

/// Error types for the docsite generator.
///
/// This enum represents all possible errors that can occur while loading
/// configuration, merging trees, reading the page manifest, and discovering
/// content files.
#[derive(Error, Debug)]
pub enum DocsiteError {
    /// Configuration validation error
    #[error("configuration validation failed for '{component}': {details}")]
    ConfigValidation {
        /// Component that failed validation
        component: String,
        /// Validation error details
        details: String,
    },

    /// A merge input that must be an object was something else
    #[error("cannot merge {context}: expected an object, found {found}")]
    MalformedTree {
        /// Which merge input was malformed ("target" or "source")
        context: String,
        /// Kind of value actually found (e.g. "array", "string")
        found: String,
    },

    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// Standard I/O operation error (for compatibility)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// JSON parsing error with location context
    #[error("failed to parse JSON at '{location}': {details}")]
    JsonParseError {
        /// Location of JSON being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// Configuration files import each other in a cycle
    #[error("circular import detected: {}", .chain.join(" -> "))]
    CircularImport {
        /// File names from the root configuration to the repeated file
        chain: Vec<String>,
    },

    /// Import operation error with file context
    #[error("failed to import '{path}': {details}")]
    ImportError {
        /// Path of file being imported
        path: PathBuf,
        /// Import error details
        details: String,
    },

    /// Content route could not be resolved to a markdown file
    #[error("content error for route '{route}': {details}")]
    ContentError {
        /// Route path joined with '/'
        route: String,
        /// Resolution error details
        details: String,
    },
}

/// A specialized `Result` type for docsite operations.
///
/// This type alias simplifies error handling by defaulting the error type
/// to `DocsiteError` for all docsite operations.
pub type Result<T> = result::Result<T, DocsiteError>;

impl DocsiteError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        DocsiteError::TomlParseError {
            location: Self::location_for(path),
            details: error.to_string(),
        }
    }

    /// Creates a JSON parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn json_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        DocsiteError::JsonParseError {
            location: Self::location_for(path),
            details: error.to_string(),
        }
    }

    /// Creates an import error with file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying import error
    /// * `path` - Path to the file that failed to import
    pub fn import(error: impl fmt::Display, path: &Path) -> Self {
        let clean_path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        DocsiteError::ImportError {
            path: clean_path,
            details: error.to_string(),
        }
    }

    /// Creates a content resolution error for a route path.
    ///
    /// # Arguments
    ///
    /// * `route` - Route components that failed to resolve
    /// * `details` - Description of the failure
    pub fn content(route: &[String], details: impl fmt::Display) -> Self {
        DocsiteError::ContentError {
            route: route.join("/"),
            details: details.to_string(),
        }
    }

    fn location_for(path: Option<&Path>) -> String {
        match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        }
    }
}
