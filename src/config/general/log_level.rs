use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Logging level for the generator.
///
/// Controls the verbosity of log output during configuration loading,
/// content discovery, and theme construction.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only critical errors that stop the generator.
    Error,

    /// Warnings and errors.
    Warn,

    /// Informational messages, warnings, and errors (default level).
    #[default]
    Info,

    /// Debug information useful for troubleshooting merges and discovery.
    Debug,

    /// Very verbose trace output.
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}
