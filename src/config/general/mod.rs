mod log_level;

pub use log_level::LogLevel;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// General settings for the docsite generator.
///
/// Contains global settings that affect the overall behavior of the
/// generator, such as logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
pub struct GeneralConfig {
    /// Logging level for the generator.
    #[serde(default)]
    pub log_level: LogLevel,
}
