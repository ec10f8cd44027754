//! Site configuration schema and loading.
//!
//! Defines the configuration structure for the docsite generator: general
//! settings plus the site section pointing at the docs directory, the page
//! manifest, and optional theme overrides. Configurations are TOML files
//! and may compose other files through `imports`.

mod general;
mod loading;
mod paths;
mod site;

#[cfg(test)]
mod tests;

pub use general::{GeneralConfig, LogLevel};
pub use paths::ConfigPaths;
pub use site::SiteConfig;

use serde::{Deserialize, Serialize};

/// Main configuration structure for the docsite generator.
///
/// Represents the complete configuration schema that can be loaded
/// from TOML files. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Site content and theme settings.
    #[serde(default)]
    pub site: SiteConfig,
}
