use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Site content and theme settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SiteConfig {
    /// Title shown in the navigation shell.
    #[serde(default = "default_title")]
    pub title: String,

    /// Directory holding the markdown content tree.
    #[serde(default = "default_docs_dir")]
    pub docs_dir: PathBuf,

    /// Path to the navigation page manifest.
    #[serde(default = "default_pages_manifest")]
    pub pages_manifest: PathBuf,

    /// Optional JSON file with theme overrides layered onto the defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_overrides: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            docs_dir: default_docs_dir(),
            pages_manifest: default_pages_manifest(),
            theme_overrides: None,
        }
    }
}

fn default_title() -> String {
    "Schema Language Documentation".to_string()
}

fn default_docs_dir() -> PathBuf {
    PathBuf::from("docs")
}

fn default_pages_manifest() -> PathBuf {
    PathBuf::from("pages.json")
}
