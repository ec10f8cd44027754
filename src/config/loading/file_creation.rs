use crate::{DocsiteError, Result, config::Config};
use std::{fs, path::Path};

/// Creates a default configuration file if it doesn't exist
pub fn create_default_config_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| DocsiteError::IoError {
            path: parent.to_path_buf(),
            details: format!("Failed to create config directory: {e}"),
        })?;
    }

    let rendered = toml::to_string_pretty(&Config::default()).map_err(|e| {
        DocsiteError::ConfigValidation {
            component: "default config".to_string(),
            details: format!("Failed to serialize defaults: {e}"),
        }
    })?;

    let content = format!("# docsite configuration file\n\n{rendered}");
    fs::write(path, content).map_err(|e| DocsiteError::IoError {
        path: path.to_path_buf(),
        details: format!("Failed to create config file: {e}"),
    })?;

    tracing::info!(path = %path.display(), "created default configuration file");
    Ok(())
}
