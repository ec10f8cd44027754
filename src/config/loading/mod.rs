mod file_creation;
mod import_chain;

use super::Config;
use crate::{DocsiteError, Result, merge};
use file_creation::create_default_config_file;
use import_chain::ImportChain;
use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};

impl Config {
    /// Loads a configuration file with support for importing other TOML files
    ///
    /// Import paths are specified in an `imports` array using the `@` prefix.
    /// Imported configurations are deep-merged under the main configuration,
    /// with the main configuration taking precedence in case of conflicts.
    /// Also checks for circular imports.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the main configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file cannot be read
    /// - The TOML content is invalid
    /// - Any imported files cannot be loaded
    /// - The merged configuration is invalid
    /// - Circular imports are detected
    pub fn load_with_imports(path: &Path) -> Result<Config> {
        if !path.exists() {
            create_default_config_file(path)?;
        }

        let canonical_path = path.canonicalize().map_err(|e| DocsiteError::IoError {
            path: path.to_path_buf(),
            details: format!("Failed to resolve path: {e}"),
        })?;

        let mut chain = ImportChain::new();
        Self::load_config_with_tracking(&canonical_path, &mut chain)
    }

    /// Recursively collects all configuration files involved in imports.
    ///
    /// Starting from the given path, this method finds all imported files
    /// including transitive imports. Each file is listed only once even
    /// if imported multiple times.
    ///
    /// # Arguments
    /// * `path` - The root configuration file to start from
    ///
    /// # Returns
    /// A vector of all configuration file paths including the root file
    ///
    /// # Errors
    /// Returns error if any file cannot be read or contains invalid TOML
    pub fn get_all_config_files(path: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut visited = std::collections::HashSet::new();

        Self::collect_config_files(path, &mut files, &mut visited)?;
        Ok(files)
    }

    fn load_config_with_tracking(path: &Path, chain: &mut ImportChain) -> Result<Config> {
        chain.enter(path)?;

        let result = Self::load_main_config(path, chain);
        chain.leave();
        result
    }

    fn load_main_config(path: &Path, chain: &mut ImportChain) -> Result<Config> {
        let main_config_content = fs::read_to_string(path)?;
        let import_paths = Self::extract_import_paths(&main_config_content)?;
        let imported_configs = Self::load_all_imports(path, &import_paths, chain)?;

        let main_config: Value = toml::from_str(&main_config_content)
            .map_err(|e| DocsiteError::toml_parse(e, Some(path)))?;

        let merged_config = merge::merge_layers(&imported_configs, &main_config)?;
        serde_json::from_value(merged_config).map_err(|e| DocsiteError::ConfigValidation {
            component: "config parsing".to_string(),
            details: format!("Configuration validation failed: {e}"),
        })
    }

    fn load_all_imports(
        base_path: &Path,
        import_paths: &[String],
        chain: &mut ImportChain,
    ) -> Result<Vec<Value>> {
        import_paths
            .iter()
            .map(|import_path| {
                let resolved_path = Self::resolve_import_path(base_path, import_path)?;
                let canonical_import = resolved_path
                    .canonicalize()
                    .map_err(|e| DocsiteError::import(e, &resolved_path))?;

                Self::load_imported_file_with_tracking(&canonical_import, chain)
            })
            .collect()
    }

    fn load_imported_file_with_tracking(path: &Path, chain: &mut ImportChain) -> Result<Value> {
        chain.enter(path)?;

        let result = Self::load_toml_file_with_imports(path, chain);
        chain.leave();
        result
    }

    fn load_toml_file_with_imports(path: &Path, chain: &mut ImportChain) -> Result<Value> {
        let content = fs::read_to_string(path).map_err(|e| DocsiteError::import(e, path))?;
        let import_paths = Self::extract_import_paths(&content)?;
        let imported_configs = Self::load_all_imports(path, &import_paths, chain)?;

        let main_value: Value =
            toml::from_str(&content).map_err(|e| DocsiteError::toml_parse(e, Some(path)))?;

        merge::merge_layers(&imported_configs, &main_value)
    }

    fn extract_import_paths(config_content: &str) -> Result<Vec<String>> {
        let value: Value =
            toml::from_str(config_content).map_err(|e| DocsiteError::toml_parse(e, None))?;

        let import_paths = if let Some(Value::Array(imports)) = value.get("imports") {
            imports
                .iter()
                .filter_map(Value::as_str)
                .filter(|s| s.starts_with('@'))
                .map(|s| s.strip_prefix('@').unwrap_or(s).to_owned())
                .collect::<Vec<String>>()
        } else {
            Vec::new()
        };

        Ok(import_paths)
    }

    fn resolve_import_path(base_path: &Path, import_path: &str) -> Result<PathBuf> {
        let parent_dir = base_path.parent().ok_or_else(|| DocsiteError::ImportError {
            path: base_path.to_path_buf(),
            details: "Invalid base path - no parent directory".to_string(),
        })?;

        let mut import_path_buf = PathBuf::from(import_path);
        if import_path_buf.extension().is_none() {
            import_path_buf.set_extension("toml");
        }

        let resolved_path = parent_dir.join(import_path_buf);
        Ok(resolved_path)
    }

    fn collect_config_files(
        path: &Path,
        files: &mut Vec<PathBuf>,
        visited: &mut std::collections::HashSet<PathBuf>,
    ) -> Result<()> {
        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        if visited.contains(&canonical) {
            return Ok(());
        }

        visited.insert(canonical.clone());
        files.push(canonical.clone());

        if path.exists() {
            let content = fs::read_to_string(path)?;
            let import_paths = Self::extract_import_paths(&content)?;

            for import_path in import_paths {
                let resolved = Self::resolve_import_path(path, &import_path)?;
                Self::collect_config_files(&resolved, files, visited)?;
            }
        }

        Ok(())
    }
}
