//! Markdown content discovery and loading.
//!
//! Content lives as `*.md` files under a docs root. Every markdown file
//! maps to a route path made of its directory components plus its file
//! stem; discovery walks the tree recursively and enumerates those routes
//! so the static shell knows every page it has to produce.

#[cfg(test)]
mod tests;

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use crate::{DocsiteError, Result};

const MARKDOWN_EXTENSION: &str = "md";

/// A docs directory holding the site's markdown content.
#[derive(Debug, Clone)]
pub struct ContentTree {
    root: PathBuf,
}

impl ContentTree {
    /// Creates a content tree rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the docs root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Discovers every markdown file under the root and returns its route.
    ///
    /// Routes are emitted depth-first; entries within a directory are
    /// visited in name order so the output is stable across platforms.
    ///
    /// # Errors
    ///
    /// Returns an error if the root or any subdirectory cannot be read.
    pub fn discover(&self) -> Result<Vec<Vec<String>>> {
        let mut routes = Vec::new();
        let mut visited = HashSet::new();
        self.walk(&self.root, &[], &mut routes, &mut visited)?;

        tracing::debug!(
            root = %self.root.display(),
            count = routes.len(),
            "discovered markdown content"
        );
        Ok(routes)
    }

    /// Reads the markdown content for a route path.
    ///
    /// The route `["schemas", "types"]` resolves to
    /// `<root>/schemas/types.md`.
    ///
    /// # Errors
    ///
    /// Returns an error if the route is empty, contains a component that
    /// would escape the docs root, or the resolved file cannot be read.
    pub fn load(&self, route: &[String]) -> Result<String> {
        let file = self.resolve(route)?;

        fs::read_to_string(&file).map_err(|e| {
            DocsiteError::content(route, format!("cannot read '{}': {e}", file.display()))
        })
    }

    /// Resolves a route path to its markdown file without reading it.
    ///
    /// # Errors
    ///
    /// Returns an error if the route is empty or a component is not a
    /// plain file name.
    pub fn resolve(&self, route: &[String]) -> Result<PathBuf> {
        let (name, dirs) = route
            .split_last()
            .ok_or_else(|| DocsiteError::content(route, "route path is empty"))?;

        let mut file = self.root.clone();
        for component in dirs {
            file.push(checked_component(route, component)?);
        }

        let mut file_name = checked_component(route, name)?.to_string();
        file_name.push('.');
        file_name.push_str(MARKDOWN_EXTENSION);
        file.push(file_name);

        Ok(file)
    }

    fn walk(
        &self,
        dir: &Path,
        prefix: &[String],
        routes: &mut Vec<Vec<String>>,
        visited: &mut HashSet<PathBuf>,
    ) -> Result<()> {
        // Symlinked directories can form cycles; revisits are skipped.
        let canonical = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
        if !visited.insert(canonical) {
            tracing::debug!(dir = %dir.display(), "skipping already-visited directory");
            return Ok(());
        }

        let mut entries: Vec<_> = fs::read_dir(dir)
            .map_err(|e| DocsiteError::IoError {
                path: dir.to_path_buf(),
                details: format!("Failed to read content directory: {e}"),
            })?
            .collect::<std::io::Result<_>>()?;
        entries.sort_by_key(std::fs::DirEntry::file_name);

        for entry in entries {
            let path = entry.path();
            let file_type = entry.file_type()?;
            let name = entry.file_name().to_string_lossy().to_string();

            if file_type.is_dir() || (file_type.is_symlink() && path.is_dir()) {
                let mut child_prefix = prefix.to_vec();
                child_prefix.push(name);
                self.walk(&path, &child_prefix, routes, visited)?;
            } else if let Some(stem) = markdown_stem(&name) {
                let mut route = prefix.to_vec();
                route.push(stem.to_string());
                routes.push(route);
            }
        }

        Ok(())
    }
}

/// Returns the file stem when the name carries the markdown extension.
fn markdown_stem(name: &str) -> Option<&str> {
    let stem = name.strip_suffix(".md")?;
    if stem.is_empty() { None } else { Some(stem) }
}

/// Validates that a route component stays inside the docs root.
fn checked_component<'a>(route: &[String], component: &'a str) -> Result<&'a str> {
    if component.is_empty()
        || component == "."
        || component == ".."
        || component.contains('/')
        || component.contains('\\')
    {
        return Err(DocsiteError::content(
            route,
            format!("invalid route component '{component}'"),
        ));
    }
    Ok(component)
}
