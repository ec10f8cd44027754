//! Navigation page manifest.
//!
//! The site's navigation shell is driven by a `pages.json` manifest: a tree
//! of titled pages, each with a URL slug and optional children. This module
//! loads the manifest and enumerates every route path it describes.

#[cfg(test)]
mod tests;

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{DocsiteError, Result};

/// One entry of the navigation manifest.
///
/// A page without children is a leaf content page; a page with children is
/// a section whose route is still addressable on its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page {
    /// Human-readable title shown in navigation.
    pub title: String,

    /// URL slug contributed to the route path.
    pub slug: String,

    /// Child pages nested under this page's route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Page>>,
}

/// Loads the navigation manifest from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid JSON
/// array of pages.
pub fn load_manifest(path: &Path) -> Result<Vec<Page>> {
    let content = fs::read_to_string(path).map_err(|e| DocsiteError::IoError {
        path: path.to_path_buf(),
        details: format!("Failed to read page manifest: {e}"),
    })?;

    serde_json::from_str(&content).map_err(|e| DocsiteError::json_parse(e, Some(path)))
}

/// Enumerates every route path in the manifest, depth-first.
///
/// A parent's route is emitted before its children's, and each child route
/// is the parent's route extended by the child's slug.
pub fn route_paths(pages: &[Page]) -> Vec<Vec<String>> {
    let mut routes = Vec::new();
    collect_routes(&[], pages, &mut routes);
    routes
}

fn collect_routes(prefix: &[String], pages: &[Page], routes: &mut Vec<Vec<String>>) {
    for page in pages {
        let mut route = prefix.to_vec();
        route.push(page.slug.clone());

        routes.push(route.clone());

        if let Some(children) = &page.children {
            collect_routes(&route, children, routes);
        }
    }
}
