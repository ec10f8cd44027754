//! Unit tests for content discovery and route resolution.

#![allow(clippy::unwrap_used)]

use std::fs;

use tempfile::TempDir;

use super::ContentTree;

fn write_docs(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (relative, content) in files {
        let path = dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
    dir
}

#[test]
fn discovers_nested_markdown_routes() {
    let dir = write_docs(&[
        ("index.md", "# Welcome"),
        ("schemas/types.md", "# Types"),
        ("schemas/classes/units.md", "# Units"),
        ("schemas/notes.txt", "not markdown"),
    ]);

    let tree = ContentTree::new(dir.path());
    let routes = tree.discover().unwrap();

    assert_eq!(
        routes,
        vec![
            vec!["index".to_string()],
            vec!["schemas".to_string(), "classes".to_string(), "units".to_string()],
            vec!["schemas".to_string(), "types".to_string()],
        ]
    );
}

#[test]
fn loads_content_for_route() {
    let dir = write_docs(&[("schemas/types.md", "# Types\n\nBody text.")]);

    let tree = ContentTree::new(dir.path());
    let content = tree
        .load(&["schemas".to_string(), "types".to_string()])
        .unwrap();

    assert_eq!(content, "# Types\n\nBody text.");
}

#[test]
fn missing_route_is_an_error() {
    let dir = write_docs(&[("index.md", "# Welcome")]);

    let tree = ContentTree::new(dir.path());
    let result = tree.load(&["missing".to_string()]);

    assert!(result.is_err());
}

#[test]
fn empty_route_is_rejected() {
    let dir = write_docs(&[("index.md", "# Welcome")]);

    let tree = ContentTree::new(dir.path());

    assert!(tree.load(&[]).is_err());
}

#[test]
fn escaping_route_components_are_rejected() {
    let dir = write_docs(&[("index.md", "# Welcome")]);
    let tree = ContentTree::new(dir.path());

    assert!(tree.load(&["..".to_string(), "secret".to_string()]).is_err());
    assert!(tree.load(&["a/b".to_string()]).is_err());
    assert!(tree.load(&[String::new()]).is_err());
}

#[test]
fn discovery_of_empty_directory_is_empty() {
    let dir = TempDir::new().unwrap();

    let tree = ContentTree::new(dir.path());

    assert!(tree.discover().unwrap().is_empty());
}

#[cfg(unix)]
#[test]
fn symlink_cycle_terminates() {
    let dir = write_docs(&[("index.md", "# Welcome"), ("guides/setup.md", "# Setup")]);
    std::os::unix::fs::symlink(dir.path(), dir.path().join("guides/loop")).unwrap();

    let tree = ContentTree::new(dir.path());
    let routes = tree.discover().unwrap();

    assert_eq!(
        routes,
        vec![
            vec!["guides".to_string(), "setup".to_string()],
            vec!["index".to_string()],
        ]
    );
}

#[test]
fn bare_extension_file_is_ignored() {
    let dir = write_docs(&[(".md", "no stem")]);

    let tree = ContentTree::new(dir.path());

    assert!(tree.discover().unwrap().is_empty());
}
