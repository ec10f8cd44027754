//! docsite - Static documentation site generator for a schema-definition language.
//!
//! docsite loads markdown content files, discovers their route paths, reads a
//! navigation page manifest, and computes an effective theme by layering user
//! overrides onto built-in defaults. The main features include:
//!
//! - Deep structural merge of nested configuration trees
//! - TOML site configuration with `imports` composition
//! - Markdown content discovery with stable route enumeration
//! - Navigation manifest loading and route-path expansion
//!
//! # Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use docsite::merge;
//!
//! let defaults = json!({"colors": {"muted": "#888", "dark": "#000"}});
//! let overrides = json!({"colors": {"muted": "#444"}});
//!
//! let effective = merge::merge_values(&defaults, &overrides)?;
//! assert_eq!(effective, json!({"colors": {"muted": "#444", "dark": "#000"}}));
//! # Ok::<(), docsite::DocsiteError>(())
//! ```

/// Site configuration schema, loading, and path resolution.
pub mod config;

/// Markdown content discovery and loading.
pub mod content;

/// Core error types and result aliases.
pub mod core;

/// Deep structural merge of nested configuration trees.
pub mod merge;

/// Navigation page manifest and route enumeration.
pub mod pages;

/// Effective theme construction from defaults and overrides.
pub mod theme;

/// Tracing initialization.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{DocsiteError, Result};
