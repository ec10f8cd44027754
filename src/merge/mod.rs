//! Deep structural merge of nested configuration trees.
//!
//! Combines a target tree and a source tree into a new tree where the
//! source wins on conflicts, except that when both sides carry an object
//! at the same key their contents are merged key-by-key instead of the
//! source replacing the target's object wholesale. Arrays are opaque
//! replacement values, the same as primitives; mergeability is decided
//! by the source side's value alone at every key.
//!
//! Both the site configuration loader (for `imports` composition) and the
//! theme layer (for default/override layering) route through this module.


use serde_json::{Map, Value};

use crate::{DocsiteError, Result};

/// A configuration tree: a mapping from string keys to JSON-like values.
pub type ConfigTree = Map<String, Value>;

/// Merges a stack of layer values under a main value, earlier layers first.
///
/// Each layer is folded into an accumulator with [`merge_values`], then the
/// main value is merged on top so it always takes precedence.
///
/// # Errors
///
/// Returns `DocsiteError::MalformedTree` if the main value or any layer is
/// not an object at the top level.
pub fn merge_layers(layers: &[Value], main: &Value) -> Result<Value> {
    let mut accumulated = Value::Object(ConfigTree::new());

    for layer in layers {
        accumulated = merge_values(&accumulated, layer)?;
    }

    merge_values(&accumulated, main)
}

/// Deep merges two top-level values, rejecting non-object inputs.
///
/// This is the checked boundary around [`merge_trees`]: the merge is only
/// defined for object-to-object inputs at the top level, and anything else
/// is a caller error reported before any recursion happens.
///
/// # Errors
///
/// Returns `DocsiteError::MalformedTree` naming the offending side when
/// either input is a primitive, array, or null.
pub fn merge_values(target: &Value, source: &Value) -> Result<Value> {
    let target_tree = target
        .as_object()
        .ok_or_else(|| DocsiteError::MalformedTree {
            context: "target".to_string(),
            found: value_kind(target).to_string(),
        })?;
    let source_tree = source
        .as_object()
        .ok_or_else(|| DocsiteError::MalformedTree {
            context: "source".to_string(),
            found: value_kind(source).to_string(),
        })?;

    Ok(Value::Object(merge_trees(target_tree, source_tree)))
}

/// Deep merges two configuration trees while preserving precedence.
///
/// Keys present only on one side are copied through unchanged. For keys
/// present on both sides, an object-valued source recurses into the target's
/// value at that key; any other source value replaces the target's value
/// outright, even when the target held an object there. A source-side object
/// over a missing or non-object target behaves as a merge into an empty tree,
/// so the result is a copy of the source subtree.
///
/// Neither input is mutated; the result is a new tree. Recursion depth
/// follows the nesting of the inputs and is not artificially bounded.
pub fn merge_trees(target: &ConfigTree, source: &ConfigTree) -> ConfigTree {
    let mut merged = ConfigTree::new();

    for (key, target_value) in target {
        if !source.contains_key(key) {
            merged.insert(key.clone(), target_value.clone());
        }
    }

    for (key, source_value) in source {
        let merged_value = match source_value {
            Value::Object(source_tree) => match target.get(key) {
                Some(Value::Object(target_tree)) => {
                    Value::Object(merge_trees(target_tree, source_tree))
                }
                Some(other) => {
                    tracing::debug!(
                        key = %key,
                        found = value_kind(other),
                        "object overrides a non-object value during merge"
                    );
                    Value::Object(source_tree.clone())
                }
                None => Value::Object(source_tree.clone()),
            },
            other => other.clone(),
        };

        merged.insert(key.clone(), merged_value);
    }

    merged
}

/// Human-readable kind name for a JSON value, used in diagnostics.
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
