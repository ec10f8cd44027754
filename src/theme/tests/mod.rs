//! Unit tests for effective theme construction.

#![allow(clippy::unwrap_used)]

use serde_json::json;

use super::{Theme, default_theme};

#[test]
fn builtin_theme_matches_defaults() {
    let theme = Theme::builtin();

    assert_eq!(theme.as_value(), &default_theme());
}

#[test]
fn overrides_replace_only_named_fields() {
    let theme = Theme::effective(&json!({
        "colors": {"muted": "#000000"}
    }))
    .unwrap();

    assert_eq!(
        theme.get("colors.muted"),
        Some(&json!("#000000"))
    );
    // Sibling fields of the default document survive.
    let defaults = default_theme();
    assert_eq!(
        theme.get("colors.border.default"),
        defaults.pointer("/colors/border/default")
    );
    assert_eq!(
        theme.get("fontSizes.body"),
        Some(&json!("14px"))
    );
}

#[test]
fn nested_component_override_merges_deeply() {
    let theme = Theme::effective(&json!({
        "components": {"Heading": {"sizes": {"900": {"marginTop": 48}}}}
    }))
    .unwrap();

    assert_eq!(
        theme.get("components.Heading.sizes.900.marginTop"),
        Some(&json!(48))
    );
    // Untouched size attrs are retained from the defaults.
    assert_eq!(
        theme.get("components.Heading.sizes.900.fontSize"),
        Some(&json!("28px"))
    );
}

#[test]
fn non_object_overrides_are_rejected() {
    assert!(Theme::effective(&json!([1, 2, 3])).is_err());
    assert!(Theme::effective(&json!("dark")).is_err());
}

#[test]
fn get_returns_none_for_unknown_path() {
    let theme = Theme::builtin();

    assert!(theme.get("colors.nonexistent").is_none());
    assert!(theme.get("not.a.path").is_none());
}
