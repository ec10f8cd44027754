//! Unit tests for the page manifest.

#![allow(clippy::unwrap_used)]

use super::{Page, route_paths};

fn leaf(title: &str, slug: &str) -> Page {
    Page {
        title: title.to_string(),
        slug: slug.to_string(),
        children: None,
    }
}

#[test]
fn manifest_deserializes_nested_pages() {
    let json = r#"[
        {"title": "Introduction", "slug": "introduction"},
        {"title": "Schemas", "slug": "schemas", "children": [
            {"title": "Types", "slug": "types"},
            {"title": "Classes", "slug": "classes"}
        ]}
    ]"#;

    let pages: Vec<Page> = serde_json::from_str(json).unwrap();

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].title, "Introduction");
    assert!(pages[0].children.is_none());
    assert_eq!(pages[1].children.as_ref().unwrap().len(), 2);
}

#[test]
fn route_paths_visits_parents_before_children() {
    let pages = vec![
        leaf("Introduction", "introduction"),
        Page {
            title: "Schemas".to_string(),
            slug: "schemas".to_string(),
            children: Some(vec![
                leaf("Types", "types"),
                Page {
                    title: "Classes".to_string(),
                    slug: "classes".to_string(),
                    children: Some(vec![leaf("Units", "units")]),
                },
            ]),
        },
    ];

    let routes = route_paths(&pages);

    assert_eq!(
        routes,
        vec![
            vec!["introduction".to_string()],
            vec!["schemas".to_string()],
            vec!["schemas".to_string(), "types".to_string()],
            vec!["schemas".to_string(), "classes".to_string()],
            vec![
                "schemas".to_string(),
                "classes".to_string(),
                "units".to_string()
            ],
        ]
    );
}

#[test]
fn route_paths_of_empty_manifest_is_empty() {
    assert!(route_paths(&[]).is_empty());
}

#[test]
fn manifest_serializes_without_null_children() {
    let page = leaf("Introduction", "introduction");

    let json = serde_json::to_string(&page).unwrap();

    assert!(!json.contains("children"));
}
