use serde_json::{Value, json};

/// Builds the built-in default theme document.
///
/// Returns a fresh value on every call so callers can never observe or
/// introduce shared mutable state; the effective theme is constructed once
/// at startup by layering overrides onto this document.
pub fn default_theme() -> Value {
    json!({
        "colors": {
            "muted": "#696f8c",
            "default": "#474d66",
            "dark": "#101840",
            "selected": "#3366ff",
            "tint1": "#fafbff",
            "tint2": "#f9fafc",
            "overlay": "rgba(67, 90, 111, 0.7)",
            "yellowTint": "#ffefd2",
            "greenTint": "#f5fbf8",
            "orangeTint": "#fff4e5",
            "redTint": "#fdf4f4",
            "blueTint": "#f3f6ff",
            "purpleTint": "#e7e4f9",
            "tealTint": "#d3f5f7",
            "border": {
                "default": "#e6e8f0",
                "muted": "#edeff5"
            },
            "text": {
                "success": "#317159",
                "info": "#3366ff",
                "danger": "#d14343"
            },
            "icon": {
                "default": "#696f8c",
                "muted": "#8f95b2",
                "disabled": "#c1c4d6",
                "selected": "#3366ff"
            }
        },
        "fontFamilies": {
            "display": "\"SF UI Display\", -apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, sans-serif",
            "ui": "\"SF UI Text\", -apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, sans-serif",
            "mono": "\"SF Mono\", \"Monaco\", \"Inconsolata\", \"Fira Mono\", monospace"
        },
        "fontSizes": {
            "body": "14px",
            "heading": "16px",
            "caption": "11px"
        },
        "fontWeights": {
            "light": 300,
            "normal": 400,
            "semibold": 500,
            "bold": 600
        },
        "components": {
            "Heading": {
                "sizes": {
                    "900": {
                        "fontSize": "28px",
                        "marginTop": 32,
                        "marginBottom": 8
                    },
                    "800": {
                        "fontSize": "22px",
                        "marginTop": 28,
                        "marginBottom": 8
                    },
                    "600": {
                        "fontSize": "16px",
                        "marginTop": 24,
                        "marginBottom": 4
                    }
                }
            },
            "Paragraph": {
                "baseStyle": {
                    "marginTop": 8,
                    "marginBottom": 8,
                    "lineHeight": "21px"
                }
            },
            "Code": {
                "baseStyle": {
                    "fontFamily": "mono",
                    "backgroundColor": "#f9fafc",
                    "borderRadius": 4,
                    "paddingX": 4
                }
            },
            "Link": {
                "baseStyle": {
                    "color": "#3366ff",
                    "textDecoration": "none"
                }
            },
            "Tab": {
                "appearances": {
                    "primary": {
                        "color": "#474d66",
                        "selectors": {
                            "_current": {
                                "color": "#3366ff"
                            }
                        }
                    }
                }
            }
        }
    })
}
