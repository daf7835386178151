#![cfg(test)]
//! The desktop binary inlines `ui/assets/theme/main.css`; a broken path or a
//! truncated file would only show up as unstyled windows at runtime.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_is_not_empty() {
    assert!(!EMBEDDED_CSS.trim().is_empty(), "embedded theme is empty");
}

#[test]
fn embedded_css_defines_palette_and_base_rules() {
    for token in ["--color-bg", "--color-green", "body {", ".button--primary"] {
        assert!(
            EMBEDDED_CSS.contains(token),
            "expected token `{token}` missing from embedded CSS"
        );
    }
}

#[test]
fn braces_are_balanced() {
    let open = EMBEDDED_CSS.matches('{').count();
    let close = EMBEDDED_CSS.matches('}').count();
    assert_eq!(open, close, "unbalanced braces in theme");
}
