//! CSS custom-property emission
//!
//! Two outputs share one declaration list per source so the text blocks and
//! the live surface never disagree:
//! - token trees flatten to `<category>-<token>[-<sub>]` names
//! - theme records emit a fixed field order that downstream style pipelines
//!   depend on (colors, spacing, font family, font sizes, font weights,
//!   radii, shadows). Never sort it.

use std::fmt::Write;

use crate::theme::ThemeRecord;
use crate::tokens::{TokenMap, TokenValue};

/// Prefix for every emitted variable and class name
pub const CSS_PREFIX: &str = "tmyl";

/// A single `name: value` pair. `name` carries no leading `--`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleDeclaration {
    pub name: String,
    pub value: String,
}

impl StyleDeclaration {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Full custom property name, e.g. `--tmyl-color-primary`
    pub fn property(&self) -> String {
        format!("--{}", self.name)
    }
}

/// Flatten a token tree depth-first into dash-joined paths.
///
/// Order follows stored insertion order at every level.
pub fn flatten_tokens(tree: &TokenMap) -> Vec<StyleDeclaration> {
    fn walk(prefix: &str, map: &TokenMap, out: &mut Vec<StyleDeclaration>) {
        for (key, value) in map {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}-{key}")
            };
            match value {
                TokenValue::Map(nested) => walk(&path, nested, out),
                leaf => out.push(StyleDeclaration::new(path, leaf.to_string())),
            }
        }
    }

    let mut out = Vec::new();
    walk("", tree, &mut out);
    out
}

/// CSS class applied to the root element for a theme
pub fn theme_class(name: &str) -> String {
    format!("{CSS_PREFIX}-theme-{name}")
}

/// Declarations for a theme record, in the fixed contract order.
///
/// Record sections are flat; nested maps inside them are skipped.
pub fn theme_declarations(theme: &ThemeRecord) -> Vec<StyleDeclaration> {
    fn section(out: &mut Vec<StyleDeclaration>, prefix: &str, map: &TokenMap) {
        for (key, value) in map.iter().filter(|(_, value)| value.is_leaf()) {
            out.push(StyleDeclaration::new(
                format!("{CSS_PREFIX}-{prefix}-{key}"),
                value.to_string(),
            ));
        }
    }

    let mut out = Vec::new();
    section(&mut out, "color", &theme.colors);
    section(&mut out, "spacing", &theme.spacing);
    out.push(StyleDeclaration::new(
        format!("{CSS_PREFIX}-font-family"),
        theme.typography.font_family.to_string(),
    ));
    section(&mut out, "font-size", &theme.typography.font_size);
    section(&mut out, "font-weight", &theme.typography.font_weight);
    section(&mut out, "radius", &theme.border_radius);
    section(&mut out, "shadow", &theme.shadows);
    out
}

/// Render a declaration block under `selector`
pub fn render_block(selector: &str, declarations: &[StyleDeclaration]) -> String {
    let mut css = String::new();
    let _ = writeln!(css, "{selector} {{");
    for decl in declarations {
        let _ = writeln!(css, "  --{}: {};", decl.name, decl.value);
    }
    css.push('}');
    css
}

/// `.tmyl-theme-<name> { ... }` block for one theme
pub fn theme_css(theme: &ThemeRecord) -> String {
    render_block(
        &format!(".{}", theme_class(&theme.name)),
        &theme_declarations(theme),
    )
}

/// `:root { ... }` block with every token, prefixed
pub fn tokens_css(tree: &TokenMap) -> String {
    let declarations: Vec<StyleDeclaration> = flatten_tokens(tree)
        .into_iter()
        .map(|decl| StyleDeclaration::new(format!("{CSS_PREFIX}-{}", decl.name), decl.value))
        .collect();
    render_block(":root", &declarations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::default_theme;
    use crate::{default_tokens, token_map};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flatten_order_and_names() {
        let tree = token_map! {
            "colors" => { "primary" => "#007bff", "secondary" => "#6c757d" },
            "typography" => { "fontWeight" => { "bold" => 700 } },
        };
        let decls = flatten_tokens(&tree);
        assert_eq!(
            decls,
            vec![
                StyleDeclaration::new("colors-primary", "#007bff"),
                StyleDeclaration::new("colors-secondary", "#6c757d"),
                StyleDeclaration::new("typography-fontWeight-bold", "700"),
            ]
        );
    }

    #[test]
    fn test_theme_declarations_skip_nested_maps() {
        let mut theme = default_theme(&default_tokens());
        theme
            .colors
            .insert("brand".into(), TokenValue::Map(token_map! { "light" => "#eeeeee" }));

        let decls = theme_declarations(&theme);

        assert!(decls.iter().all(|d| !d.name.starts_with("tmyl-color-brand")));
        assert!(decls.iter().all(|d| !d.value.contains("tokens}")));
    }

    #[test]
    fn test_theme_block_format() {
        let theme = ThemeRecord::from_tree(
            "mini",
            &token_map! {
                "colors" => { "primary" => "#007bff" },
                "spacing" => { "xs" => "0.5rem" },
                "typography" => {
                    "fontFamily" => "Inter",
                    "fontSize" => { "base" => "1rem" },
                    "fontWeight" => { "bold" => 700 },
                    "lineHeight" => { "normal" => 1.5 },
                },
                "borderRadius" => { "md" => "4px" },
                "shadows" => { "sm" => "none" },
                "breakpoints" => { "md" => "768px" },
            },
        );

        let expected = "\
.tmyl-theme-mini {
  --tmyl-color-primary: #007bff;
  --tmyl-spacing-xs: 0.5rem;
  --tmyl-font-family: Inter;
  --tmyl-font-size-base: 1rem;
  --tmyl-font-weight-bold: 700;
  --tmyl-radius-md: 4px;
  --tmyl-shadow-sm: none;
}";
        assert_eq!(theme_css(&theme), expected);
    }

    #[test]
    fn test_theme_declaration_sections_are_not_sorted() {
        let theme = default_theme(&default_tokens());
        let names: Vec<String> = theme_declarations(&theme).into_iter().map(|d| d.name).collect();

        let first_of = |prefix: &str| names.iter().position(|n| n.starts_with(prefix)).unwrap();
        assert!(first_of("tmyl-color-") < first_of("tmyl-spacing-"));
        assert!(first_of("tmyl-spacing-") < first_of("tmyl-font-family"));
        assert!(first_of("tmyl-font-family") < first_of("tmyl-font-size-"));
        assert!(first_of("tmyl-font-size-") < first_of("tmyl-font-weight-"));
        assert!(first_of("tmyl-font-weight-") < first_of("tmyl-radius-"));
        assert!(first_of("tmyl-radius-") < first_of("tmyl-shadow-"));
    }

    #[test]
    fn test_tokens_css_root_block() {
        let css = tokens_css(&token_map! { "colors" => { "primary" => "#007bff" } });
        assert_eq!(css, ":root {\n  --tmyl-colors-primary: #007bff;\n}");
    }

    #[test]
    fn test_property_name() {
        assert_eq!(
            StyleDeclaration::new("tmyl-color-primary", "#fff").property(),
            "--tmyl-color-primary"
        );
    }
}
