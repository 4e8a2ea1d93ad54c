//! Built-in themes
//!
//! The default theme is projected out of the token tree through a fixed
//! field-to-path table. Every other built-in is an override tree applied to
//! the default with the same merge `create_theme` uses.

mod presets;

pub use presets::{dark_overrides, professional_overrides, trading_overrides};

use crate::theme::{ThemeRecord, Typography};
use crate::tokens::{TokenMap, TokenValue};

/// Name of the fallback theme
pub const DEFAULT_THEME: &str = "default";

/// Built-in theme names in registration order
pub const BUILTIN_THEMES: [&str; 5] = [DEFAULT_THEME, "light", "dark", "professional", "trading"];

/// (record key, token path) pairs
type Projection = &'static [(&'static str, &'static [&'static str])];

const COLORS: Projection = &[
    ("primary", &["colors", "primary"]),
    ("secondary", &["colors", "secondary"]),
    ("success", &["colors", "success"]),
    ("warning", &["colors", "warning"]),
    ("error", &["colors", "danger"]),
    ("info", &["colors", "info"]),
    ("background", &["colors", "background"]),
    ("surface", &["colors", "surface"]),
    ("text", &["colors", "text"]),
    ("textSecondary", &["colors", "textSecondary"]),
    ("border", &["colors", "border"]),
];

const SPACING: Projection = &[
    ("xs", &["spacing", "2"]),
    ("sm", &["spacing", "4"]),
    ("md", &["spacing", "6"]),
    ("lg", &["spacing", "8"]),
    ("xl", &["spacing", "12"]),
];

const FONT_FAMILY: &[&str] = &["typography", "fontFamily", "sans"];

const FONT_SIZE: Projection = &[
    ("xs", &["typography", "fontSize", "xs"]),
    ("sm", &["typography", "fontSize", "sm"]),
    ("base", &["typography", "fontSize", "base"]),
    ("lg", &["typography", "fontSize", "lg"]),
    ("xl", &["typography", "fontSize", "xl"]),
    ("2xl", &["typography", "fontSize", "2xl"]),
];

const FONT_WEIGHT: Projection = &[
    ("normal", &["typography", "fontWeight", "normal"]),
    ("medium", &["typography", "fontWeight", "medium"]),
    ("semibold", &["typography", "fontWeight", "semibold"]),
    ("bold", &["typography", "fontWeight", "bold"]),
];

const LINE_HEIGHT: Projection = &[
    ("tight", &["typography", "lineHeight", "tight"]),
    ("normal", &["typography", "lineHeight", "normal"]),
    ("relaxed", &["typography", "lineHeight", "relaxed"]),
];

const BORDER_RADIUS: Projection = &[
    ("none", &["borders", "radius", "none"]),
    ("sm", &["borders", "radius", "sm"]),
    ("md", &["borders", "radius", "md"]),
    ("lg", &["borders", "radius", "lg"]),
    ("full", &["borders", "radius", "full"]),
];

const SHADOWS: Projection = &[
    ("sm", &["shadows", "sm"]),
    ("md", &["shadows", "md"]),
    ("lg", &["shadows", "lg"]),
];

const BREAKPOINTS: Projection = &[
    ("sm", &["breakpoints", "sm"]),
    ("md", &["breakpoints", "md"]),
    ("lg", &["breakpoints", "lg"]),
    ("xl", &["breakpoints", "xl"]),
];

/// Look up a value by path segments
pub fn lookup<'a>(tree: &'a TokenMap, path: &[&str]) -> Option<&'a TokenValue> {
    let (first, rest) = path.split_first()?;
    let mut node = tree.get(*first)?;
    for segment in rest {
        node = node.as_map()?.get(*segment)?;
    }
    Some(node)
}

fn project(tree: &TokenMap, table: Projection) -> TokenMap {
    table
        .iter()
        .filter_map(|(key, path)| lookup(tree, path).map(|v| (key.to_string(), v.clone())))
        .collect()
}

/// Project the default theme out of a token tree
pub fn default_theme(tokens: &TokenMap) -> ThemeRecord {
    ThemeRecord {
        name: DEFAULT_THEME.to_string(),
        colors: project(tokens, COLORS),
        spacing: project(tokens, SPACING),
        typography: Typography {
            font_family: lookup(tokens, FONT_FAMILY)
                .cloned()
                .unwrap_or_else(|| TokenValue::Text(String::new())),
            font_size: project(tokens, FONT_SIZE),
            font_weight: project(tokens, FONT_WEIGHT),
            line_height: project(tokens, LINE_HEIGHT),
        },
        border_radius: project(tokens, BORDER_RADIUS),
        shadows: project(tokens, SHADOWS),
        breakpoints: project(tokens, BREAKPOINTS),
    }
}

/// All built-in themes, in registration order
pub fn builtin_themes(tokens: &TokenMap) -> Vec<ThemeRecord> {
    let default = default_theme(tokens);

    let mut light = default.clone();
    light.name = "light".to_string();

    let dark = default.derive("dark", &dark_overrides());
    let professional = default.derive("professional", &professional_overrides());
    let trading = default.derive("trading", &trading_overrides());

    vec![default, light, dark, professional, trading]
}
