//! Theme records

use serde::{Deserialize, Serialize};

use crate::merge::merge_into;
use crate::tokens::{TokenMap, TokenValue};

/// Typography section of a theme
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: TokenValue,
    pub font_size: TokenMap,
    pub font_weight: TokenMap,
    pub line_height: TokenMap,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: TokenValue::Text(String::new()),
            font_size: TokenMap::new(),
            font_weight: TokenMap::new(),
            line_height: TokenMap::new(),
        }
    }
}

/// A named, self-contained set of concrete design values
///
/// Records are flattened snapshots, not override trees. They are always
/// owned by value, so two registry entries never share state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeRecord {
    pub name: String,
    pub colors: TokenMap,
    pub spacing: TokenMap,
    pub typography: Typography,
    pub border_radius: TokenMap,
    pub shadows: TokenMap,
    pub breakpoints: TokenMap,
}

impl ThemeRecord {
    /// Color value by key, rendered as a string
    pub fn color(&self, key: &str) -> Option<String> {
        self.colors.get(key).map(ToString::to_string)
    }

    /// View the record as a token tree, the shape theme overrides are written in.
    pub fn to_tree(&self) -> TokenMap {
        let mut typography = TokenMap::new();
        typography.insert("fontFamily".into(), self.typography.font_family.clone());
        typography.insert(
            "fontSize".into(),
            TokenValue::Map(self.typography.font_size.clone()),
        );
        typography.insert(
            "fontWeight".into(),
            TokenValue::Map(self.typography.font_weight.clone()),
        );
        typography.insert(
            "lineHeight".into(),
            TokenValue::Map(self.typography.line_height.clone()),
        );

        let mut tree = TokenMap::new();
        tree.insert("colors".into(), TokenValue::Map(self.colors.clone()));
        tree.insert("spacing".into(), TokenValue::Map(self.spacing.clone()));
        tree.insert("typography".into(), TokenValue::Map(typography));
        tree.insert(
            "borderRadius".into(),
            TokenValue::Map(self.border_radius.clone()),
        );
        tree.insert("shadows".into(), TokenValue::Map(self.shadows.clone()));
        tree.insert(
            "breakpoints".into(),
            TokenValue::Map(self.breakpoints.clone()),
        );
        tree
    }

    /// Rebuild a record from a token tree.
    ///
    /// Sections that are missing, or were overwritten with something other
    /// than a map, come back empty. `fontFamily` must be a leaf; a nested map
    /// there comes back as an empty string. The `name` argument always wins
    /// over any `name` key in the tree.
    pub fn from_tree(name: impl Into<String>, tree: &TokenMap) -> Self {
        let section = |key: &str| -> TokenMap {
            tree.get(key)
                .and_then(TokenValue::as_map)
                .cloned()
                .unwrap_or_default()
        };

        let typography_tree = section("typography");
        let sub = |key: &str| -> TokenMap {
            typography_tree
                .get(key)
                .and_then(TokenValue::as_map)
                .cloned()
                .unwrap_or_default()
        };

        let typography = Typography {
            font_family: typography_tree
                .get("fontFamily")
                .filter(|value| value.is_leaf())
                .cloned()
                .unwrap_or_else(|| TokenValue::Text(String::new())),
            font_size: sub("fontSize"),
            font_weight: sub("fontWeight"),
            line_height: sub("lineHeight"),
        };

        Self {
            name: name.into(),
            colors: section("colors"),
            spacing: section("spacing"),
            typography,
            border_radius: section("borderRadius"),
            shadows: section("shadows"),
            breakpoints: section("breakpoints"),
        }
    }

    /// Derive a new record: `overrides` deep-merged onto a copy of `self`.
    ///
    /// A map written over `typography.fontFamily` is ignored and the base
    /// font family kept.
    pub fn derive(&self, name: impl Into<String>, overrides: &TokenMap) -> Self {
        let mut tree = self.to_tree();
        merge_into(&mut tree, overrides);
        let mut derived = Self::from_tree(name, &tree);
        if !font_family_is_leaf(&tree) {
            derived.typography.font_family = self.typography.font_family.clone();
        }
        derived
    }
}

fn font_family_is_leaf(tree: &TokenMap) -> bool {
    tree.get("typography")
        .and_then(TokenValue::as_map)
        .and_then(|typography| typography.get("fontFamily"))
        .map_or(true, TokenValue::is_leaf)
}
