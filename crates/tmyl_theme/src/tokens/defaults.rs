//! Built-in default token tree

use super::TokenMap;
use crate::token_map;

/// The default token tree every [`TokenStore`](crate::TokenStore) starts from.
///
/// Category order here is the order declarations are emitted in.
pub fn default_tokens() -> TokenMap {
    token_map! {
        "colors" => {
            "primary" => "#007bff",
            "secondary" => "#6c757d",
            "success" => "#28a745",
            "danger" => "#dc3545",
            "warning" => "#ffc107",
            "info" => "#17a2b8",
            "light" => "#f8f9fa",
            "dark" => "#343a40",
            "white" => "#ffffff",
            "black" => "#000000",
            "background" => "#ffffff",
            "surface" => "#f8f9fa",
            "text" => "#212529",
            "textSecondary" => "#6c757d",
            "border" => "#dee2e6",
        },
        "spacing" => {
            "0" => "0",
            "1" => "0.25rem",
            "2" => "0.5rem",
            "3" => "0.75rem",
            "4" => "1rem",
            "5" => "1.25rem",
            "6" => "1.5rem",
            "8" => "2rem",
            "10" => "2.5rem",
            "12" => "3rem",
            "16" => "4rem",
        },
        "typography" => {
            "fontFamily" => {
                "sans" => "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif",
                "serif" => "Georgia, Cambria, 'Times New Roman', serif",
                "mono" => "SFMono-Regular, Menlo, Monaco, Consolas, monospace",
            },
            "fontSize" => {
                "xs" => "0.75rem",
                "sm" => "0.875rem",
                "base" => "1rem",
                "lg" => "1.125rem",
                "xl" => "1.25rem",
                "2xl" => "1.5rem",
                "3xl" => "1.875rem",
                "4xl" => "2.25rem",
            },
            "fontWeight" => {
                "light" => 300,
                "normal" => 400,
                "medium" => 500,
                "semibold" => 600,
                "bold" => 700,
            },
            "lineHeight" => {
                "tight" => 1.25,
                "normal" => 1.5,
                "relaxed" => 1.75,
            },
        },
        "borders" => {
            "radius" => {
                "none" => "0",
                "sm" => "0.125rem",
                "base" => "0.25rem",
                "md" => "0.375rem",
                "lg" => "0.5rem",
                "xl" => "0.75rem",
                "full" => "9999px",
            },
            "width" => {
                "none" => "0",
                "thin" => "1px",
                "base" => "2px",
                "thick" => "4px",
            },
        },
        "shadows" => {
            "sm" => "0 1px 2px 0 rgba(0, 0, 0, 0.05)",
            "base" => "0 1px 3px 0 rgba(0, 0, 0, 0.1), 0 1px 2px 0 rgba(0, 0, 0, 0.06)",
            "md" => "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)",
            "lg" => "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)",
            "xl" => "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04)",
        },
        "transitions" => {
            "fast" => "150ms ease-in-out",
            "base" => "250ms ease-in-out",
            "slow" => "350ms ease-in-out",
        },
        "zIndex" => {
            "dropdown" => 1000,
            "sticky" => 1020,
            "fixed" => 1030,
            "modalBackdrop" => 1040,
            "modal" => 1050,
            "popover" => 1060,
            "tooltip" => 1070,
        },
        "breakpoints" => {
            "sm" => "640px",
            "md" => "768px",
            "lg" => "1024px",
            "xl" => "1280px",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order() {
        let tokens = default_tokens();
        let categories: Vec<&str> = tokens.keys().map(String::as_str).collect();
        assert_eq!(
            categories,
            vec![
                "colors",
                "spacing",
                "typography",
                "borders",
                "shadows",
                "transitions",
                "zIndex",
                "breakpoints"
            ]
        );
    }

    #[test]
    fn test_primary_color() {
        let tokens = default_tokens();
        let colors = tokens["colors"].as_map().unwrap();
        assert_eq!(colors["primary"].as_str(), Some("#007bff"));
    }

    #[test]
    fn test_colors_are_one_level_deep() {
        let tokens = default_tokens();
        for (_, value) in tokens["colors"].as_map().unwrap() {
            assert!(value.is_leaf());
        }
    }
}
