//! Override trees for the derived built-in themes

use crate::token_map;
use crate::tokens::TokenMap;

/// Dark surfaces with a lighter primary for contrast.
pub fn dark_overrides() -> TokenMap {
    token_map! {
        "colors" => {
            "primary" => "#4dabf7",
            "secondary" => "#adb5bd",
            "background" => "#121212",
            "surface" => "#1e1e1e",
            "text" => "#e0e0e0",
            "textSecondary" => "#a0a0a0",
            "border" => "#333333",
        },
        "shadows" => {
            "sm" => "0 1px 2px 0 rgba(0, 0, 0, 0.3)",
            "md" => "0 4px 6px -1px rgba(0, 0, 0, 0.4), 0 2px 4px -1px rgba(0, 0, 0, 0.3)",
            "lg" => "0 10px 15px -3px rgba(0, 0, 0, 0.5), 0 4px 6px -2px rgba(0, 0, 0, 0.3)",
        },
    }
}

/// Muted corporate palette with a serif face.
pub fn professional_overrides() -> TokenMap {
    token_map! {
        "colors" => {
            "primary" => "#2c3e50",
            "secondary" => "#7f8c8d",
            "success" => "#27ae60",
            "warning" => "#f39c12",
            "error" => "#c0392b",
            "info" => "#2980b9",
            "background" => "#fafafa",
            "surface" => "#ffffff",
            "text" => "#2c3e50",
            "border" => "#d5dbdb",
        },
        "typography" => {
            "fontFamily" => "Georgia, Cambria, 'Times New Roman', serif",
        },
        "borderRadius" => {
            "sm" => "0.125rem",
            "md" => "0.25rem",
            "lg" => "0.375rem",
        },
    }
}

/// High-contrast dark palette for market data: green up, red down, monospace figures.
pub fn trading_overrides() -> TokenMap {
    token_map! {
        "colors" => {
            "primary" => "#f0b90b",
            "secondary" => "#848e9c",
            "success" => "#0ecb81",
            "warning" => "#f0b90b",
            "error" => "#f6465d",
            "info" => "#1e88e5",
            "background" => "#0b0e11",
            "surface" => "#1e2329",
            "text" => "#eaecef",
            "textSecondary" => "#848e9c",
            "border" => "#2b3139",
        },
        "typography" => {
            "fontFamily" => "SFMono-Regular, Menlo, Monaco, Consolas, monospace",
            "fontSize" => {
                "xs" => "0.6875rem",
                "sm" => "0.75rem",
                "base" => "0.875rem",
            },
        },
        "spacing" => {
            "xs" => "0.25rem",
            "sm" => "0.5rem",
            "md" => "0.75rem",
        },
        "borderRadius" => {
            "sm" => "0.125rem",
            "md" => "0.125rem",
            "lg" => "0.25rem",
        },
    }
}
