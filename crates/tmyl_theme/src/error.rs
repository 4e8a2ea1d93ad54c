//! Theme error types

use thiserror::Error;

/// Theme registry errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// `create_theme` was asked to derive from a theme that is not registered
    #[error("Base theme not found: {0}")]
    BaseThemeNotFound(String),

    /// A named theme is not registered
    #[error("Theme not found: {0}")]
    ThemeNotFound(String),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
