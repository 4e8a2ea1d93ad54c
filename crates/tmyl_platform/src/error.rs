//! Platform error types

use thiserror::Error;

/// Platform construction errors
///
/// Everything after construction is infallible or reported through
/// [`tmyl_theme::ThemeError`].
#[derive(Error, Debug)]
pub enum PlatformError {
    /// An explicitly configured framework has no matching adapter
    #[error("Unknown framework: {0}")]
    UnknownFramework(String),

    /// Configuration text could not be parsed
    #[error("Invalid platform configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
