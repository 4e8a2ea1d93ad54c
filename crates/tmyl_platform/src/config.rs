//! Platform configuration
//!
//! Usually built in code, but also loadable from TOML:
//!
//! ```toml
//! framework = "auto"     # or "vanilla", "react"
//! theme = "dark"
//!
//! [tokens.colors]
//! primary = "#ff0000"
//! ```

use serde::{Deserialize, Serialize};
use tmyl_theme::{TokenMap, DEFAULT_THEME};

use crate::detect::Framework;
use crate::error::Result;

/// Which framework to bind
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FrameworkChoice {
    /// Probe the environment once at construction
    #[default]
    Auto,
    /// An explicit framework id; must match a registered adapter
    Named(String),
}

impl From<String> for FrameworkChoice {
    fn from(value: String) -> Self {
        if value.trim().eq_ignore_ascii_case("auto") {
            FrameworkChoice::Auto
        } else {
            FrameworkChoice::Named(value)
        }
    }
}

impl From<&str> for FrameworkChoice {
    fn from(value: &str) -> Self {
        FrameworkChoice::from(value.to_string())
    }
}

impl From<Framework> for FrameworkChoice {
    fn from(value: Framework) -> Self {
        FrameworkChoice::Named(value.id().to_string())
    }
}

impl From<FrameworkChoice> for String {
    fn from(value: FrameworkChoice) -> Self {
        match value {
            FrameworkChoice::Auto => "auto".to_string(),
            FrameworkChoice::Named(name) => name,
        }
    }
}

/// Platform configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    pub framework: FrameworkChoice,
    /// Theme active after construction
    pub theme: String,
    /// Partial token tree merged over the defaults before themes are built
    pub tokens: TokenMap,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            framework: FrameworkChoice::Auto,
            theme: DEFAULT_THEME.to_string(),
            tokens: TokenMap::new(),
        }
    }
}

impl PlatformConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML configuration
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn with_framework(mut self, framework: impl Into<FrameworkChoice>) -> Self {
        self.framework = framework.into();
        self
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    pub fn with_tokens(mut self, tokens: TokenMap) -> Self {
        self.tokens = tokens;
        self
    }
}
