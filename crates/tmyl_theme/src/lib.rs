//! tmyl Theme System
//!
//! Design tokens, named theme variants and CSS custom-property emission.
//!
//! # Overview
//!
//! - **Token store**: a hierarchical token tree (colors, spacing, typography,
//!   borders, shadows, transitions, z-index, breakpoints) with deep-merge updates
//! - **Theme registry**: named, flattened theme records synthesized from the
//!   token tree, plus runtime theme switching and derivation
//! - **Style emitter**: ordered `--tmyl-*` declarations as CSS text, or pushed
//!   to a live [`StyleSurface`] through a subscribed [`StyleApplier`]
//!
//! # Quick Start
//!
//! ```rust
//! use tmyl_theme::{token_map, ThemeRegistry, TokenStore};
//!
//! let mut store = TokenStore::new();
//! store.update_tokens(&token_map! { "colors" => { "primary" => "#ff0000" } });
//!
//! let mut registry = ThemeRegistry::new(&store);
//! registry.set_theme("dark");
//!
//! let custom = registry
//!     .create_theme("dark-custom", "dark", &token_map! { "colors" => { "primary" => "#abcdef" } })
//!     .unwrap();
//! assert_eq!(custom.color("primary").as_deref(), Some("#abcdef"));
//!
//! let css = registry.generate_all_themes_css();
//! assert!(css.contains(".tmyl-theme-dark-custom {"));
//! ```
//!
//! # Themes
//!
//! Built-in themes, in registration order: `default`, `light` (same values as
//! `default`), `dark`, `professional`, `trading`.

pub mod css;
pub mod error;
pub mod events;
pub mod merge;
pub mod registry;
pub mod store;
pub mod surface;
pub mod theme;
pub mod themes;
pub mod tokens;

// Re-export commonly used types
pub use css::{StyleDeclaration, CSS_PREFIX};
pub use error::{Result, ThemeError};
pub use events::{SubscriptionId, ThemeEvent, TokensEvent};
pub use merge::{deep_merge, merge_into};
pub use registry::ThemeRegistry;
pub use store::TokenStore;
pub use surface::{MemorySurface, StyleApplier, StyleSurface};
pub use theme::{ThemeRecord, Typography};
pub use themes::{BUILTIN_THEMES, DEFAULT_THEME};
pub use tokens::*;
