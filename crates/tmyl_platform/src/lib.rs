//! tmyl Platform
//!
//! Binds the tmyl theme system to one rendering back end.
//!
//! # Overview
//!
//! - **Detection**: with `framework = "auto"`, a [`FrameworkDetector`] runs once
//!   at construction. [`ScopeDetector`] looks for the React marker in a browser
//!   scope, then a server scope, and otherwise settles on vanilla.
//! - **Adapters**: back ends implement [`Adapter`] and are registered in an
//!   [`AdapterSet`]. The vanilla adapter is always present.
//! - **Dispatch**: [`Platform`] decorates component props with the active theme
//!   and the token tree, and forwards theme/token changes to its adapter.
//!
//! # Quick Start
//!
//! ```rust
//! use tmyl_platform::{
//!     create_platform, Adapter, AdapterSet, ComponentProps, Framework, PlatformConfig, Props,
//! };
//! use tmyl_theme::{ThemeRecord, TokenMap};
//!
//! struct Html;
//!
//! impl Adapter for Html {
//!     type Element = String;
//!
//!     fn create_component(&self, kind: &str, props: ComponentProps) -> Option<String> {
//!         let bg = props.theme.color("primary")?;
//!         Some(format!("<{kind} style=\"background:{bg}\"></{kind}>"))
//!     }
//!
//!     fn update_theme(&mut self, _theme: &ThemeRecord) {}
//!     fn update_tokens(&mut self, _tokens: &TokenMap) {}
//!
//!     fn framework(&self) -> Framework {
//!         Framework::Vanilla
//!     }
//! }
//!
//! let mut platform = create_platform(PlatformConfig::default(), AdapterSet::new(|| Html)).unwrap();
//! platform.set_theme("dark");
//!
//! let html = platform.button(Props::new()).unwrap();
//! assert_eq!(html, "<button style=\"background:#4dabf7\"></button>");
//! ```

pub mod adapter;
pub mod config;
pub mod detect;
pub mod error;
pub mod platform;

pub use adapter::{Adapter, AdapterSet, BoxedAdapter, ComponentProps, Props};
pub use config::{FrameworkChoice, PlatformConfig};
pub use detect::{Framework, FrameworkDetector, GlobalScope, ScopeDetector, REACT_MARKER};
pub use error::{PlatformError, Result};
pub use platform::{create_platform, Platform};
