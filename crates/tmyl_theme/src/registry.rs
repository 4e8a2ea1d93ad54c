//! Theme registry
//!
//! Holds named theme records and the active-theme pointer. Built-ins are
//! synthesized once from a token store at construction; later token updates
//! do not touch registered records.
//!
//! Error policy is deliberately split:
//! - [`ThemeRegistry::set_theme`] on an unknown name logs a warning and falls
//!   back to `default`, so the UI keeps a usable theme.
//! - [`ThemeRegistry::create_theme`] on an unknown base returns
//!   [`ThemeError::BaseThemeNotFound`] and registers nothing.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::css::theme_css;
use crate::error::{Result, ThemeError};
use crate::events::{Listeners, SubscriptionId, ThemeEvent};
use crate::store::TokenStore;
use crate::surface::StyleApplier;
use crate::theme::ThemeRecord;
use crate::themes::{builtin_themes, DEFAULT_THEME};
use crate::tokens::TokenMap;

/// Named theme records plus the active theme
#[derive(Debug)]
pub struct ThemeRegistry {
    themes: IndexMap<String, ThemeRecord>,
    /// Always a key of `themes`
    current: String,
    listeners: Listeners<ThemeEvent>,
}

impl ThemeRegistry {
    /// Build the registry from the store's current tree, with `default` active
    pub fn new(store: &TokenStore) -> Self {
        let themes = builtin_themes(&store.get_tokens())
            .into_iter()
            .map(|theme| (theme.name.clone(), theme))
            .collect();

        Self {
            themes,
            current: DEFAULT_THEME.to_string(),
            listeners: Listeners::new(),
        }
    }

    /// Build the registry and activate `initial` (soft fallback to `default`)
    pub fn with_theme(store: &TokenStore, initial: &str) -> Self {
        let mut registry = Self::new(store);
        registry.set_theme(initial);
        registry
    }

    fn current_record(&self) -> &ThemeRecord {
        &self.themes[self.current.as_str()]
    }

    /// Copy of the active theme
    pub fn get_current_theme(&self) -> ThemeRecord {
        self.current_record().clone()
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current
    }

    /// Switch the active theme.
    ///
    /// An unregistered name is not an error: a warning is logged and
    /// `default` becomes active. Subscribers are notified either way.
    pub fn set_theme(&mut self, name: &str) {
        let previous = std::mem::take(&mut self.current);

        if self.themes.contains_key(name) {
            debug!("ThemeRegistry::set_theme - {} -> {}", previous, name);
            self.current = name.to_string();
        } else {
            warn!(
                "Theme '{}' not found, falling back to '{}'",
                name, DEFAULT_THEME
            );
            self.current = DEFAULT_THEME.to_string();
        }

        self.publish(previous);
    }

    /// Register `theme` under `name`, replacing any existing entry (built-ins included).
    ///
    /// The record's `name` is overwritten to match the key.
    pub fn register_theme(&mut self, name: &str, mut theme: ThemeRecord) {
        theme.name = name.to_string();
        let replaced = self.themes.insert(name.to_string(), theme).is_some();
        debug!(
            "ThemeRegistry::register_theme - {} ({})",
            name,
            if replaced { "replaced" } else { "new" }
        );

        // Re-push so a live surface doesn't keep stale values for the active theme
        if name == self.current {
            self.publish(self.current.clone());
        }
    }

    /// Registered names in registration order
    pub fn get_available_themes(&self) -> Vec<String> {
        self.themes.keys().cloned().collect()
    }

    pub fn get_theme(&self, name: &str) -> Option<ThemeRecord> {
        self.themes.get(name).cloned()
    }

    pub fn has_theme(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Derive a theme from `base` with `overrides` deep-merged over it, register
    /// it as `name` and return it.
    ///
    /// `overrides` uses the record's tree shape: `colors`, `spacing`,
    /// `typography.{fontFamily,fontSize,fontWeight,lineHeight}`,
    /// `borderRadius`, `shadows`, `breakpoints`.
    pub fn create_theme(
        &mut self,
        name: &str,
        base: &str,
        overrides: &TokenMap,
    ) -> Result<ThemeRecord> {
        let base_theme = self
            .themes
            .get(base)
            .ok_or_else(|| ThemeError::BaseThemeNotFound(base.to_string()))?;

        let theme = base_theme.derive(name, overrides);
        self.register_theme(name, theme.clone());
        Ok(theme)
    }

    /// Declaration block for `name`, or for the active theme when `None`
    pub fn generate_theme_css(&self, name: Option<&str>) -> Result<String> {
        let theme = match name {
            Some(name) => self
                .themes
                .get(name)
                .ok_or_else(|| ThemeError::ThemeNotFound(name.to_string()))?,
            None => self.current_record(),
        };
        Ok(theme_css(theme))
    }

    /// Every registered theme's block, in registration order, separated by a blank line
    pub fn generate_all_themes_css(&self) -> String {
        self.themes
            .values()
            .map(theme_css)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    // ========== Notifications ==========

    pub fn subscribe(
        &mut self,
        listener: impl Fn(&ThemeEvent) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.listeners.subscribe(Arc::new(listener))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Subscribe a style applier and apply the active theme to it once
    pub fn attach_applier(&mut self, applier: StyleApplier) -> SubscriptionId {
        applier.apply_theme(&ThemeEvent {
            previous: self.current.clone(),
            current: self.get_current_theme(),
        });
        self.subscribe(move |event| applier.apply_theme(event))
    }

    fn publish(&self, previous: String) {
        if self.listeners.is_empty() {
            return;
        }
        self.listeners.emit(&ThemeEvent {
            previous,
            current: self.get_current_theme(),
        });
    }
}
