//! Live style surfaces
//!
//! A [`StyleSurface`] is whatever can hold CSS custom properties at runtime:
//! a document root, a webview bridge, or the in-memory [`MemorySurface`].
//! The [`StyleApplier`] subscribes to theme and token events and writes the
//! emitted declarations to one surface. Without an applier nothing is
//! written, which is the normal state for headless use.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use indexmap::{IndexMap, IndexSet};

use crate::css::{flatten_tokens, theme_class, theme_declarations, CSS_PREFIX};
use crate::events::{ThemeEvent, TokensEvent};

/// Target for runtime style writes. Methods take `&self`; implementations
/// use interior mutability.
pub trait StyleSurface: Send + Sync {
    /// Set a custom property. `name` includes the leading `--`.
    fn set_variable(&self, name: &str, value: &str);

    /// Add a class to the root element
    fn add_class(&self, class: &str);

    /// Remove a class from the root element
    fn remove_class(&self, class: &str);
}

/// Writes theme and token declarations to a surface
#[derive(Clone)]
pub struct StyleApplier {
    surface: Arc<dyn StyleSurface>,
}

impl StyleApplier {
    pub fn new(surface: Arc<dyn StyleSurface>) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &Arc<dyn StyleSurface> {
        &self.surface
    }

    /// Swap the root theme class and push every theme variable
    pub fn apply_theme(&self, event: &ThemeEvent) {
        if event.previous != event.current.name {
            self.surface.remove_class(&theme_class(&event.previous));
        }
        self.surface.add_class(&theme_class(&event.current.name));

        for decl in theme_declarations(&event.current) {
            tracing::trace!("set {} = {}", decl.property(), decl.value);
            self.surface.set_variable(&decl.property(), &decl.value);
        }
    }

    /// Push every token as `--tmyl-<path>`
    pub fn apply_tokens(&self, event: &TokensEvent) {
        for decl in flatten_tokens(&event.tokens) {
            let name = format!("--{CSS_PREFIX}-{}", decl.name);
            tracing::trace!("set {} = {}", name, decl.value);
            self.surface.set_variable(&name, &decl.value);
        }
    }
}

impl std::fmt::Debug for StyleApplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleApplier").finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
struct MemorySurfaceInner {
    variables: IndexMap<String, String>,
    classes: IndexSet<String>,
    writes: usize,
}

/// In-memory surface for headless hosts and tests
#[derive(Debug, Default)]
pub struct MemorySurface {
    inner: Mutex<MemorySurfaceInner>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    // Each write is a single insert, so a poisoned lock still guards consistent data.
    fn inner(&self) -> MutexGuard<'_, MemorySurfaceInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current value of a custom property (name includes `--`)
    pub fn variable(&self, name: &str) -> Option<String> {
        self.inner().variables.get(name).cloned()
    }

    pub fn variables(&self) -> IndexMap<String, String> {
        self.inner().variables.clone()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.inner().classes.contains(class)
    }

    pub fn classes(&self) -> Vec<String> {
        self.inner().classes.iter().cloned().collect()
    }

    /// Number of `set_variable` calls received
    pub fn write_count(&self) -> usize {
        self.inner().writes
    }
}

impl StyleSurface for MemorySurface {
    fn set_variable(&self, name: &str, value: &str) {
        let mut inner = self.inner();
        inner.variables.insert(name.to_string(), value.to_string());
        inner.writes += 1;
    }

    fn add_class(&self, class: &str) {
        self.inner().classes.insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.inner().classes.shift_remove(class);
    }
}
