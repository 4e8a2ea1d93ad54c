//! Token store
//!
//! Owns one token tree. Readers always get owned copies, so nothing handed
//! out can reach back into the store. The only mutation path is
//! [`TokenStore::update_tokens`] (plus [`TokenStore::reset`]), and every
//! mutation is published to token listeners.

use std::sync::Arc;

use tracing::debug;

use crate::css::{flatten_tokens, tokens_css, StyleDeclaration};
use crate::events::{Listeners, SubscriptionId, TokensEvent};
use crate::merge::merge_into;
use crate::surface::StyleApplier;
use crate::themes::lookup;
use crate::tokens::{default_tokens, TokenMap, TokenValue};

/// Hierarchical design-token storage
#[derive(Debug)]
pub struct TokenStore {
    tokens: TokenMap,
    listeners: Listeners<TokensEvent>,
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore {
    /// Create a store holding the built-in default tree
    pub fn new() -> Self {
        Self {
            tokens: default_tokens(),
            listeners: Listeners::new(),
        }
    }

    /// Create a store with `overrides` merged over the defaults
    pub fn with_overrides(overrides: &TokenMap) -> Self {
        let mut store = Self::new();
        merge_into(&mut store.tokens, overrides);
        store
    }

    /// Full copy of the token tree
    pub fn get_tokens(&self) -> TokenMap {
        self.tokens.clone()
    }

    /// Deep-merge `partial` into the tree.
    ///
    /// Unknown categories and tokens are added as-is.
    pub fn update_tokens(&mut self, partial: &TokenMap) {
        debug!(
            "TokenStore::update_tokens - merging {} categories",
            partial.len()
        );
        merge_into(&mut self.tokens, partial);
        self.publish();
    }

    /// Restore the built-in default tree
    pub fn reset(&mut self) {
        debug!("TokenStore::reset");
        self.tokens = default_tokens();
        self.publish();
    }

    /// Value at a dotted path, e.g. `typography.fontSize.base`
    pub fn get(&self, path: &str) -> Option<TokenValue> {
        let segments: Vec<&str> = path.split('.').collect();
        lookup(&self.tokens, &segments).cloned()
    }

    /// Copy of one category; empty if absent or not a map
    pub fn category(&self, name: &str) -> TokenMap {
        self.tokens
            .get(name)
            .and_then(TokenValue::as_map)
            .cloned()
            .unwrap_or_default()
    }

    // ========== Category Access ==========

    pub fn get_colors(&self) -> TokenMap {
        self.category("colors")
    }

    pub fn get_spacing(&self) -> TokenMap {
        self.category("spacing")
    }

    pub fn get_typography(&self) -> TokenMap {
        self.category("typography")
    }

    pub fn get_borders(&self) -> TokenMap {
        self.category("borders")
    }

    pub fn get_shadows(&self) -> TokenMap {
        self.category("shadows")
    }

    pub fn get_transitions(&self) -> TokenMap {
        self.category("transitions")
    }

    pub fn get_z_index(&self) -> TokenMap {
        self.category("zIndex")
    }

    pub fn get_breakpoints(&self) -> TokenMap {
        self.category("breakpoints")
    }

    // ========== Style Emission ==========

    /// Flattened `category-token` declarations in stored order
    pub fn generate_style_declarations(&self) -> Vec<StyleDeclaration> {
        flatten_tokens(&self.tokens)
    }

    /// `:root` block with every token as a `--tmyl-` custom property
    pub fn generate_css(&self) -> String {
        tokens_css(&self.tokens)
    }

    // ========== Notifications ==========

    pub fn subscribe(
        &mut self,
        listener: impl Fn(&TokensEvent) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.listeners.subscribe(Arc::new(listener))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Subscribe a style applier and push the current tree to it once
    pub fn attach_applier(&mut self, applier: StyleApplier) -> SubscriptionId {
        applier.apply_tokens(&TokensEvent {
            tokens: self.tokens.clone(),
        });
        self.subscribe(move |event| applier.apply_tokens(event))
    }

    fn publish(&self) {
        if self.listeners.is_empty() {
            return;
        }
        self.listeners.emit(&TokensEvent {
            tokens: self.tokens.clone(),
        });
    }
}
