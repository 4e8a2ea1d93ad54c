//! Runtime dispatcher
//!
//! A [`Platform`] owns one token store, one theme registry and one adapter.
//! The adapter is chosen once, at construction, and never changes; build a
//! new platform to switch frameworks. Every theme or token change goes to
//! the store/registry first and is then pushed to the adapter in the same
//! call.

use std::sync::Arc;

use tracing::{debug, warn};

use tmyl_theme::{
    StyleApplier, StyleSurface, SubscriptionId, ThemeError, ThemeEvent, ThemeRecord,
    ThemeRegistry, TokenMap, TokenStore,
};

use crate::adapter::{AdapterSet, BoxedAdapter, ComponentProps, Props};
use crate::config::{FrameworkChoice, PlatformConfig};
use crate::detect::{Framework, FrameworkDetector, ScopeDetector};
use crate::error::{PlatformError, Result};

/// Build a fresh platform. Shorthand for [`Platform::new`].
pub fn create_platform<E: 'static>(
    config: PlatformConfig,
    adapters: AdapterSet<E>,
) -> Result<Platform<E>> {
    Platform::new(config, adapters)
}

/// Token store + theme registry bound to a single rendering back end
pub struct Platform<E> {
    framework: Framework,
    adapter: BoxedAdapter<E>,
    tokens: TokenStore,
    themes: ThemeRegistry,
    /// Token and theme subscriptions of the attached surface, if any
    surface: Option<(SubscriptionId, SubscriptionId)>,
}

impl<E: 'static> Platform<E> {
    /// Build with the default [`ScopeDetector`] (no scopes: resolves to vanilla)
    pub fn new(config: PlatformConfig, adapters: AdapterSet<E>) -> Result<Self> {
        Self::with_detector(config, adapters, ScopeDetector::default())
    }

    /// Build with an explicit detector, consulted only for `auto`
    pub fn with_detector(
        config: PlatformConfig,
        adapters: AdapterSet<E>,
        detector: impl FrameworkDetector,
    ) -> Result<Self> {
        let framework = resolve_framework(&config.framework, &adapters, &detector)?;
        let adapter = adapters.build(framework);

        let tokens = TokenStore::with_overrides(&config.tokens);
        let themes = ThemeRegistry::with_theme(&tokens, &config.theme);

        debug!(
            "Platform bound to {} (theme: {})",
            framework,
            themes.current_theme_name()
        );

        Ok(Self {
            framework,
            adapter,
            tokens,
            themes,
            surface: None,
        })
    }
}

impl<E> Platform<E> {
    /// Framework this platform is bound to
    pub fn framework(&self) -> Framework {
        self.framework
    }

    // ========== Components ==========

    /// Create a component through the bound adapter.
    ///
    /// `kind` is passed through unchecked; unknown kinds are the adapter's call.
    pub fn create(&self, kind: &str, props: Props) -> Option<E> {
        let decorated = ComponentProps {
            props,
            theme: self.themes.get_current_theme(),
            tokens: self.tokens.get_tokens(),
        };
        self.adapter.create_component(kind, decorated)
    }

    pub fn button(&self, props: Props) -> Option<E> {
        self.create("button", props)
    }

    pub fn card(&self, props: Props) -> Option<E> {
        self.create("card", props)
    }

    pub fn input(&self, props: Props) -> Option<E> {
        self.create("input", props)
    }

    pub fn modal(&self, props: Props) -> Option<E> {
        self.create("modal", props)
    }

    pub fn table(&self, props: Props) -> Option<E> {
        self.create("table", props)
    }

    pub fn chart(&self, props: Props) -> Option<E> {
        self.create("chart", props)
    }

    // ========== Themes ==========

    /// Switch theme (soft fallback to `default`) and push the result to the adapter
    pub fn set_theme(&mut self, name: &str) {
        self.themes.set_theme(name);
        let theme = self.themes.get_current_theme();
        self.adapter.update_theme(&theme);
    }

    pub fn get_current_theme(&self) -> ThemeRecord {
        self.themes.get_current_theme()
    }

    pub fn get_theme(&self, name: &str) -> Option<ThemeRecord> {
        self.themes.get_theme(name)
    }

    pub fn get_available_themes(&self) -> Vec<String> {
        self.themes.get_available_themes()
    }

    /// Register `theme` under `name`; overwriting the active theme re-pushes it
    pub fn register_theme(&mut self, name: &str, theme: ThemeRecord) {
        self.themes.register_theme(name, theme);
        self.refresh_if_current(name);
    }

    pub fn create_theme(
        &mut self,
        name: &str,
        base: &str,
        overrides: &TokenMap,
    ) -> std::result::Result<ThemeRecord, ThemeError> {
        let theme = self.themes.create_theme(name, base, overrides)?;
        self.refresh_if_current(name);
        Ok(theme)
    }

    fn refresh_if_current(&mut self, name: &str) {
        if name == self.themes.current_theme_name() {
            let theme = self.themes.get_current_theme();
            self.adapter.update_theme(&theme);
        }
    }

    pub fn generate_theme_css(
        &self,
        name: Option<&str>,
    ) -> std::result::Result<String, ThemeError> {
        self.themes.generate_theme_css(name)
    }

    pub fn generate_all_themes_css(&self) -> String {
        self.themes.generate_all_themes_css()
    }

    /// Listen for theme switches
    pub fn on_theme_change(
        &mut self,
        listener: impl Fn(&ThemeEvent) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.themes.subscribe(listener)
    }

    // ========== Tokens ==========

    /// Merge `partial` into the token tree and push the merged tree to the adapter
    pub fn update_tokens(&mut self, partial: &TokenMap) {
        self.tokens.update_tokens(partial);
        let tokens = self.tokens.get_tokens();
        self.adapter.update_tokens(&tokens);
    }

    pub fn get_tokens(&self) -> TokenMap {
        self.tokens.get_tokens()
    }

    /// Read access to the token store
    pub fn token_store(&self) -> &TokenStore {
        &self.tokens
    }

    /// Read access to the theme registry
    pub fn theme_registry(&self) -> &ThemeRegistry {
        &self.themes
    }

    // ========== Live Styles ==========

    /// Keep `surface` in sync with the active theme and the token tree.
    ///
    /// At most one surface is attached; a second call detaches the first.
    pub fn attach_surface(&mut self, surface: Arc<dyn StyleSurface>) {
        self.detach_surface();
        let applier = StyleApplier::new(surface);
        let tokens_id = self.tokens.attach_applier(applier.clone());
        let theme_id = self.themes.attach_applier(applier);
        self.surface = Some((tokens_id, theme_id));
    }

    /// Stop writing to the attached surface. Returns false if none was attached.
    pub fn detach_surface(&mut self) -> bool {
        match self.surface.take() {
            Some((tokens_id, theme_id)) => {
                self.tokens.unsubscribe(tokens_id);
                self.themes.unsubscribe(theme_id);
                true
            }
            None => false,
        }
    }
}

impl<E> std::fmt::Debug for Platform<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Platform")
            .field("framework", &self.framework)
            .field("theme", &self.themes.current_theme_name())
            .finish_non_exhaustive()
    }
}

fn resolve_framework<E>(
    choice: &FrameworkChoice,
    adapters: &AdapterSet<E>,
    detector: &impl FrameworkDetector,
) -> Result<Framework> {
    match choice {
        FrameworkChoice::Named(name) => {
            let framework: Framework = name.parse()?;
            if !adapters.contains(framework) {
                return Err(PlatformError::UnknownFramework(name.clone()));
            }
            Ok(framework)
        }
        FrameworkChoice::Auto => {
            let detected = detector.detect();
            if adapters.contains(detected) {
                Ok(detected)
            } else {
                warn!(
                    "Detected framework '{}' has no adapter, using '{}'",
                    detected,
                    Framework::Vanilla
                );
                Ok(Framework::Vanilla)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::Adapter;
    use crate::detect::GlobalScope;
    use serde_json::json;
    use std::cell::Cell;
    use std::rc::Rc;
    use tmyl_theme::{token_map, MemorySurface};

    #[derive(Debug, PartialEq)]
    struct Rendered {
        framework: Framework,
        kind: String,
        props: ComponentProps,
    }

    struct TestAdapter {
        framework: Framework,
        theme_updates: Rc<Cell<usize>>,
        token_updates: Rc<Cell<usize>>,
    }

    impl Adapter for TestAdapter {
        type Element = Rendered;

        fn create_component(&self, kind: &str, props: ComponentProps) -> Option<Rendered> {
            Some(Rendered {
                framework: self.framework,
                kind: kind.to_string(),
                props,
            })
        }

        fn update_theme(&mut self, _theme: &ThemeRecord) {
            self.theme_updates.set(self.theme_updates.get() + 1);
        }

        fn update_tokens(&mut self, _tokens: &TokenMap) {
            self.token_updates.set(self.token_updates.get() + 1);
        }

        fn framework(&self) -> Framework {
            self.framework
        }
    }

    struct Counters {
        theme: Rc<Cell<usize>>,
        tokens: Rc<Cell<usize>>,
    }

    fn adapters() -> (AdapterSet<Rendered>, Counters) {
        let counters = Counters {
            theme: Rc::new(Cell::new(0)),
            tokens: Rc::new(Cell::new(0)),
        };
        let make = |framework: Framework| {
            let theme_updates = counters.theme.clone();
            let token_updates = counters.tokens.clone();
            move || TestAdapter {
                framework,
                theme_updates,
                token_updates,
            }
        };
        let set = AdapterSet::new(make(Framework::Vanilla))
            .with(Framework::React, make(Framework::React));
        (set, counters)
    }

    fn props(value: serde_json::Value) -> Props {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_auto_without_scopes_binds_vanilla() {
        let (set, _) = adapters();
        let platform = Platform::new(PlatformConfig::default(), set).unwrap();
        assert_eq!(platform.framework(), Framework::Vanilla);
    }

    #[test]
    fn test_auto_detects_react_from_browser_scope() {
        let (set, _) = adapters();
        let detector = ScopeDetector::new().browser(GlobalScope::new().with("React"));
        let platform = Platform::with_detector(PlatformConfig::default(), set, detector).unwrap();
        assert_eq!(platform.framework(), Framework::React);
    }

    #[test]
    fn test_detector_runs_once() {
        let (set, _) = adapters();
        let calls = Cell::new(0);
        let detector = || {
            calls.set(calls.get() + 1);
            Framework::React
        };

        let mut platform = Platform::with_detector(PlatformConfig::default(), set, detector).unwrap();
        platform.set_theme("dark");
        platform.update_tokens(&token_map! { "colors" => { "primary" => "#000000" } });
        let _ = platform.button(Props::new());

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_detector_ignored_for_explicit_framework() {
        let (set, _) = adapters();
        let detector = || -> Framework { panic!("detector must not run") };
        let config = PlatformConfig::new().with_framework(Framework::Vanilla);

        let platform = Platform::with_detector(config, set, detector).unwrap();
        assert_eq!(platform.framework(), Framework::Vanilla);
    }

    #[test]
    fn test_unknown_explicit_framework_fails() {
        let (set, _) = adapters();
        let config = PlatformConfig::new().with_framework("svelte");
        assert!(matches!(
            Platform::new(config, set),
            Err(PlatformError::UnknownFramework(name)) if name == "svelte"
        ));
    }

    #[test]
    fn test_known_but_unregistered_framework_fails() {
        let set = AdapterSet::new(|| TestAdapter {
            framework: Framework::Vanilla,
            theme_updates: Rc::default(),
            token_updates: Rc::default(),
        });
        let config = PlatformConfig::new().with_framework(Framework::React);
        assert!(matches!(
            Platform::new(config, set),
            Err(PlatformError::UnknownFramework(_))
        ));
    }

    #[test]
    fn test_auto_detected_but_unregistered_falls_back() {
        let set = AdapterSet::new(|| TestAdapter {
            framework: Framework::Vanilla,
            theme_updates: Rc::default(),
            token_updates: Rc::default(),
        });
        let platform =
            Platform::with_detector(PlatformConfig::default(), set, || Framework::React).unwrap();
        assert_eq!(platform.framework(), Framework::Vanilla);
    }

    #[test]
    fn test_create_decorates_props() {
        let (set, _) = adapters();
        let mut platform = Platform::new(PlatformConfig::default(), set).unwrap();
        platform.set_theme("dark");

        let element = platform
            .create("widget", props(json!({ "label": "Buy" })))
            .unwrap();

        assert_eq!(element.kind, "widget");
        assert_eq!(element.props.get("label"), Some(&json!("Buy")));
        assert_eq!(element.props.theme.name, "dark");
        assert_eq!(element.props.tokens, platform.get_tokens());
    }

    #[test]
    fn test_wrappers_fix_kind() {
        let (set, _) = adapters();
        let platform = Platform::new(PlatformConfig::default(), set).unwrap();

        let kinds: Vec<String> = [
            platform.button(Props::new()),
            platform.card(Props::new()),
            platform.input(Props::new()),
            platform.modal(Props::new()),
            platform.table(Props::new()),
            platform.chart(Props::new()),
        ]
        .into_iter()
        .map(|el| el.unwrap().kind)
        .collect();

        assert_eq!(kinds, ["button", "card", "input", "modal", "table", "chart"]);
    }

    #[test]
    fn test_set_theme_pushes_to_adapter() {
        let (set, counters) = adapters();
        let mut platform = Platform::new(PlatformConfig::default(), set).unwrap();

        platform.set_theme("professional");
        platform.set_theme("does-not-exist");

        assert_eq!(counters.theme.get(), 2);
        assert_eq!(platform.get_current_theme().name, "default");
    }

    #[test]
    fn test_update_tokens_pushes_to_adapter() {
        let (set, counters) = adapters();
        let mut platform = Platform::new(PlatformConfig::default(), set).unwrap();

        platform.update_tokens(&token_map! { "colors" => { "primary" => "#ff0000" } });

        assert_eq!(counters.tokens.get(), 1);
        assert_eq!(
            platform.token_store().get_colors()["primary"].as_str(),
            Some("#ff0000")
        );
    }

    #[test]
    fn test_config_theme_and_tokens_applied() {
        let (set, _) = adapters();
        let config = PlatformConfig::new()
            .with_theme("trading")
            .with_tokens(token_map! { "colors" => { "danger" => "#aa0000" } });

        let platform = Platform::new(config, set).unwrap();

        assert_eq!(platform.get_current_theme().name, "trading");
        assert_eq!(
            platform.get_theme("default").unwrap().color("error").as_deref(),
            Some("#aa0000")
        );
    }

    #[test]
    fn test_attach_surface_syncs_theme_and_tokens() {
        let (set, _) = adapters();
        let mut platform = Platform::new(PlatformConfig::default(), set).unwrap();
        let surface = Arc::new(MemorySurface::new());
        platform.attach_surface(surface.clone());

        platform.set_theme("dark");
        platform.update_tokens(&token_map! { "colors" => { "primary" => "#ff0000" } });

        assert!(surface.has_class("tmyl-theme-dark"));
        assert_eq!(
            surface.variable("--tmyl-colors-primary").as_deref(),
            Some("#ff0000")
        );
    }

    #[test]
    fn test_overwriting_active_theme_pushes_to_adapter() {
        let (set, counters) = adapters();
        let mut platform = Platform::new(PlatformConfig::default(), set).unwrap();
        let dark = platform.get_theme("dark").unwrap();

        platform.register_theme("default", dark);
        assert_eq!(counters.theme.get(), 1);
        assert_eq!(
            platform.get_current_theme().color("background").as_deref(),
            Some("#121212")
        );

        platform
            .create_theme("default", "trading", &TokenMap::new())
            .unwrap();
        assert_eq!(counters.theme.get(), 2);
    }

    #[test]
    fn test_registering_inactive_theme_does_not_push() {
        let (set, counters) = adapters();
        let mut platform = Platform::new(PlatformConfig::default(), set).unwrap();
        let dark = platform.get_theme("dark").unwrap();

        platform.register_theme("night", dark);
        platform
            .create_theme("brand", "default", &TokenMap::new())
            .unwrap();
        assert!(platform.create_theme("x", "missing", &TokenMap::new()).is_err());

        assert_eq!(counters.theme.get(), 0);
    }

    #[test]
    fn test_attach_surface_replaces_previous_surface() {
        let (set, _) = adapters();
        let mut platform = Platform::new(PlatformConfig::default(), set).unwrap();
        let first = Arc::new(MemorySurface::new());
        let second = Arc::new(MemorySurface::new());

        platform.attach_surface(first.clone());
        platform.attach_surface(second.clone());
        let first_writes = first.write_count();

        platform.set_theme("dark");
        platform.update_tokens(&token_map! { "colors" => { "primary" => "#ff0000" } });

        assert_eq!(first.write_count(), first_writes);
        assert!(!first.has_class("tmyl-theme-dark"));
        assert!(second.has_class("tmyl-theme-dark"));
        assert_eq!(
            second.variable("--tmyl-colors-primary").as_deref(),
            Some("#ff0000")
        );
    }

    #[test]
    fn test_detach_surface() {
        let (set, _) = adapters();
        let mut platform = Platform::new(PlatformConfig::default(), set).unwrap();
        let surface = Arc::new(MemorySurface::new());

        assert!(!platform.detach_surface());
        platform.attach_surface(surface.clone());
        assert!(platform.detach_surface());

        let writes = surface.write_count();
        platform.set_theme("trading");
        assert_eq!(surface.write_count(), writes);
    }

    #[test]
    fn test_platforms_are_isolated() {
        let (a, _) = adapters();
        let (b, _) = adapters();
        let mut first = Platform::new(PlatformConfig::default(), a).unwrap();
        let second = Platform::new(PlatformConfig::default(), b).unwrap();

        first.set_theme("dark");
        first.update_tokens(&token_map! { "colors" => { "primary" => "#ff0000" } });

        assert_eq!(second.get_current_theme().name, "default");
        assert_eq!(
            second.token_store().get_colors()["primary"].as_str(),
            Some("#007bff")
        );
    }
}
