//! Rendering back-end abstraction
//!
//! Back ends live outside this crate; they implement [`Adapter`] and are
//! registered with an [`AdapterSet`] before the platform is built.

use rustc_hash::FxHashMap;
use serde_json::Value;
use tmyl_theme::{ThemeRecord, TokenMap};

use crate::detect::Framework;

/// Caller-supplied component properties
pub type Props = serde_json::Map<String, Value>;

/// Properties as an adapter receives them: the caller's props plus
/// snapshots of the active theme and the token tree at call time.
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentProps {
    pub props: Props,
    pub theme: ThemeRecord,
    pub tokens: TokenMap,
}

impl ComponentProps {
    /// Caller prop by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }
}

/// A rendering back end
///
/// `create_component` may return `None` for component kinds the back end
/// doesn't render. The update hooks let stateful wrappers re-render.
pub trait Adapter {
    type Element;

    fn create_component(&self, kind: &str, props: ComponentProps) -> Option<Self::Element>;

    fn update_theme(&mut self, theme: &ThemeRecord);

    fn update_tokens(&mut self, tokens: &TokenMap);

    fn framework(&self) -> Framework;
}

/// Boxed adapter producing `E` elements
pub type BoxedAdapter<E> = Box<dyn Adapter<Element = E>>;

type AdapterFactory<E> = Box<dyn FnOnce() -> BoxedAdapter<E>>;

fn boxed_factory<E, A, F>(factory: F) -> AdapterFactory<E>
where
    A: Adapter<Element = E> + 'static,
    F: FnOnce() -> A + 'static,
{
    Box::new(move || Box::new(factory()) as BoxedAdapter<E>)
}

/// Adapter factories keyed by framework
///
/// The vanilla factory is mandatory, so every platform can bind to
/// something. Factories are only run for the framework actually chosen.
pub struct AdapterSet<E> {
    vanilla: AdapterFactory<E>,
    others: FxHashMap<Framework, AdapterFactory<E>>,
}

impl<E: 'static> AdapterSet<E> {
    /// Start a set from the baseline vanilla adapter
    pub fn new<A, F>(vanilla: F) -> Self
    where
        A: Adapter<Element = E> + 'static,
        F: FnOnce() -> A + 'static,
    {
        Self {
            vanilla: boxed_factory(vanilla),
            others: FxHashMap::default(),
        }
    }

    /// Register (or replace) the factory for `framework`
    pub fn with<A, F>(mut self, framework: Framework, factory: F) -> Self
    where
        A: Adapter<Element = E> + 'static,
        F: FnOnce() -> A + 'static,
    {
        match framework {
            Framework::Vanilla => self.vanilla = boxed_factory(factory),
            other => {
                self.others.insert(other, boxed_factory(factory));
            }
        }
        self
    }
}

impl<E> AdapterSet<E> {
    pub fn contains(&self, framework: Framework) -> bool {
        framework == Framework::Vanilla || self.others.contains_key(&framework)
    }

    /// Frameworks with a registered factory
    pub fn frameworks(&self) -> Vec<Framework> {
        Framework::all()
            .iter()
            .copied()
            .filter(|fw| self.contains(*fw))
            .collect()
    }

    /// Build the adapter for `framework`, falling back to vanilla
    pub(crate) fn build(mut self, framework: Framework) -> BoxedAdapter<E> {
        match self.others.remove(&framework) {
            Some(factory) => factory(),
            None => (self.vanilla)(),
        }
    }
}

impl<E> std::fmt::Debug for AdapterSet<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterSet")
            .field("frameworks", &self.frameworks())
            .finish()
    }
}
