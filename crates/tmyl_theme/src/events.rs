//! Change notifications for the token store and theme registry
//!
//! Both publishers keep a [`Listeners`] list; the style applier and any
//! host-side re-render hook subscribe to it. Delivery is synchronous, in
//! subscription order, inside the call that made the change.

use std::sync::Arc;

use crate::theme::ThemeRecord;
use crate::tokens::TokenMap;

/// Handle returned by `subscribe`, used to unsubscribe later
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Callback invoked for each published event
pub type Listener<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// Emitted by the theme registry whenever the active theme is (re)applied
#[derive(Clone, Debug)]
pub struct ThemeEvent {
    /// Name of the theme that was active before the switch
    pub previous: String,
    /// The now-active record
    pub current: ThemeRecord,
}

/// Emitted by the token store after every update or reset
#[derive(Clone, Debug)]
pub struct TokensEvent {
    pub tokens: TokenMap,
}

/// Ordered listener list
pub struct Listeners<E> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener<E>)>,
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<E> Listeners<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: Listener<E>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Remove a listener. Returns false if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn emit(&self, event: &E) {
        for (_, listener) in &self.entries {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> std::fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_emit_in_subscription_order() {
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let mut listeners: Listeners<u32> = Listeners::new();

        let first = seen.clone();
        listeners.subscribe(Arc::new(move |v: &u32| first.lock().unwrap().push(("a", *v))));
        let second = seen.clone();
        listeners.subscribe(Arc::new(move |v: &u32| second.lock().unwrap().push(("b", *v))));

        listeners.emit(&7);
        assert_eq!(*seen.lock().unwrap(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut listeners: Listeners<()> = Listeners::new();

        let c = count.clone();
        let id = listeners.subscribe(Arc::new(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        }));

        listeners.emit(&());
        assert!(listeners.unsubscribe(id));
        assert!(!listeners.unsubscribe(id));
        listeners.emit(&());

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(listeners.is_empty());
    }
}
