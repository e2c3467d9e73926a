//! Listener registry and unsubscribe tokens.

use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use tracing::debug;

/// Zero-argument callback invoked after every dispatch.
pub type Listener = Arc<dyn Fn() + Send + Sync>;

/// Identifies one registration within a store.
///
/// Ids grow monotonically, so ordering by id is ordering by registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

/// Registrations keyed by id.
#[derive(Default)]
pub(crate) struct Registry {
    next_id: u64,
    entries: BTreeMap<ListenerId, Listener>,
}

impl Registry {
    pub(crate) fn insert(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, listener);
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        self.entries.remove(&id).is_some()
    }

    pub(crate) fn contains(&self, id: ListenerId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Listeners in registration order, detached from later changes.
    pub(crate) fn snapshot(&self) -> Vec<Listener> {
        self.entries.values().cloned().collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Single-use capability that removes one listener registration.
///
/// Returned by [`Store::subscribe`](crate::Store::subscribe). Calling
/// [`unsubscribe`](Self::unsubscribe) more than once is a no-op, and it never
/// touches any other registration, even one made with the very same callback.
///
/// Dropping the token leaves the listener registered. The token only holds a
/// weak reference to the registry, so it does not keep the store alive.
pub struct Subscription {
    id: ListenerId,
    registry: Weak<Mutex<Registry>>,
    active: AtomicBool,
    label: Arc<str>,
}

impl Subscription {
    pub(crate) fn new(id: ListenerId, registry: &Arc<Mutex<Registry>>, label: Arc<str>) -> Self {
        Self {
            id,
            registry: Arc::downgrade(registry),
            active: AtomicBool::new(true),
            label,
        }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Remove the associated registration.
    pub fn unsubscribe(&self) {
        if !self.active.swap(false, Ordering::SeqCst) {
            return;
        }
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let removed = registry.lock().remove(self.id);
        debug!(store = %self.label, listener = ?self.id, removed, "unsubscribed");
    }

    /// Whether the registration still exists.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
            && self
                .registry
                .upgrade()
                .is_some_and(|registry| registry.lock().contains(self.id))
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("store", &self.label)
            .field("id", &self.id)
            .field("active", &self.active.load(Ordering::SeqCst))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counting(counter: &Arc<AtomicUsize>) -> Listener {
        let counter = Arc::clone(counter);
        Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    fn fire(listeners: &[Listener]) {
        for listener in listeners {
            listener();
        }
    }

    #[test]
    fn ids_follow_registration_order() {
        let mut registry = Registry::default();
        let counter = Arc::new(AtomicUsize::new(0));

        let first = registry.insert(counting(&counter));
        let second = registry.insert(counting(&counter));

        assert!(first < second);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn remove_only_drops_one_entry() {
        let mut registry = Registry::default();
        let counter = Arc::new(AtomicUsize::new(0));
        let shared = counting(&counter);

        let first = registry.insert(Arc::clone(&shared));
        let _second = registry.insert(shared);

        assert!(registry.remove(first));
        assert!(!registry.remove(first));

        fire(&registry.snapshot());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn snapshot_ignores_later_inserts() {
        let mut registry = Registry::default();
        let counter = Arc::new(AtomicUsize::new(0));
        registry.insert(counting(&counter));

        let snapshot = registry.snapshot();
        registry.insert(counting(&counter));

        fire(&snapshot);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unsubscribe_is_idempotent() {
        let registry = Arc::new(Mutex::new(Registry::default()));
        let counter = Arc::new(AtomicUsize::new(0));
        let id = registry.lock().insert(counting(&counter));
        let subscription = Subscription::new(id, &registry, Arc::from("test"));

        assert!(subscription.is_active());
        subscription.unsubscribe();
        subscription.unsubscribe();

        assert!(!subscription.is_active());
        assert_eq!(registry.lock().len(), 0);
    }

    #[test]
    fn token_outliving_registry_is_harmless() {
        let registry = Arc::new(Mutex::new(Registry::default()));
        let counter = Arc::new(AtomicUsize::new(0));
        let id = registry.lock().insert(counting(&counter));
        let subscription = Subscription::new(id, &registry, Arc::from("test"));

        drop(registry);

        assert!(!subscription.is_active());
        subscription.unsubscribe();
    }
}
