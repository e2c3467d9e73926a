//! The observable state container.

use super::error::StoreError;
use super::gate::{DispatchGate, ReducingFlag};
use super::listeners::{Listener, Registry, Subscription};
use crate::builder::StoreBuilder;
use crate::core::{Action, BoxedReducer, DispatchLog, DispatchRecord, Reducer};
use chrono::Utc;
use parking_lot::Mutex;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use tracing::{debug, trace};

struct Inner<S, A> {
    label: Arc<str>,
    reducer: BoxedReducer<S, A>,
    state: Mutex<Option<Arc<S>>>,
    listeners: Arc<Mutex<Registry>>,
    log: Mutex<DispatchLog>,
    gate: DispatchGate,
    reducing: AtomicBool,
    dispatched: AtomicU64,
}

/// A single state cell, mutated only by dispatching actions through a reducer.
///
/// `Store` is a handle: clones share the same state, listeners and reducer.
/// The store goes away with its last handle; there is no explicit teardown.
///
/// A listener that needs its own store should capture a [`WeakStore`] from
/// [`downgrade`](Self::downgrade). A captured `Store` clone is a strong
/// reference held by the store itself, so the store would never be freed.
///
/// # Example
///
/// ```rust
/// use reducto::Store;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// fn counter(state: Option<&i64>, action: &&'static str) -> i64 {
///     let count = state.copied().unwrap_or(0);
///     match *action {
///         "INCREMENT" => count + 1,
///         _ => count,
///     }
/// }
///
/// let store = Store::new(counter);
/// assert!(store.get_state().is_none());
///
/// let notified = Arc::new(AtomicUsize::new(0));
/// let seen = Arc::clone(&notified);
/// let subscription = store.subscribe(move || {
///     seen.fetch_add(1, Ordering::SeqCst);
/// });
///
/// store.dispatch("INCREMENT").unwrap();
/// assert_eq!(store.get_state().as_deref(), Some(&1));
/// assert_eq!(notified.load(Ordering::SeqCst), 1);
///
/// subscription.unsubscribe();
/// store.dispatch("INCREMENT").unwrap();
/// assert_eq!(notified.load(Ordering::SeqCst), 1);
/// ```
pub struct Store<S, A> {
    inner: Arc<Inner<S, A>>,
}

impl<S, A> Store<S, A>
where
    S: Send + Sync + 'static,
    A: Action + 'static,
{
    /// Create a store around `reducer`.
    ///
    /// Nothing is computed up front: the state stays unset until the first
    /// dispatch lets the reducer pick its default.
    pub fn new<R>(reducer: R) -> Self
    where
        R: Reducer<S, A> + 'static,
    {
        Self::from_parts(Box::new(reducer), None, 0, Arc::from("store"))
    }

    /// Start configuring a store.
    pub fn builder() -> StoreBuilder<S, A> {
        StoreBuilder::new()
    }

    pub(crate) fn from_parts(
        reducer: BoxedReducer<S, A>,
        state: Option<S>,
        log_capacity: usize,
        label: Arc<str>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                label,
                reducer,
                state: Mutex::new(state.map(Arc::new)),
                listeners: Arc::new(Mutex::new(Registry::default())),
                log: Mutex::new(DispatchLog::with_capacity(log_capacity)),
                gate: DispatchGate::default(),
                reducing: AtomicBool::new(false),
                dispatched: AtomicU64::new(0),
            }),
        }
    }

    /// Current state, or `None` before the first mutation.
    ///
    /// Always the result of the most recently completed dispatch.
    pub fn get_state(&self) -> Option<Arc<S>> {
        self.inner.state.lock().clone()
    }

    /// Run `f` against the current state.
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(Option<&S>) -> R,
    {
        let state = self.get_state();
        f(state.as_deref())
    }

    /// Register `listener` to run after every future dispatch.
    ///
    /// The listener is not called now. Each call creates an independent
    /// registration.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.subscribe_shared(Arc::new(listener))
    }

    /// Register an already shared listener.
    ///
    /// Registering the same `Arc` twice yields two registrations, each removed
    /// only by its own token.
    pub fn subscribe_shared(&self, listener: Listener) -> Subscription {
        let id = self.inner.listeners.lock().insert(listener);
        debug!(store = %self.inner.label, listener = ?id, "subscribed");
        Subscription::new(id, &self.inner.listeners, Arc::clone(&self.inner.label))
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.lock().len()
    }

    /// Apply `action` and notify listeners.
    ///
    /// Listeners registered when the dispatch starts are called in registration
    /// order once the new state is committed. A listener may dispatch again:
    /// the nested dispatch runs its own complete pass before the outer pass
    /// resumes. Listeners added mid-pass first hear about the next dispatch.
    ///
    /// Returns the state this dispatch produced. If the reducer fails the
    /// error is returned, the previous state is kept and nobody is notified.
    /// A panicking reducer or listener unwinds through this call; a reducer
    /// panic leaves the state untouched.
    pub fn dispatch(&self, action: A) -> Result<Arc<S>, StoreError> {
        let inner = &*self.inner;
        let gate = inner.gate.enter();
        if inner.reducing.load(Ordering::SeqCst) {
            return Err(StoreError::DispatchInReducer);
        }

        let listeners = inner.listeners.lock().snapshot();
        let current = self.get_state();

        let reduced = {
            let _reducing = ReducingFlag::raise(&inner.reducing);
            inner.reducer.reduce(current.as_deref(), &action)
        };
        let next = match reduced {
            Ok(next) => Arc::new(next),
            Err(err) => {
                debug!(
                    store = %inner.label,
                    action = action.kind(),
                    error = %err,
                    "reducer failed"
                );
                return Err(err.into());
            }
        };

        *inner.state.lock() = Some(Arc::clone(&next));
        let sequence = inner.dispatched.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut log = inner.log.lock();
            if log.is_enabled() {
                log.record(DispatchRecord {
                    sequence,
                    action: action.kind().to_string(),
                    timestamp: Utc::now(),
                });
            }
        }

        debug!(
            store = %inner.label,
            action = action.kind(),
            sequence,
            depth = gate.depth(),
            listeners = listeners.len(),
            "dispatched"
        );
        for (position, listener) in listeners.iter().enumerate() {
            trace!(store = %inner.label, sequence, position, "notifying listener");
            listener();
        }

        Ok(next)
    }

    /// Number of successful dispatches so far.
    pub fn dispatch_count(&self) -> u64 {
        self.inner.dispatched.load(Ordering::SeqCst)
    }

    /// Retained dispatch records, oldest first. Empty unless the store was
    /// built with a log capacity.
    pub fn dispatch_log(&self) -> Vec<DispatchRecord> {
        self.inner.log.lock().records()
    }

    /// Label used in this store's tracing events.
    pub fn name(&self) -> &str {
        &self.inner.label
    }

    /// Non-owning handle to this store, for listeners that observe it.
    pub fn downgrade(&self) -> WeakStore<S, A> {
        WeakStore {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, A> fmt::Debug for Store<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("name", &self.inner.label)
            .field("initialized", &self.inner.state.lock().is_some())
            .field("listeners", &self.inner.listeners.lock().len())
            .field("dispatched", &self.inner.dispatched.load(Ordering::SeqCst))
            .finish()
    }
}

/// Handle that does not keep its store alive.
///
/// Obtained from [`Store::downgrade`].
pub struct WeakStore<S, A> {
    inner: Weak<Inner<S, A>>,
}

impl<S, A> WeakStore<S, A> {
    /// The store, unless every `Store` handle has been dropped.
    pub fn upgrade(&self) -> Option<Store<S, A>> {
        self.inner.upgrade().map(|inner| Store { inner })
    }
}

impl<S, A> Clone for WeakStore<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<S, A> fmt::Debug for WeakStore<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakStore")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}
