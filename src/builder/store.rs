//! Builder for constructing stores.

use crate::builder::error::BuildError;
use crate::core::{Action, BoxedReducer, Reducer};
use crate::store::Store;
use std::sync::Arc;
use tracing::debug;

const DEFAULT_NAME: &str = "store";

/// Builder for configuring a [`Store`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use reducto::Store;
///
/// fn names(state: Option<&Vec<String>>, action: &String) -> Vec<String> {
///     let mut next = state.cloned().unwrap_or_default();
///     if action != "@@INIT" {
///         next.push(action.clone());
///     }
///     next
/// }
///
/// let store = Store::builder()
///     .name("names")
///     .reducer(names)
///     .prime_with("@@INIT".to_string())
///     .log_capacity(16)
///     .build()
///     .unwrap();
///
/// assert_eq!(store.get_state().as_deref(), Some(&Vec::new()));
/// assert_eq!(store.name(), "names");
/// ```
pub struct StoreBuilder<S, A> {
    reducer: Option<BoxedReducer<S, A>>,
    preloaded: Option<S>,
    priming: Option<A>,
    log_capacity: usize,
    name: Option<String>,
}

impl<S, A> StoreBuilder<S, A>
where
    S: Send + Sync + 'static,
    A: Action + 'static,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            reducer: None,
            preloaded: None,
            priming: None,
            log_capacity: 0,
            name: None,
        }
    }

    /// Set the root reducer (required).
    pub fn reducer<R>(mut self, reducer: R) -> Self
    where
        R: Reducer<S, A> + 'static,
    {
        self.reducer = Some(Box::new(reducer));
        self
    }

    /// Start from `state` instead of leaving the cell unset.
    pub fn preloaded_state(mut self, state: S) -> Self {
        self.preloaded = Some(state);
        self
    }

    /// Run `action` through the reducer once while building, so the store
    /// starts out holding the reducer's initial state.
    ///
    /// No listener can exist yet, so nobody is notified, and the priming
    /// step is not counted as a dispatch.
    pub fn prime_with(mut self, action: A) -> Self {
        self.priming = Some(action);
        self
    }

    /// Keep the last `capacity` dispatch records (0 disables the log).
    pub fn log_capacity(mut self, capacity: usize) -> Self {
        self.log_capacity = capacity;
        self
    }

    /// Label attached to the store's tracing events.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Build the store.
    /// Returns an error if the reducer is missing or priming fails.
    pub fn build(self) -> Result<Store<S, A>, BuildError> {
        let reducer = self.reducer.ok_or(BuildError::MissingReducer)?;
        let label: Arc<str> = Arc::from(self.name.as_deref().unwrap_or(DEFAULT_NAME));

        let mut state = self.preloaded;
        if let Some(action) = self.priming {
            let primed = reducer
                .reduce(state.as_ref(), &action)
                .map_err(BuildError::Priming)?;
            debug!(store = %label, action = action.kind(), "primed initial state");
            state = Some(primed);
        }

        Ok(Store::from_parts(reducer, state, self.log_capacity, label))
    }
}

impl<S, A> Default for StoreBuilder<S, A>
where
    S: Send + Sync + 'static,
    A: Action + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
