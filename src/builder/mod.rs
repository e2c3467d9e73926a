//! Builder API for store construction.
//!
//! `create_store` covers the common case of a lazily initialised store;
//! `StoreBuilder` exposes the remaining knobs.

pub mod error;
pub mod store;

pub use error::BuildError;
pub use store::StoreBuilder;

use crate::core::{Action, Reducer};
use crate::store::Store;

/// Create a lazily initialised store around `reducer`.
///
/// # Example
///
/// ```
/// use reducto::builder::create_store;
///
/// fn todos(state: Option<&Vec<String>>, action: &String) -> Vec<String> {
///     let mut next = state.cloned().unwrap_or_default();
///     if let Some(todo) = action.strip_prefix("ADD ") {
///         next.push(todo.to_string());
///     }
///     next
/// }
///
/// let store = create_store(todos);
/// assert!(store.get_state().is_none());
///
/// store.dispatch("ADD learn rust".to_string()).unwrap();
/// assert_eq!(store.get_state().unwrap().as_slice(), ["learn rust"]);
/// ```
pub fn create_store<S, A, R>(reducer: R) -> Store<S, A>
where
    S: Send + Sync + 'static,
    A: Action + 'static,
    R: Reducer<S, A> + 'static,
{
    Store::new(reducer)
}
