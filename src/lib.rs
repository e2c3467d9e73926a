//! Reducto: a minimal observable state container
//!
//! A store holds exactly one state value. The only way to change it is to
//! dispatch an action, which runs the store's reducer (a pure function of the
//! current state and the action) and then notifies every subscribed listener.
//!
//! # Core Concepts
//!
//! - **Action**: an opaque value describing what happened, see the `Action` trait
//! - **Reducer**: a pure `(Option<&S>, &A) -> S` transition, see the `Reducer` trait
//! - **Store**: the state cell plus its listeners, see `Store`
//! - **Composition**: slice reducers merged into one root reducer, see `combine`
//!
//! # Example
//!
//! ```rust
//! use reducto::{Action, Store};
//! use std::sync::{Arc, Mutex};
//!
//! #[derive(Debug)]
//! enum TodoAction {
//!     Add(String),
//!     Clear,
//! }
//!
//! impl Action for TodoAction {
//!     fn kind(&self) -> &str {
//!         match self {
//!             Self::Add(_) => "ADD_TODO",
//!             Self::Clear => "CLEAR_TODOS",
//!         }
//!     }
//! }
//!
//! fn todos(state: Option<&Vec<String>>, action: &TodoAction) -> Vec<String> {
//!     let todos = state.cloned().unwrap_or_default();
//!     match action {
//!         TodoAction::Add(todo) => {
//!             let mut next = todos;
//!             next.push(todo.clone());
//!             next
//!         }
//!         TodoAction::Clear => Vec::new(),
//!     }
//! }
//!
//! let store = Store::new(todos);
//! let lengths = Arc::new(Mutex::new(Vec::new()));
//!
//! let observed = store.downgrade();
//! let seen = Arc::clone(&lengths);
//! store.subscribe(move || {
//!     let len = observed
//!         .upgrade()
//!         .and_then(|store| store.get_state())
//!         .map_or(0, |todos| todos.len());
//!     seen.lock().unwrap().push(len);
//! });
//!
//! store.dispatch(TodoAction::Add("learn reducers".into())).unwrap();
//! store.dispatch(TodoAction::Clear).unwrap();
//!
//! assert_eq!(*lengths.lock().unwrap(), vec![1, 0]);
//! ```

pub mod builder;
pub mod combine;
pub mod core;
pub mod store;

// Re-export commonly used types
pub use builder::{create_store, BuildError, StoreBuilder};
pub use combine::{combine, CombineReducers, Combined, Slices};
pub use crate::core::{fallible, reducer, Action, DispatchRecord, Reducer, ReducerError};
pub use store::{Store, StoreError, Subscription, WeakStore};
