//! Core vocabulary of the container.
//!
//! This module contains the pure pieces the store is built from:
//! - Actions via the `Action` trait
//! - Reducers via the `Reducer` trait and its closure adapters
//! - The reducer error taxonomy
//! - The bounded dispatch log
//!
//! Nothing in here holds shared mutable state.

mod action;
mod error;
mod log;
mod reducer;

pub use action::Action;
pub use error::ReducerError;
pub use log::{DispatchLog, DispatchRecord};
pub use reducer::{fallible, reducer, BoxedReducer, Fallible, ReduceFn, Reducer};
