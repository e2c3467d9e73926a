//! Store error types.

use crate::core::ReducerError;
use thiserror::Error;

/// Errors returned by [`Store::dispatch`](crate::Store::dispatch).
///
/// Whenever `dispatch` returns one of these, the store still holds the state
/// it had before the call and no listener was invoked for it.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The root reducer failed
    #[error("Reducer failed: {0}")]
    Reducer(#[from] ReducerError),

    /// The reducer tried to dispatch on the store it is reducing for
    #[error("Reducers may not dispatch actions")]
    DispatchInReducer,
}
