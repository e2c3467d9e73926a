//! Build errors for the store builder.

use crate::core::ReducerError;
use thiserror::Error;

/// Errors that can occur when building a store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Reducer not specified. Call .reducer(r) before .build()")]
    MissingReducer,

    #[error("Priming action failed: {0}")]
    Priming(#[source] ReducerError),
}
