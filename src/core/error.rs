//! Reducer error types.

use thiserror::Error;

/// Errors a reducer can fail with.
///
/// A failing reducer aborts the dispatch that invoked it: the store keeps its
/// previous state and no listener runs.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReducerError {
    /// The reducer refused to apply an action to the current state
    #[error("Action '{action}' rejected: {reason}")]
    Rejected { action: String, reason: String },

    /// A slice reducer inside a combined reducer failed
    #[error("Slice '{key}' failed: {source}")]
    Slice {
        key: String,
        #[source]
        source: Box<ReducerError>,
    },

    /// Free-form failure
    #[error("{0}")]
    Custom(String),
}

impl ReducerError {
    /// Build a `Rejected` error for the given action kind.
    pub fn rejected(action: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Rejected {
            action: action.into(),
            reason: reason.into(),
        }
    }

    /// Wrap this error as the failure of the slice named `key`.
    pub fn in_slice(self, key: impl Into<String>) -> Self {
        Self::Slice {
            key: key.into(),
            source: Box::new(self),
        }
    }

    /// Path of slice keys leading to the innermost failure, outermost first.
    pub fn slice_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        let mut current = self;
        while let Self::Slice { key, source } = current {
            path.push(key.as_str());
            current = source;
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_formats_action_and_reason() {
        let err = ReducerError::rejected("ADD_TODO", "duplicate id");
        assert_eq!(err.to_string(), "Action 'ADD_TODO' rejected: duplicate id");
    }

    #[test]
    fn nested_slices_report_their_path() {
        let err = ReducerError::Custom("boom".into())
            .in_slice("items")
            .in_slice("todos");

        assert_eq!(err.slice_path(), vec!["todos", "items"]);
        assert_eq!(err.to_string(), "Slice 'todos' failed: Slice 'items' failed: boom");
    }

    #[test]
    fn plain_errors_have_empty_path() {
        assert!(ReducerError::Custom("x".into()).slice_path().is_empty());
    }
}
