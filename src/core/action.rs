//! The `Action` trait for values dispatched to a store.
//!
//! Actions are opaque to the store. The only thing it ever asks of one is
//! its kind, which shows up in tracing output and in the dispatch log.

use std::fmt::Debug;

/// Trait for values that can be dispatched to a store.
///
/// The store never interprets an action; reducers do. `kind` is a
/// discriminator used purely for diagnostics.
///
/// # Example
///
/// ```rust
/// use reducto::core::Action;
///
/// #[derive(Debug, Clone)]
/// enum CounterAction {
///     Increment,
///     Add(i64),
/// }
///
/// impl Action for CounterAction {
///     fn kind(&self) -> &str {
///         match self {
///             Self::Increment => "INCREMENT",
///             Self::Add(_) => "ADD",
///         }
///     }
/// }
///
/// assert_eq!(CounterAction::Add(3).kind(), "ADD");
/// ```
pub trait Action: Debug + Send + Sync {
    /// Name of the action's kind for display/logging.
    fn kind(&self) -> &str;
}

impl Action for &'static str {
    fn kind(&self) -> &str {
        self
    }
}

impl Action for String {
    fn kind(&self) -> &str {
        self.as_str()
    }
}
