//! Pure transition functions.
//!
//! A reducer maps `(current state, action)` to the next state. It must not
//! have side effects or hidden state, must return its input unchanged when an
//! action does not concern it, and must pick a default when there is no
//! state yet.

use super::error::ReducerError;

/// Pure transition function from `(Option<&S>, &A)` to the next `S`.
///
/// `state` is `None` before the first mutation of a lazily initialised store
/// (and for an absent slice in a combined reducer); the reducer substitutes
/// its own default in that case.
///
/// Any `Fn(Option<&S>, &A) -> S` closure or fn item is an infallible reducer.
/// Use [`fallible`] for reducers that can reject an action.
///
/// # Example
///
/// ```rust
/// use reducto::core::Reducer;
///
/// fn counter(state: Option<&i64>, action: &&'static str) -> i64 {
///     let count = state.copied().unwrap_or(0);
///     match *action {
///         "INCREMENT" => count + 1,
///         "DECREMENT" => count - 1,
///         _ => count,
///     }
/// }
///
/// assert_eq!(counter.reduce(None, &"INCREMENT"), Ok(1));
/// assert_eq!(counter.reduce(Some(&5), &"RESET?"), Ok(5));
/// ```
pub trait Reducer<S, A>: Send + Sync {
    /// Compute the next state.
    fn reduce(&self, state: Option<&S>, action: &A) -> Result<S, ReducerError>;
}

impl<S, A, F> Reducer<S, A> for F
where
    F: Fn(Option<&S>, &A) -> S + Send + Sync,
{
    fn reduce(&self, state: Option<&S>, action: &A) -> Result<S, ReducerError> {
        Ok(self(state, action))
    }
}

/// Boxed reducer, as stored by the store and the dynamic combinator.
pub type BoxedReducer<S, A> = Box<dyn Reducer<S, A>>;

/// Plain fallible reducer function pointer.
pub type ReduceFn<S, A> = fn(Option<&S>, &A) -> Result<S, ReducerError>;

/// Reducer built from a closure that may fail.
///
/// Created with [`fallible`].
pub struct Fallible<F>(F);

impl<S, A, F> Reducer<S, A> for Fallible<F>
where
    F: Fn(Option<&S>, &A) -> Result<S, ReducerError> + Send + Sync,
{
    fn reduce(&self, state: Option<&S>, action: &A) -> Result<S, ReducerError> {
        (self.0)(state, action)
    }
}

/// Turn a `Result`-returning closure into a reducer.
///
/// # Example
///
/// ```rust
/// use reducto::core::{fallible, Reducer, ReducerError};
///
/// let positive = fallible(|state: Option<&u32>, delta: &i64| {
///     let next = i64::from(state.copied().unwrap_or(0)) + delta;
///     u32::try_from(next).map_err(|_| ReducerError::Custom("below zero".into()))
/// });
///
/// assert_eq!(positive.reduce(Some(&2), &-1), Ok(1));
/// assert!(positive.reduce(Some(&0), &-1).is_err());
/// ```
pub fn fallible<S, A, F>(f: F) -> Fallible<F>
where
    F: Fn(Option<&S>, &A) -> Result<S, ReducerError> + Send + Sync,
{
    Fallible(f)
}

/// Identity helper that pins a closure to the reducer signature.
///
/// Closures passed straight to a generic `R: Reducer<S, A>` parameter need
/// their argument types spelled out; routing them through this function lets
/// the compiler infer them instead.
pub fn reducer<S, A, F>(f: F) -> F
where
    F: Fn(Option<&S>, &A) -> S + Send + Sync,
{
    f
}
