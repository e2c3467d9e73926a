//! Runtime reducer composition over string-keyed slices.

use crate::core::{BoxedReducer, Reducer, ReducerError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Composite state produced by a [`Combined`] reducer: one value per key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slices<S> {
    slices: BTreeMap<String, S>,
}

impl<S> Slices<S> {
    pub fn new() -> Self {
        Self {
            slices: BTreeMap::new(),
        }
    }

    /// The slice stored under `key`.
    pub fn get(&self, key: &str) -> Option<&S> {
        self.slices.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.slices.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &S)> {
        self.slices.iter().map(|(key, slice)| (key.as_str(), slice))
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

impl<S> Default for Slices<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, S> FromIterator<(K, S)> for Slices<S> {
    fn from_iter<I: IntoIterator<Item = (K, S)>>(iter: I) -> Self {
        Self {
            slices: iter.into_iter().map(|(key, slice)| (key.into(), slice)).collect(),
        }
    }
}

/// Builder for a [`Combined`] reducer.
///
/// # Example
///
/// ```rust
/// use reducto::combine::CombineReducers;
/// use reducto::core::Reducer;
///
/// fn visits(state: Option<&u32>, action: &&'static str) -> u32 {
///     let count = state.copied().unwrap_or(0);
///     if *action == "VISIT" { count + 1 } else { count }
/// }
///
/// fn errors(state: Option<&u32>, action: &&'static str) -> u32 {
///     let count = state.copied().unwrap_or(0);
///     if *action == "ERROR" { count + 1 } else { count }
/// }
///
/// let root = CombineReducers::new()
///     .slice("visits", visits)
///     .slice("errors", errors)
///     .build();
///
/// let state = root.reduce(None, &"VISIT").unwrap();
/// assert_eq!(state.get("visits"), Some(&1));
/// assert_eq!(state.get("errors"), Some(&0));
/// ```
pub struct CombineReducers<S, A> {
    slices: Vec<(String, BoxedReducer<S, A>)>,
}

impl<S, A> CombineReducers<S, A> {
    pub fn new() -> Self {
        Self { slices: Vec::new() }
    }

    /// Map `key` to `reducer`.
    ///
    /// Registering a key twice replaces its reducer in place.
    pub fn slice<R>(mut self, key: impl Into<String>, reducer: R) -> Self
    where
        R: Reducer<S, A> + 'static,
    {
        self.insert(key.into(), Box::new(reducer));
        self
    }

    fn insert(&mut self, key: String, reducer: BoxedReducer<S, A>) {
        match self.slices.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = reducer,
            None => self.slices.push((key, reducer)),
        }
    }

    /// Finish the mapping.
    pub fn build(self) -> Combined<S, A> {
        Combined {
            slices: self.slices,
        }
    }
}

impl<S, A> Default for CombineReducers<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Combine `(key, reducer)` pairs into one reducer over [`Slices`].
pub fn combine<S, A, K, I>(mapping: I) -> Combined<S, A>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, BoxedReducer<S, A>)>,
{
    let mut builder = CombineReducers::new();
    for (key, reducer) in mapping {
        builder.insert(key.into(), reducer);
    }
    builder.build()
}

/// Root reducer that runs one reducer per key.
///
/// Every slice reducer sees every action. The result is always a freshly
/// built composite holding exactly the mapped keys; keys of the incoming
/// state that have no reducer are dropped.
pub struct Combined<S, A> {
    slices: Vec<(String, BoxedReducer<S, A>)>,
}

impl<S, A> Reducer<Slices<S>, A> for Combined<S, A> {
    fn reduce(&self, state: Option<&Slices<S>>, action: &A) -> Result<Slices<S>, ReducerError> {
        let mut next = BTreeMap::new();
        for (key, reducer) in &self.slices {
            let slice = state.and_then(|composite| composite.get(key));
            let reduced = reducer
                .reduce(slice, action)
                .map_err(|err| err.in_slice(key.as_str()))?;
            next.insert(key.clone(), reduced);
        }
        Ok(Slices { slices: next })
    }
}
