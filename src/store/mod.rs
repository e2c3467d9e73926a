//! The store: one state cell, one reducer, many listeners.
//!
//! This is the "imperative shell" around the pure core. It owns the only
//! mutable state in the crate and brokers every read, write and
//! notification of it.

mod error;
mod gate;
mod listeners;
#[allow(clippy::module_inception)]
mod store;

pub use error::StoreError;
pub use listeners::{Listener, ListenerId, Subscription};
pub use store::{Store, WeakStore};
