//! Reducer composition.
//!
//! Independently written slice reducers are merged into one root reducer
//! that a single store can own. Two flavours are provided:
//!
//! - `combine_reducers!` declares a typed composite struct, one field per
//!   slice, and generates its reducer.
//! - `CombineReducers` / `combine` build a reducer at runtime over
//!   string-keyed slices of one common type.
//!
//! Either way every slice reducer sees every action, supplies its own
//! default when its slice is absent, and must hand back its input unchanged
//! for actions it does not handle.

mod macros;
mod slices;

pub use slices::{combine, CombineReducers, Combined, Slices};
