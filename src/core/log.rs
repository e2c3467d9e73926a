//! Dispatch log.
//!
//! A bounded record of which actions a store applied and when. Records carry
//! the action kind only, never the states themselves.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Record of a single successful dispatch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DispatchRecord {
    /// Position of this dispatch in the store's lifetime, starting at 1
    pub sequence: u64,
    /// Kind of the dispatched action
    pub action: String,
    /// When the new state was committed
    pub timestamp: DateTime<Utc>,
}

/// Ordered, bounded history of dispatch records.
///
/// Once `capacity` records are held, recording another drops the oldest.
/// A capacity of zero disables the log.
///
/// # Example
///
/// ```rust
/// use reducto::core::{DispatchLog, DispatchRecord};
/// use chrono::Utc;
///
/// let mut log = DispatchLog::with_capacity(2);
/// for (sequence, action) in [(1, "ADD"), (2, "REMOVE"), (3, "ADD")] {
///     log.record(DispatchRecord {
///         sequence,
///         action: action.to_string(),
///         timestamp: Utc::now(),
///     });
/// }
///
/// let kept: Vec<_> = log.records().into_iter().map(|r| r.sequence).collect();
/// assert_eq!(kept, vec![2, 3]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DispatchLog {
    capacity: usize,
    records: VecDeque<DispatchRecord>,
}

impl DispatchLog {
    /// Create a log holding at most `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            records: VecDeque::with_capacity(capacity),
        }
    }

    /// Whether the log keeps anything at all.
    pub fn is_enabled(&self) -> bool {
        self.capacity > 0
    }

    /// Append a record, evicting the oldest one when full.
    pub fn record(&mut self, record: DispatchRecord) {
        if !self.is_enabled() {
            return;
        }
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    /// All retained records, oldest first.
    pub fn records(&self) -> Vec<DispatchRecord> {
        self.records.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
