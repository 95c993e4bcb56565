//! Mock graph sources for testing
//!
//! `MockGraphSource` serves canned edges and items while recording every
//! read it answers, so tests can assert not just on results but on whether
//! the store was touched at all.

use super::{GraphSource, StoreError};
use crate::primitives::Item;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

/// One recorded read against the mock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceCall {
    Dependees(i64),
    Items(i64),
}

/// Canned [`GraphSource`] with call recording.
#[derive(Debug, Default)]
pub struct MockGraphSource {
    dependees: HashMap<i64, BTreeSet<i64>>,
    items: HashMap<i64, Vec<Item>>,
    fail: bool,
    calls: Arc<Mutex<Vec<SourceCall>>>,
}

impl MockGraphSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source whose every read fails with `StoreError::Unavailable`.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_dependency(mut self, dependent: i64, dependee: i64) -> Self {
        self.dependees.entry(dependent).or_default().insert(dependee);
        self
    }

    pub fn with_item(mut self, module: i64, item: Item) -> Self {
        self.items.entry(module).or_default().push(item);
        self
    }

    /// Snapshot of the reads answered so far, in order.
    pub fn calls(&self) -> Vec<SourceCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: SourceCall) -> Result<(), StoreError> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            return Err(StoreError::Unavailable {
                reason: "mock source configured to fail".to_string(),
            });
        }
        Ok(())
    }
}

impl GraphSource for MockGraphSource {
    fn dependees_of(&self, module: i64) -> Result<BTreeSet<i64>, StoreError> {
        self.record(SourceCall::Dependees(module))?;
        Ok(self.dependees.get(&module).cloned().unwrap_or_default())
    }

    fn items_of(&self, module: i64) -> Result<Vec<Item>, StoreError> {
        self.record(SourceCall::Items(module))?;
        Ok(self.items.get(&module).cloned().unwrap_or_default())
    }
}

/// Shorthand for a value-only item, the shape closure queries return.
pub fn value_item(value: &str) -> Item {
    Item {
        id: 0,
        value: value.to_string(),
        item_type: String::new(),
        version: String::new(),
    }
}
