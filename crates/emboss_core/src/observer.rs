//! Ordered observer registry
//!
//! Callbacks are kept in registration order and invoked in that order.
//! Removal preserves the order of the remaining observers.

use indexmap::IndexMap;
use std::sync::Arc;

/// Identifier returned when registering an observer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

impl ObserverId {
    pub fn to_raw(self) -> u64 {
        self.0
    }
}

/// A shared observer callback
pub type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Registry of callbacks notified with a `&T`
pub struct Observers<T> {
    next_id: u64,
    entries: IndexMap<ObserverId, Callback<T>>,
}

impl<T> Observers<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: IndexMap::new(),
        }
    }

    /// Register a callback
    pub fn insert<F>(&mut self, callback: F) -> ObserverId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, Arc::new(callback));
        id
    }

    /// Remove a callback, returning whether it was registered
    pub fn remove(&mut self, id: ObserverId) -> bool {
        self.entries.shift_remove(&id).is_some()
    }

    pub fn contains(&self, id: ObserverId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Clone the callback handles in registration order
    ///
    /// Callers holding a lock around the registry take a snapshot, release
    /// the lock, then invoke, so callbacks may re-enter the owner.
    pub fn snapshot(&self) -> Vec<Callback<T>> {
        self.entries.values().cloned().collect()
    }

    /// Invoke every callback in registration order
    pub fn notify(&self, value: &T) {
        for callback in self.entries.values() {
            callback(value);
        }
    }
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self::new()
    }
}
