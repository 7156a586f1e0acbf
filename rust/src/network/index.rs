//! Name lookup for the task arena.
//!
//! Maps record names to arena slots so predecessor lists can be resolved
//! into links without scanning the whole network.

use rustc_hash::FxHashMap;

use super::task::TaskId;

/// Name -> arena slot map for the work tasks of one network.
///
/// Boundary nodes are not registered, so a record can never name `Start`
/// or `Finish` as a predecessor.
#[derive(Debug, Clone, Default)]
pub struct TaskIndex {
    by_name: FxHashMap<String, TaskId>,
}

impl TaskIndex {
    /// Create an index with room for `capacity` names.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            by_name: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Register `name` at `id`. A later registration of the same name wins.
    pub fn insert(&mut self, name: &str, id: TaskId) {
        self.by_name.insert(name.to_string(), id);
    }

    /// Get the arena slot for a name, if it exists.
    #[inline]
    pub fn get(&self, name: &str) -> Option<TaskId> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
