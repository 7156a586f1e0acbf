//! The task network: an arena of tasks linked by precedence.
//!
//! A [`Network`] is built once from task records and never patched; any
//! change to the records means building a new one. Dates and slack live on
//! the tasks and are filled in by the propagation passes.

mod builder;
mod index;
mod levels;
mod task;

use std::ops::Index;

pub use builder::{build_network, NetworkError};
pub(crate) use builder::predecessor_names;
pub use index::TaskIndex;
pub use levels::Levels;
pub use task::{Task, TaskId, TaskKind, FINISH, FINISH_NAME, START, START_NAME, UNCOMPUTED};

/// A predecessor name that matched no record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnresolvedReference {
    pub task: String,
    pub predecessor: String,
}

/// Leveled task graph with `Start` and `Finish` boundary nodes.
#[derive(Clone, Debug)]
pub struct Network {
    pub(crate) tasks: Vec<Task>,
    index: TaskIndex,
    levels: Levels,
    unresolved: Vec<UnresolvedReference>,
    pub(crate) verbosity: u8,
}

impl Network {
    /// Number of nodes, boundaries included.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// True when the network holds no record tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.len() <= 2
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(id as usize)
    }

    /// Look up a record task by name.
    pub fn find(&self, name: &str) -> Option<TaskId> {
        self.index.get(name)
    }

    pub fn start(&self) -> &Task {
        &self.tasks[START as usize]
    }

    pub fn finish(&self) -> &Task {
        &self.tasks[FINISH as usize]
    }

    /// All nodes in arena order: `Start`, `Finish`, then records in order.
    pub fn iter(&self) -> impl Iterator<Item = (TaskId, &Task)> {
        self.tasks
            .iter()
            .enumerate()
            .map(|(id, task)| (id as TaskId, task))
    }

    /// Record tasks only, in record order.
    pub fn work_tasks(&self) -> impl Iterator<Item = (TaskId, &Task)> {
        self.iter().filter(|(_, task)| !task.is_boundary())
    }

    pub fn levels(&self) -> &Levels {
        &self.levels
    }

    pub fn tasks_at_level(&self, level: u32) -> &[TaskId] {
        self.levels.tasks_at(level)
    }

    /// Predecessor references dropped while building.
    pub fn unresolved_predecessors(&self) -> &[UnresolvedReference] {
        &self.unresolved
    }

    /// Latest earliest-finish over all computed tasks, 0 if none is computed.
    pub fn project_end(&self) -> i64 {
        self.tasks
            .iter()
            .filter_map(Task::earliest_finish)
            .fold(0, i64::max)
    }

    /// Names of the given tasks, in order.
    pub fn names(&self, ids: &[TaskId]) -> Vec<&str> {
        ids.iter().map(|&id| self[id].name()).collect()
    }
}

impl Index<TaskId> for Network {
    type Output = Task;

    fn index(&self, id: TaskId) -> &Task {
        &self.tasks[id as usize]
    }
}
