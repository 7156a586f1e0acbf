//! Types for critical path analysis.

use crate::network::{Network, TaskId};

/// An ordered chain of tasks, each a predecessor of the next.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CriticalPath {
    tasks: Vec<TaskId>,
}

impl CriticalPath {
    pub fn new(tasks: Vec<TaskId>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[TaskId] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn names<'a>(&self, network: &'a Network) -> Vec<&'a str> {
        network.names(&self.tasks)
    }

    /// Sum of task durations along the path.
    pub fn duration(&self, network: &Network) -> i64 {
        self.tasks
            .iter()
            .map(|&id| i64::from(network[id].duration()))
            .sum()
    }

    /// True when every consecutive pair is linked predecessor -> successor.
    pub fn is_chain(&self, network: &Network) -> bool {
        self.tasks
            .windows(2)
            .all(|pair| network[pair[0]].successors().contains(&pair[1]))
    }

    pub fn into_tasks(self) -> Vec<TaskId> {
        self.tasks
    }
}

impl From<Vec<TaskId>> for CriticalPath {
    fn from(tasks: Vec<TaskId>) -> Self {
        Self::new(tasks)
    }
}
