//! Topological stratification of the task network.

use std::collections::BTreeMap;

use crate::log_debug;

use super::builder::NetworkError;
use super::task::{Task, TaskId, TaskKind};

/// Distinct level values of a network, ascending, with the tasks at each.
///
/// `Start` (level 0) is never a member; every other node, `Finish`
/// included, belongs to exactly one level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Levels {
    values: Vec<u32>,
    members: Vec<Vec<TaskId>>,
}

impl Levels {
    fn from_tasks(tasks: &[Task]) -> Self {
        let mut by_level: BTreeMap<u32, Vec<TaskId>> = BTreeMap::new();
        for (id, task) in tasks.iter().enumerate() {
            if task.kind != TaskKind::Start {
                by_level.entry(task.level).or_default().push(id as TaskId);
            }
        }
        let (values, members): (Vec<u32>, Vec<Vec<TaskId>>) = by_level.into_iter().unzip();
        Self { values, members }
    }

    /// Number of distinct levels.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Level values in ascending order.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Tasks at the level stored at position `index`, in arena order.
    pub fn members(&self, index: usize) -> &[TaskId] {
        self.members.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Tasks whose level value is `level`.
    pub fn tasks_at(&self, level: u32) -> &[TaskId] {
        match self.values.binary_search(&level) {
            Ok(index) => &self.members[index],
            Err(_) => &[],
        }
    }
}

/// Assign every node its level by fixed-point iteration.
///
/// Each scan sets `level(t) = max(1, max(level(p) + 1))` over the
/// predecessors of `t`; `Start` keeps level 0. Scans repeat until one
/// changes nothing. Insertion order does not matter, but an acyclic network
/// always settles within `n + 1` scans (n = nodes other than `Start`), so a
/// network still changing after that many scans has a cycle.
pub(crate) fn compute_levels(tasks: &mut [Task], verbosity: u8) -> Result<Levels, NetworkError> {
    let max_passes = tasks.len().saturating_sub(1) + 1;

    for pass in 1..=max_passes {
        let mut changed = false;

        for id in 0..tasks.len() {
            if tasks[id].kind == TaskKind::Start {
                continue;
            }
            let level = tasks[id]
                .predecessors
                .iter()
                .map(|&pred| tasks[pred as usize].level + 1)
                .fold(1, u32::max);
            if tasks[id].level != level {
                tasks[id].level = level;
                changed = true;
            }
        }

        if !changed {
            let levels = Levels::from_tasks(tasks);
            log_debug!(
                verbosity,
                "levels settled after {} scan(s): {:?}",
                pass,
                levels.values()
            );
            return Ok(levels);
        }
    }

    Err(NetworkError::CircularDependency { passes: max_passes })
}
