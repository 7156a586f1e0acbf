//! Backward pass: latest start dates.
//!
//! A task must start early enough that each successor can still start on
//! its own latest date: `latest_start(t) = min(latest_start(s) - duration(t))`.
//! Terminal tasks take their earliest start. Levels are processed in
//! descending order so successors are settled first. Both variants read
//! the earliest starts left by the forward pass and do not check them.

use crate::network::{Network, TaskId, START, UNCOMPUTED};
use crate::{log_changes, log_debug};

/// Run the whole backward pass.
///
/// Every task starts at `project_end - duration`, then each level (highest
/// first) lowers a task's latest start to any smaller candidate offered by
/// its successors. Values only ever decrease.
pub fn backward_pass(network: &mut Network) {
    let project_end = network.project_end();
    for task in &mut network.tasks {
        task.latest_start = project_end - i64::from(task.duration);
    }
    network.tasks[START as usize].latest_start = 0;

    for level_index in (0..network.levels().len()).rev() {
        let count = network.levels().members(level_index).len();
        for position in 0..count {
            let id = network.levels().members(level_index)[position];
            let task = &network[id];
            let duration = i64::from(task.duration());
            let mut latest = task.latest_start();
            for &succ in task.successors() {
                let candidate = network[succ].latest_start() - duration;
                if candidate < latest {
                    latest = candidate;
                }
            }
            network.tasks[id as usize].latest_start = latest;
        }
        log_debug!(
            network.verbosity,
            "backward: settled level {} (project end {})",
            network.levels().values()[level_index],
            project_end
        );
    }
}

/// Latest start of one task given its already settled successors.
fn latest_from_successors(network: &Network, id: TaskId) -> i64 {
    let task = &network[id];
    if task.successors().is_empty() {
        return task.earliest_start();
    }
    let duration = i64::from(task.duration());
    task.successors()
        .iter()
        .map(|&succ| network[succ].latest_start() - duration)
        .min()
        .unwrap_or(task.earliest_start())
}

/// Drives the backward pass one level per call, highest level first.
///
/// The cursor counts levels already settled; the next level settled is the
/// one at position `len - 1 - cursor`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BackwardStepper {
    cursor: usize,
}

impl BackwardStepper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of levels settled since the last reset.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_finished(&self, network: &Network) -> bool {
        self.cursor >= network.levels().len()
    }

    /// Rewind to the highest level and mark every latest start except
    /// `Start`'s as uncomputed.
    ///
    /// Latest starts are cleared to [`UNCOMPUTED`], not seeded with the
    /// earliest start of `Finish`, so levels the stepper has not reached yet
    /// read as unknown. Once every level is settled the dates equal those
    /// of [`backward_pass`].
    pub fn reset(&mut self, network: &mut Network) {
        self.cursor = 0;
        if !network.is_empty() && network.finish().earliest_start() <= 0 {
            log_changes!(
                network.verbosity,
                "warning: backward pass reset before the forward pass has run"
            );
        }
        for (id, task) in network.tasks.iter_mut().enumerate() {
            task.latest_start = if id as TaskId == START { 0 } else { UNCOMPUTED };
        }
    }

    /// Settle the next level down. Returns whether further levels remain;
    /// past the lowest level this does nothing and returns `false`.
    pub fn step(&mut self, network: &mut Network) -> bool {
        let total = network.levels().len();
        if self.cursor >= total {
            return false;
        }
        let level_index = total - 1 - self.cursor;
        let count = network.levels().members(level_index).len();
        for position in 0..count {
            let id = network.levels().members(level_index)[position];
            let latest = latest_from_successors(network, id);
            network.tasks[id as usize].latest_start = latest;
        }
        log_debug!(
            network.verbosity,
            "backward: stepped level {}",
            network.levels().values()[level_index]
        );
        self.cursor += 1;
        self.cursor < total
    }
}
