//! Forward pass: earliest start dates.
//!
//! A task may start once every predecessor has finished, so
//! `earliest_start(t) = max(0, max(earliest_start(p) + duration(p)))`.
//! Levels are processed in ascending order, which guarantees every
//! predecessor is settled before its successors read it.

use crate::log_debug;
use crate::network::{Network, TaskId, START, UNCOMPUTED};

fn earliest_from_predecessors(network: &Network, id: TaskId) -> i64 {
    network[id]
        .predecessors()
        .iter()
        .map(|&pred| {
            let pred = &network[pred];
            pred.earliest_start() + i64::from(pred.duration())
        })
        .fold(0, i64::max)
}

/// Recompute earliest starts for the level at position `level_index`.
fn settle_level(network: &mut Network, level_index: usize) {
    let count = network.levels().members(level_index).len();
    for position in 0..count {
        let id = network.levels().members(level_index)[position];
        let earliest = earliest_from_predecessors(network, id);
        network.tasks[id as usize].earliest_start = earliest;
    }
    log_debug!(
        network.verbosity,
        "forward: settled level {} ({} task(s))",
        network.levels().values()[level_index],
        count
    );
}

/// Run the whole forward pass.
pub fn forward_pass(network: &mut Network) {
    for task in &mut network.tasks {
        task.earliest_start = 0;
    }
    for level_index in 0..network.levels().len() {
        settle_level(network, level_index);
    }
}

/// Drives the forward pass one level per call.
///
/// The cursor is the position (in [`Levels`](crate::Levels)) of the next
/// level to settle. Steppers hold no reference to the network, so a forward
/// and a backward stepper can be driven and reset independently.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForwardStepper {
    cursor: usize,
}

impl ForwardStepper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of the next level to settle.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_finished(&self, network: &Network) -> bool {
        self.cursor >= network.levels().len()
    }

    /// Rewind to the first level and mark every date except `Start`'s as
    /// uncomputed.
    pub fn reset(&mut self, network: &mut Network) {
        self.cursor = 0;
        for (id, task) in network.tasks.iter_mut().enumerate() {
            task.earliest_start = if id as TaskId == START { 0 } else { UNCOMPUTED };
        }
    }

    /// Settle the next level. Returns whether further levels remain; past
    /// the last level this does nothing and returns `false`.
    pub fn step(&mut self, network: &mut Network) -> bool {
        let total = network.levels().len();
        if self.cursor >= total {
            return false;
        }
        settle_level(network, self.cursor);
        self.cursor += 1;
        self.cursor < total
    }
}
