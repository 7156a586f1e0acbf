//! Slack (margin) computation.

use crate::network::Network;

/// Set `slack = latest_start - earliest_start` on every task.
///
/// Recomputed from the current dates on every call; run it after both
/// passes have finished.
pub fn compute_slack(network: &mut Network) {
    for task in &mut network.tasks {
        task.compute_slack();
    }
}
