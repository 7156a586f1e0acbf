//! Single critical path by greedy backward walk.

use crate::log_checks;
use crate::network::{Network, TaskId, FINISH, START};

use super::types::CriticalPath;

/// Zero-slack predecessor with the smallest level; the first one found
/// wins a tie.
fn critical_predecessor(network: &Network, id: TaskId) -> Option<TaskId> {
    let mut best: Option<(TaskId, u32)> = None;
    for &pred in network[id].predecessors() {
        let task = &network[pred];
        if !task.is_critical() {
            continue;
        }
        match best {
            Some((_, level)) if task.level() >= level => {}
            _ => best = Some((pred, task.level())),
        }
    }
    best.map(|(pred, _)| pred)
}

/// Walk back from `Finish` along zero-slack predecessors.
///
/// At each step the walk moves to the critical predecessor with the
/// smallest level, which favors the path that branches off earliest. It
/// stops at `Start`, or at a task with no critical predecessor, in which
/// case the partial path found so far is returned. Boundary nodes are not
/// part of the result. Slack must be current.
pub fn critical_path(network: &Network) -> CriticalPath {
    let mut reversed: Vec<TaskId> = Vec::new();
    let mut current = Some(FINISH);

    while let Some(id) = current {
        if id == START {
            break;
        }
        if id != FINISH {
            reversed.push(id);
        }
        current = critical_predecessor(network, id);
        if current.is_none() && id != FINISH {
            log_checks!(
                network.verbosity,
                "  critical path walk stopped at {:?}: no zero-slack predecessor",
                network[id].name()
            );
        }
    }

    reversed.reverse();
    CriticalPath::new(reversed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backward_pass::backward_pass;
    use crate::config::BuildConfig;
    use crate::critical_path::compute_slack;
    use crate::forward_pass::forward_pass;
    use crate::models::TaskRecord;
    use crate::network::build_network;

    fn record(name: &str, duration: &str, preds: &str) -> TaskRecord {
        TaskRecord::new(name, duration, preds, "0", "0")
    }

    fn scheduled(records: &[TaskRecord]) -> Network {
        let mut network = build_network(records, &BuildConfig::default()).unwrap();
        forward_pass(&mut network);
        backward_pass(&mut network);
        compute_slack(&mut network);
        network
    }

    #[test]
    fn test_diamond_critical_path() {
        let network = scheduled(&[
            record("A", "3", ""),
            record("B", "2", "A"),
            record("C", "4", "A"),
            record("D", "1", "B,C"),
        ]);

        let path = critical_path(&network);
        assert_eq!(path.names(&network), vec!["A", "C", "D"]);
        assert_eq!(path.duration(&network), network.project_end());
        assert!(path.is_chain(&network));
    }

    #[test]
    fn test_prefers_smallest_level_predecessor() {
        // Two equally long routes into E: X (level 1, 6 days) and
        // P -> Q (levels 1 and 2, 3 days each).
        let network = scheduled(&[
            record("P", "3", ""),
            record("Q", "3", "P"),
            record("X", "6", ""),
            record("E", "1", "Q,X"),
        ]);

        let path = critical_path(&network);
        assert_eq!(path.names(&network), vec!["X", "E"]);
    }

    #[test]
    fn test_tie_on_level_keeps_first_predecessor() {
        let network = scheduled(&[
            record("A", "4", ""),
            record("B", "4", ""),
            record("C", "1", "B,A"),
        ]);

        let path = critical_path(&network);
        assert_eq!(path.names(&network), vec!["B", "C"]);
    }

    #[test]
    fn test_dead_end_returns_partial_path() {
        let mut network = scheduled(&[
            record("A", "3", ""),
            record("B", "2", "A"),
        ]);
        let a = network.find("A").unwrap();
        network.tasks[a as usize].slack = 1;

        let path = critical_path(&network);
        assert_eq!(path.names(&network), vec!["B"]);
    }

    #[test]
    fn test_empty_network_has_no_critical_path() {
        let network = scheduled(&[]);
        assert!(critical_path(&network).is_empty());
    }
}
