//! Exhaustive critical path enumeration.

use crate::network::{Network, TaskId, FINISH, START};

use super::types::CriticalPath;

fn is_eligible(network: &Network, id: TaskId) -> bool {
    network[id].is_boundary() || network[id].is_critical()
}

fn is_fully_critical(network: &Network, path: &[TaskId]) -> bool {
    path.iter()
        .all(|&id| network[id].is_boundary() || network[id].is_critical())
}

struct Search<'a> {
    network: &'a Network,
    on_path: Vec<bool>,
    path: Vec<TaskId>,
    found: Vec<CriticalPath>,
}

impl Search<'_> {
    fn visit(&mut self, id: TaskId) {
        if !is_eligible(self.network, id) {
            return;
        }
        self.path.push(id);
        self.on_path[id as usize] = true;

        if id == FINISH {
            if is_fully_critical(self.network, &self.path) {
                self.found.push(CriticalPath::new(self.path.clone()));
            }
        } else {
            let network = self.network;
            for &succ in network[id].successors() {
                if !self.on_path[succ as usize] {
                    self.visit(succ);
                }
            }
        }

        self.on_path[id as usize] = false;
        self.path.pop();
    }
}

/// Every `Start` -> `Finish` chain made only of zero-slack tasks.
///
/// Depth-first from `Start`, following successors in link order; only
/// boundary nodes and zero-slack tasks extend a path, and a task already
/// on the current path is never revisited. Each returned path includes
/// `Start` and `Finish`. The number of paths can grow exponentially with
/// fan-out. Slack must be current.
pub fn all_critical_paths(network: &Network) -> Vec<CriticalPath> {
    let mut search = Search {
        network,
        on_path: vec![false; network.len()],
        path: Vec::new(),
        found: Vec::new(),
    };
    search.visit(START);
    search.found
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

    fn all_names(network: &Network) -> Vec<Vec<&str>> {
        all_critical_paths(network)
            .iter()
            .map(|p| p.names(network))
            .collect()
    }

    #[test]
    fn test_single_critical_path() {
        let network = scheduled(&[
            record("A", "3", ""),
            record("B", "2", "A"),
            record("C", "4", "A"),
            record("D", "1", "B,C"),
        ]);

        assert_eq!(
            all_names(&network),
            vec![vec!["Start", "A", "C", "D", "Finish"]]
        );
    }

    #[test]
    fn test_parallel_critical_paths() {
        let network = scheduled(&[
            record("A", "2", ""),
            record("B", "3", "A"),
            record("C", "3", "A"),
            record("D", "1", "B,C"),
            record("E", "1", "A"),
        ]);

        assert_eq!(
            all_names(&network),
            vec![
                vec!["Start", "A", "B", "D", "Finish"],
                vec!["Start", "A", "C", "D", "Finish"],
            ]
        );
    }

    #[test]
    fn test_paths_are_valid_zero_slack_chains() {
        let network = scheduled(&[
            record("A", "2", ""),
            record("B", "5", ""),
            record("C", "1", "A"),
            record("D", "3", "C,B"),
            record("E", "4", "A"),
            record("F", "4", "E,D"),
            record("G", "7", ""),
            record("H", "5", "G"),
        ]);
        let paths = all_critical_paths(&network);
        assert!(!paths.is_empty());

        for path in &paths {
            let ids = path.tasks();
            assert_eq!(ids.first(), Some(&START));
            assert_eq!(ids.last(), Some(&FINISH));
            assert!(path.is_chain(&network));
            assert!(ids[1..ids.len() - 1]
                .iter()
                .all(|&id| network[id].slack() == 0));
            assert_eq!(path.duration(&network), network.project_end());
        }
    }

    #[test]
    fn test_single_path_is_among_all_paths() {
        let network = scheduled(&[
            record("A", "2", ""),
            record("B", "3", "A"),
            record("C", "3", "A"),
            record("D", "1", "B,C"),
        ]);
        let single = crate::critical_path::critical_path(&network);
        let all = all_names(&network);

        let mut bounded = vec!["Start"];
        bounded.extend(single.names(&network));
        bounded.push("Finish");
        assert!(all.contains(&bounded));
    }

    #[test]
    fn test_empty_network_has_no_paths() {
        let network = scheduled(&[]);
        assert!(all_critical_paths(&network).is_empty());
    }
}
