//! Builds a task network from flat task records.

use thiserror::Error;

use crate::config::{BuildConfig, UnresolvedPolicy};
use crate::logging::VERBOSITY_CHANGES;
use crate::models::TaskRecord;
use crate::{log_changes, log_checks, log_debug};

use super::index::TaskIndex;
use super::levels::compute_levels;
use super::task::{Task, TaskId, FINISH, START};
use super::{Network, UnresolvedReference};

/// Errors that can occur while building a network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Task {task:?} has malformed duration {value:?} (expected a non-negative integer)")]
    MalformedRecord { task: String, value: String },
    #[error("Task {task:?} names unknown predecessor {predecessor:?}")]
    UnresolvedPredecessor { task: String, predecessor: String },
    #[error("Circular dependency detected (levels still changing after {passes} scans)")]
    CircularDependency { passes: usize },
}

/// First arena slot used by record tasks; slots 0 and 1 hold the boundaries.
const FIRST_RECORD_SLOT: usize = 2;

/// Parse a duration field.
fn parse_duration(task: &str, value: &str) -> Result<u32, NetworkError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| NetworkError::MalformedRecord {
            task: task.to_string(),
            value: value.to_string(),
        })
}

/// Split a comma-separated predecessor list into trimmed, non-empty names.
pub(crate) fn predecessor_names(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|name| !name.is_empty())
}

fn link(tasks: &mut [Task], from: TaskId, to: TaskId) {
    if tasks[to as usize].predecessors.contains(&from) {
        return;
    }
    tasks[to as usize].predecessors.push(from);
    tasks[from as usize].successors.push(to);
}

/// Build a network from task records.
///
/// The arena holds `Start` and `Finish` in slots 0 and 1, followed by one
/// task per record in record order. Records without a resolved predecessor
/// hang off `Start`; records nobody depends on feed `Finish`. `Start` and
/// `Finish` are never linked to each other directly.
///
/// # Errors
/// * `MalformedRecord` if a duration is not a non-negative integer
/// * `UnresolvedPredecessor` under [`UnresolvedPolicy::Fail`]
/// * `CircularDependency` if the records form a cycle
pub fn build_network(records: &[TaskRecord], config: &BuildConfig) -> Result<Network, NetworkError> {
    let verbosity = config.verbosity;

    let mut tasks: Vec<Task> = Vec::with_capacity(records.len() + FIRST_RECORD_SLOT);
    tasks.push(Task::start());
    tasks.push(Task::finish());

    let mut index = TaskIndex::with_capacity(records.len());
    for record in records {
        let duration = parse_duration(&record.name, &record.duration)?;
        index.insert(&record.name, tasks.len() as TaskId);
        tasks.push(Task::work(
            record.name.clone(),
            duration,
            record.x.clone(),
            record.y.clone(),
        ));
    }

    let mut unresolved = Vec::new();
    for (offset, record) in records.iter().enumerate() {
        let id = (FIRST_RECORD_SLOT + offset) as TaskId;
        for name in predecessor_names(&record.predecessors) {
            if let Some(pred) = index.get(name) {
                link(&mut tasks, pred, id);
                continue;
            }
            match config.unresolved {
                UnresolvedPolicy::Fail => {
                    return Err(NetworkError::UnresolvedPredecessor {
                        task: record.name.clone(),
                        predecessor: name.to_string(),
                    });
                }
                UnresolvedPolicy::Warn => {
                    log_changes!(
                        verbosity.max(VERBOSITY_CHANGES),
                        "warning: task {:?} names unknown predecessor {:?}, ignoring it",
                        record.name,
                        name
                    );
                }
                UnresolvedPolicy::Ignore => {
                    log_checks!(
                        verbosity,
                        "  ignoring unknown predecessor {:?} of task {:?}",
                        name,
                        record.name
                    );
                }
            }
            unresolved.push(UnresolvedReference {
                task: record.name.clone(),
                predecessor: name.to_string(),
            });
        }
    }

    for slot in FIRST_RECORD_SLOT..tasks.len() {
        if tasks[slot].predecessors.is_empty() {
            link(&mut tasks, START, slot as TaskId);
        }
    }
    for slot in FIRST_RECORD_SLOT..tasks.len() {
        if tasks[slot].successors.is_empty() {
            link(&mut tasks, slot as TaskId, FINISH);
        }
    }

    tasks[START as usize].successors.retain(|&id| id != FINISH);
    tasks[FINISH as usize].predecessors.retain(|&id| id != START);

    let levels = compute_levels(&mut tasks, verbosity)?;

    log_debug!(
        verbosity,
        "built network: {} task(s), {} level(s), {} unresolved reference(s)",
        records.len(),
        levels.len(),
        unresolved.len()
    );

    Ok(Network {
        tasks,
        index,
        levels,
        unresolved,
        verbosity,
    })
}
