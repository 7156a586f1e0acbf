//! Record and snapshot types exchanged with callers.

use std::fmt;

use chrono::NaiveDate;
use pyo3::prelude::*;

use crate::calendar::{short_label, ProjectCalendar};
use crate::network::{Network, TaskId};

/// One task as supplied by the caller, before it is linked into a network.
///
/// Field order matches the persisted `name|duration|predecessors|x|y` line
/// format. `duration` is kept as text and validated when the network is
/// built; `x`/`y` are layout hints the engine never reads.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskRecord {
    #[pyo3(get, set)]
    pub name: String,
    #[pyo3(get, set)]
    pub duration: String,
    /// Comma-separated predecessor names, possibly empty.
    #[pyo3(get, set)]
    pub predecessors: String,
    #[pyo3(get, set)]
    pub x: String,
    #[pyo3(get, set)]
    pub y: String,
}

impl TaskRecord {
    pub fn new(
        name: impl Into<String>,
        duration: impl Into<String>,
        predecessors: impl Into<String>,
        x: impl Into<String>,
        y: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            duration: duration.into(),
            predecessors: predecessors.into(),
            x: x.into(),
            y: y.into(),
        }
    }
}

#[pymethods]
impl TaskRecord {
    #[new]
    #[pyo3(signature = (name, duration, predecessors=String::new(), x="0".to_string(), y="0".to_string()))]
    fn py_new(name: String, duration: String, predecessors: String, x: String, y: String) -> Self {
        Self::new(name, duration, predecessors, x, y)
    }

    fn __repr__(&self) -> String {
        format!(
            "TaskRecord(name={:?}, duration={:?}, predecessors={:?})",
            self.name, self.duration, self.predecessors
        )
    }
}

/// Read-only snapshot of one task after (or during) propagation.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskSummary {
    #[pyo3(get)]
    pub name: String,
    #[pyo3(get)]
    pub duration: u32,
    #[pyo3(get)]
    pub level: u32,
    /// Day offset, -1 while uncomputed.
    #[pyo3(get)]
    pub earliest_start: i64,
    /// Day offset, -1 while uncomputed.
    #[pyo3(get)]
    pub latest_start: i64,
    #[pyo3(get)]
    pub slack: i64,
    #[pyo3(get)]
    pub earliest_date: Option<NaiveDate>,
    #[pyo3(get)]
    pub latest_date: Option<NaiveDate>,
    #[pyo3(get)]
    pub predecessors: Vec<String>,
    #[pyo3(get)]
    pub successors: Vec<String>,
    #[pyo3(get)]
    pub x: String,
    #[pyo3(get)]
    pub y: String,
}

impl TaskSummary {
    /// Snapshot task `id`, resolving day offsets through `calendar` when given.
    pub fn capture(network: &Network, id: TaskId, calendar: Option<&ProjectCalendar>) -> Self {
        let task = &network[id];
        let (x, y) = task.position();
        let to_names = |ids: &[TaskId]| -> Vec<String> {
            ids.iter().map(|&other| network[other].name().to_string()).collect()
        };
        Self {
            name: task.name().to_string(),
            duration: task.duration(),
            level: task.level(),
            earliest_start: task.earliest_start(),
            latest_start: task.latest_start(),
            slack: task.slack(),
            earliest_date: calendar.and_then(|c| c.date_for(task.earliest_start())),
            latest_date: calendar.and_then(|c| c.date_for(task.latest_start())),
            predecessors: to_names(task.predecessors()),
            successors: to_names(task.successors()),
            x: x.to_string(),
            y: y.to_string(),
        }
    }
}

#[pymethods]
impl TaskSummary {
    fn __repr__(&self) -> String {
        format!(
            "TaskSummary(name={:?}, earliest_start={}, latest_start={}, slack={})",
            self.name, self.earliest_start, self.latest_start, self.slack
        )
    }

    fn __str__(&self) -> String {
        self.to_string()
    }
}

fn plural_days(n: i64) -> &'static str {
    if n > 1 {
        "days"
    } else {
        "day"
    }
}

fn write_date(f: &mut fmt::Formatter<'_>, offset: i64, date: Option<NaiveDate>) -> fmt::Result {
    if offset < 0 {
        return f.write_str("not computed");
    }
    write!(f, "day {}", offset)?;
    if date.is_some() {
        write!(f, " ({})", short_label(date))?;
    }
    Ok(())
}

impl fmt::Display for TaskSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let duration = i64::from(self.duration);
        writeln!(f, "{} : {} {}", self.name, duration, plural_days(duration))?;

        f.write_str("  earliest start : ")?;
        write_date(f, self.earliest_start, self.earliest_date)?;
        f.write_str("\n  latest start   : ")?;
        write_date(f, self.latest_start, self.latest_date)?;
        writeln!(f)?;
        if self.slack < 0 {
            writeln!(f, "  slack : not computed")?;
        } else {
            writeln!(f, "  slack : {} {}", self.slack, plural_days(self.slack))?;
        }

        if self.predecessors.is_empty() {
            writeln!(f, "  no previous task")?;
        } else {
            writeln!(f, "  previous tasks : {}", self.predecessors.join(", "))?;
        }
        if self.successors.is_empty() {
            writeln!(f, "  no next task")
        } else {
            writeln!(f, "  next tasks     : {}", self.successors.join(", "))
        }
    }
}
