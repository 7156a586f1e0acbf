//! Metra Potential Method (MPM) scheduling engine.
//!
//! Builds a leveled task network from flat task records, propagates earliest
//! and latest start dates (in one go or one level at a time), computes slack
//! and finds critical paths. The same engine is exposed to Python.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub mod backward_pass;
pub mod calendar;
mod config;
pub mod critical_path;
pub mod forward_pass;
pub mod logging;
mod models;
pub mod network;
mod project;
pub mod records;

pub use backward_pass::{backward_pass, BackwardStepper};
pub use calendar::ProjectCalendar;
pub use config::{BuildConfig, ProjectConfig, UnknownPolicy, UnresolvedPolicy};
pub use critical_path::{all_critical_paths, compute_slack, critical_path, CriticalPath};
pub use forward_pass::{forward_pass, ForwardStepper};
pub use models::{TaskRecord, TaskSummary};
pub use network::{build_network, Levels, Network, NetworkError, Task, TaskId, UNCOMPUTED};
pub use project::{Project, ProjectError};
pub use records::{RecordError, RecordSet};

fn to_py_err(err: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn path_names(network: &Network, path: &CriticalPath) -> Vec<String> {
    path.names(network).into_iter().map(str::to_string).collect()
}

/// Build, schedule and analyze a task network in one call.
///
/// # Arguments
/// * `records` - Task records in caller order
/// * `config` - Build configuration (policy for unknown predecessors, verbosity)
///
/// # Returns
/// * Tuple of (task summaries in network order, all critical paths as name lists)
///
/// # Raises
/// * ValueError on a malformed duration, a rejected predecessor name, or a cycle
#[pyfunction]
#[pyo3(signature = (records, config=None))]
fn analyze(
    records: Vec<TaskRecord>,
    config: Option<BuildConfig>,
) -> PyResult<(Vec<TaskSummary>, Vec<Vec<String>>)> {
    let config = config.unwrap_or_default();
    let mut network = build_network(&records, &config).map_err(to_py_err)?;
    forward_pass(&mut network);
    backward_pass(&mut network);
    compute_slack(&mut network);

    let summaries = network
        .iter()
        .map(|(id, _)| TaskSummary::capture(&network, id, None))
        .collect();
    let paths = all_critical_paths(&network)
        .iter()
        .map(|path| path_names(&network, path))
        .collect();
    Ok((summaries, paths))
}

/// Python handle on a [`Project`].
#[pyclass(name = "Project")]
pub struct PyProject {
    inner: Project,
}

#[pymethods]
impl PyProject {
    #[new]
    #[pyo3(signature = (records, config=None))]
    fn new(records: Vec<TaskRecord>, config: Option<ProjectConfig>) -> PyResult<Self> {
        let inner = Project::new(records, config.unwrap_or_default()).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    fn reload(&mut self) -> PyResult<()> {
        self.inner.reload().map_err(to_py_err)
    }

    fn replace_records(&mut self, records: Vec<TaskRecord>) -> PyResult<()> {
        self.inner.replace_records(records).map_err(to_py_err)
    }

    fn add_task(&mut self, record: TaskRecord) -> PyResult<()> {
        self.inner.add_task(record).map_err(to_py_err)
    }

    fn remove_task(&mut self, name: &str) -> PyResult<()> {
        self.inner.remove_task(name).map_err(to_py_err)
    }

    fn update_task(&mut self, name: &str, duration: u32, predecessors: &str) -> PyResult<()> {
        self.inner
            .update_task(name, duration, predecessors)
            .map_err(to_py_err)
    }

    fn records(&self) -> Vec<TaskRecord> {
        self.inner.records().as_slice().to_vec()
    }

    fn schedule(&mut self) {
        self.inner.schedule();
    }

    fn step_forward(&mut self) -> bool {
        self.inner.step_forward()
    }

    fn reset_forward(&mut self) {
        self.inner.reset_forward();
    }

    fn step_backward(&mut self) -> bool {
        self.inner.step_backward()
    }

    fn reset_backward(&mut self) {
        self.inner.reset_backward();
    }

    #[getter]
    fn level_count(&self) -> usize {
        self.inner.level_count()
    }

    #[getter]
    fn backward_cursor(&self) -> usize {
        self.inner.backward_cursor()
    }

    #[getter]
    fn project_end(&self) -> i64 {
        self.inner.project_end()
    }

    fn compute_slack(&mut self) {
        self.inner.compute_slack();
    }

    /// Names along one critical path, `Start`/`Finish` excluded.
    fn critical_path(&mut self) -> Vec<String> {
        let path = self.inner.critical_path();
        path_names(self.inner.network(), &path)
    }

    /// Names along every critical path, `Start`/`Finish` included.
    fn all_critical_paths(&mut self) -> Vec<Vec<String>> {
        let paths = self.inner.all_critical_paths();
        paths
            .iter()
            .map(|path| path_names(self.inner.network(), path))
            .collect()
    }

    fn summaries(&self) -> Vec<TaskSummary> {
        self.inner.summaries()
    }

    fn summary(&self, name: &str) -> Option<TaskSummary> {
        self.inner.summary(name)
    }

    fn __repr__(&self) -> String {
        format!(
            "Project(tasks={}, levels={}, start_date={}, end_date={})",
            self.inner.records().len(),
            self.inner.level_count(),
            self.inner.config().start_date,
            self.inner.end_date_label()
        )
    }
}

/// The mpm.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<TaskRecord>()?;
    m.add_class::<TaskSummary>()?;
    m.add_class::<PyProject>()?;

    // Config types
    m.add_class::<BuildConfig>()?;
    m.add_class::<ProjectConfig>()?;
    m.add_class::<UnresolvedPolicy>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(analyze, m)?)?;

    Ok(())
}
