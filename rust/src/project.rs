//! Project facade: records, the network built from them, and the steppers.

use thiserror::Error;

use crate::backward_pass::{backward_pass, BackwardStepper};
use crate::calendar::ProjectCalendar;
use crate::config::ProjectConfig;
use crate::critical_path::{all_critical_paths, compute_slack, critical_path, CriticalPath};
use crate::forward_pass::{forward_pass, ForwardStepper};
use crate::models::{TaskRecord, TaskSummary};
use crate::network::{build_network, Network, NetworkError};
use crate::records::{RecordError, RecordSet};

/// Errors surfaced by [`Project`] operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectError {
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Owns the task records and the network derived from them.
///
/// Every record edit rebuilds the whole network. A rebuild that fails
/// leaves both the records and the previous network untouched.
#[derive(Clone, Debug)]
pub struct Project {
    config: ProjectConfig,
    records: RecordSet,
    network: Network,
    forward: ForwardStepper,
    backward: BackwardStepper,
}

impl Project {
    /// Create a project from records, building its network.
    pub fn new(records: Vec<TaskRecord>, config: ProjectConfig) -> Result<Self, ProjectError> {
        let records = RecordSet::from(records);
        let network = build_network(records.as_slice(), &config.build)?;
        Ok(Self {
            config,
            records,
            network,
            forward: ForwardStepper::new(),
            backward: BackwardStepper::new(),
        })
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn calendar(&self) -> ProjectCalendar {
        ProjectCalendar::new(self.config.start_date)
    }

    /// Build a network from `records` and, if that succeeds, swap both in.
    fn commit(&mut self, records: RecordSet) -> Result<(), ProjectError> {
        let network = build_network(records.as_slice(), &self.config.build)?;
        self.records = records;
        self.network = network;
        self.forward = ForwardStepper::new();
        self.backward = BackwardStepper::new();
        Ok(())
    }

    /// Rebuild the network from the current records, dropping all dates.
    pub fn reload(&mut self) -> Result<(), ProjectError> {
        self.commit(self.records.clone())
    }

    /// Replace every record at once.
    pub fn replace_records(&mut self, records: Vec<TaskRecord>) -> Result<(), ProjectError> {
        self.commit(RecordSet::from(records))
    }

    /// Add a task; the record set is kept sorted by name.
    pub fn add_task(&mut self, record: TaskRecord) -> Result<(), ProjectError> {
        let mut records = self.records.clone();
        records.add(record)?;
        records.sort_by_name();
        self.commit(records)
    }

    pub fn remove_task(&mut self, name: &str) -> Result<(), ProjectError> {
        let mut records = self.records.clone();
        records.remove(name)?;
        self.commit(records)
    }

    pub fn update_task(
        &mut self,
        name: &str,
        duration: u32,
        predecessors: &str,
    ) -> Result<(), ProjectError> {
        let mut records = self.records.clone();
        records.update(name, duration, predecessors)?;
        self.commit(records)
    }

    /// Run both passes and compute slack. Both steppers are rewound.
    pub fn schedule(&mut self) {
        forward_pass(&mut self.network);
        backward_pass(&mut self.network);
        compute_slack(&mut self.network);
        self.forward = ForwardStepper::new();
        self.backward = BackwardStepper::new();
    }

    pub fn step_forward(&mut self) -> bool {
        self.forward.step(&mut self.network)
    }

    pub fn reset_forward(&mut self) {
        self.forward.reset(&mut self.network);
    }

    pub fn step_backward(&mut self) -> bool {
        self.backward.step(&mut self.network)
    }

    pub fn reset_backward(&mut self) {
        self.backward.reset(&mut self.network);
    }

    pub fn forward_cursor(&self) -> usize {
        self.forward.cursor()
    }

    /// Levels settled by the backward stepper since its last reset.
    pub fn backward_cursor(&self) -> usize {
        self.backward.cursor()
    }

    pub fn level_count(&self) -> usize {
        self.network.levels().len()
    }

    pub fn project_end(&self) -> i64 {
        self.network.project_end()
    }

    /// Project end as `dd/mm/yyyy` on the project calendar.
    pub fn end_date_label(&self) -> String {
        self.calendar().format_long(self.project_end())
    }

    pub fn compute_slack(&mut self) {
        compute_slack(&mut self.network);
    }

    /// One critical path, boundaries excluded. Slack is recomputed first.
    pub fn critical_path(&mut self) -> CriticalPath {
        compute_slack(&mut self.network);
        critical_path(&self.network)
    }

    /// Every critical path, boundaries included. Slack is recomputed first.
    pub fn all_critical_paths(&mut self) -> Vec<CriticalPath> {
        compute_slack(&mut self.network);
        all_critical_paths(&self.network)
    }

    /// Snapshots of every node in arena order.
    pub fn summaries(&self) -> Vec<TaskSummary> {
        let calendar = self.calendar();
        self.network
            .iter()
            .map(|(id, _)| TaskSummary::capture(&self.network, id, Some(&calendar)))
            .collect()
    }

    pub fn summary(&self, name: &str) -> Option<TaskSummary> {
        let calendar = self.calendar();
        self.network
            .find(name)
            .map(|id| TaskSummary::capture(&self.network, id, Some(&calendar)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::config::{BuildConfig, UnresolvedPolicy};
    use crate::network::UNCOMPUTED;

    fn record(name: &str, duration: &str, preds: &str) -> TaskRecord {
        TaskRecord::new(name, duration, preds, "0", "0")
    }

    fn config() -> ProjectConfig {
        ProjectConfig {
            build: BuildConfig::default(),
            start_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        }
    }

    fn diamond() -> Project {
        Project::new(
            vec![
                record("A", "3", ""),
                record("B", "2", "A"),
                record("C", "4", "A"),
                record("D", "1", "B,C"),
            ],
            config(),
        )
        .unwrap()
    }

    fn names(project: &Project, path: &CriticalPath) -> Vec<String> {
        path.names(project.network())
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_schedule_and_critical_path() {
        let mut project = diamond();
        project.schedule();

        assert_eq!(project.project_end(), 8);
        let path = project.critical_path();
        assert_eq!(names(&project, &path), vec!["A", "C", "D"]);
        assert_eq!(project.all_critical_paths().len(), 1);
    }

    #[test]
    fn test_stepwise_replay_matches_schedule() {
        let mut scheduled = diamond();
        scheduled.schedule();

        let mut stepped = diamond();
        stepped.reset_forward();
        while stepped.step_forward() {}
        stepped.reset_backward();
        while stepped.step_backward() {}
        stepped.compute_slack();

        assert_eq!(stepped.backward_cursor(), stepped.level_count());
        assert_eq!(stepped.forward_cursor(), stepped.level_count());
        assert_eq!(stepped.summaries(), scheduled.summaries());
    }

    #[test]
    fn test_steppers_reset_independently() {
        let mut project = diamond();
        project.schedule();

        project.step_backward();
        project.step_backward();
        project.reset_forward();

        assert_eq!(project.backward_cursor(), 2);
        assert_eq!(project.forward_cursor(), 0);
        assert_eq!(project.summary("A").unwrap().earliest_start, UNCOMPUTED);
    }

    #[test]
    fn test_summaries_carry_calendar_dates() {
        let mut project = diamond();
        project.schedule();

        let d = project.summary("D").unwrap();
        assert_eq!(d.earliest_start, 7);
        assert_eq!(d.earliest_date, NaiveDate::from_ymd_opt(2025, 6, 9));
        assert_eq!(d.latest_date, NaiveDate::from_ymd_opt(2025, 6, 9));
        assert_eq!(project.end_date_label(), "10/06/2025");
        assert_eq!(project.summaries().len(), 6);
        assert!(project.summary("Start").is_none());
    }

    #[test]
    fn test_edits_rebuild_network() {
        let mut project = diamond();
        project.add_task(record("E", "10", "A")).unwrap();
        project.schedule();
        assert_eq!(project.project_end(), 13);
        assert_eq!(names(&project, &project.clone().critical_path()), vec!["A", "E"]);

        project.update_task("E", 1, "A").unwrap();
        project.schedule();
        assert_eq!(project.project_end(), 8);

        project.remove_task("C").unwrap();
        project.schedule();
        assert_eq!(project.project_end(), 6);
        assert!(project.network().find("C").is_none());
        assert_eq!(project.records().get("D").unwrap().predecessors, "B");
    }

    #[test]
    fn test_failed_edit_keeps_previous_state() {
        let mut project = diamond();
        project.schedule();
        let before = project.summaries();

        let err = project.add_task(record("E", "x", "A")).unwrap_err();
        assert!(matches!(
            err,
            ProjectError::Network(NetworkError::MalformedRecord { .. })
        ));
        assert!(project.records().get("E").is_none());
        assert_eq!(project.summaries(), before);

        let err = project.remove_task("Z").unwrap_err();
        assert_eq!(
            err,
            ProjectError::Record(RecordError::TaskNotFound("Z".to_string()))
        );
    }

    #[test]
    fn test_strict_policy_rejects_unknown_predecessor() {
        let mut strict = config();
        strict.build.unresolved = UnresolvedPolicy::Fail;

        let result = Project::new(vec![record("A", "1", "Ghost")], strict);
        assert!(matches!(
            result,
            Err(ProjectError::Network(
                NetworkError::UnresolvedPredecessor { .. }
            ))
        ));
    }

    #[test]
    fn test_unscheduled_project_has_no_critical_path() {
        let mut project = diamond();

        assert!(project.critical_path().is_empty());
        assert!(project.all_critical_paths().is_empty());
        let b = project.summary("B").unwrap();
        assert_eq!(b.slack, UNCOMPUTED);
        assert!(b.to_string().contains("slack : not computed"));

        project.schedule();
        project.reload().unwrap();
        assert!(project.critical_path().is_empty());

        project.schedule();
        let path = project.critical_path();
        assert_eq!(names(&project, &path), vec!["A", "C", "D"]);
        assert_eq!(project.summary("B").unwrap().slack, 2);
    }

    #[test]
    fn test_schedule_rewinds_steppers() {
        let mut project = diamond();
        project.step_forward();
        project.step_forward();
        project.step_backward();

        project.schedule();
        assert_eq!(project.forward_cursor(), 0);
        assert_eq!(project.backward_cursor(), 0);
        assert_eq!(project.project_end(), 8);
    }

    #[test]
    fn test_reload_clears_dates() {
        let mut project = diamond();
        project.schedule();
        project.reload().unwrap();

        let a = project.summary("A").unwrap();
        assert_eq!(a.earliest_start, UNCOMPUTED);
        assert_eq!(a.latest_start, UNCOMPUTED);
    }
}
