//! Task nodes stored in the network arena.

/// Arena index of a task inside its [`Network`](super::Network).
pub type TaskId = u32;

/// Arena slot of the synthetic start node.
pub const START: TaskId = 0;
/// Arena slot of the synthetic finish node.
pub const FINISH: TaskId = 1;

/// Date value of a task whose date has not been propagated yet.
pub const UNCOMPUTED: i64 = -1;

pub const START_NAME: &str = "Start";
pub const FINISH_NAME: &str = "Finish";

/// Role of a node in the network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskKind {
    Start,
    Finish,
    Work,
}

/// One node of the task network.
///
/// Links to other tasks are arena indices; the network owns every node and
/// drops them all together when it is rebuilt.
#[derive(Clone, Debug)]
pub struct Task {
    pub(crate) name: String,
    pub(crate) kind: TaskKind,
    pub(crate) duration: u32,
    pub(crate) x: String,
    pub(crate) y: String,
    pub(crate) predecessors: Vec<TaskId>,
    pub(crate) successors: Vec<TaskId>,
    pub(crate) earliest_start: i64,
    pub(crate) latest_start: i64,
    pub(crate) slack: i64,
    pub(crate) level: u32,
}

impl Task {
    pub(crate) fn work(name: String, duration: u32, x: String, y: String) -> Self {
        Self {
            name,
            kind: TaskKind::Work,
            duration,
            x,
            y,
            predecessors: Vec::new(),
            successors: Vec::new(),
            earliest_start: UNCOMPUTED,
            latest_start: UNCOMPUTED,
            slack: UNCOMPUTED,
            level: 1,
        }
    }

    pub(crate) fn start() -> Self {
        Self {
            kind: TaskKind::Start,
            earliest_start: 0,
            latest_start: 0,
            slack: 0,
            level: 0,
            ..Self::work(START_NAME.to_string(), 0, "0".into(), "0".into())
        }
    }

    pub(crate) fn finish() -> Self {
        Self {
            kind: TaskKind::Finish,
            ..Self::work(FINISH_NAME.to_string(), 0, "0".into(), "0".into())
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    /// Duration in days.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Earliest start as a day offset, or [`UNCOMPUTED`].
    pub fn earliest_start(&self) -> i64 {
        self.earliest_start
    }

    /// Latest start as a day offset, or [`UNCOMPUTED`].
    pub fn latest_start(&self) -> i64 {
        self.latest_start
    }

    /// Earliest finish, `None` while the earliest start is uncomputed.
    pub fn earliest_finish(&self) -> Option<i64> {
        (self.earliest_start != UNCOMPUTED).then(|| self.earliest_start + i64::from(self.duration))
    }

    /// Slack as of the last slack computation, or [`UNCOMPUTED`] if either
    /// date was unknown at that point.
    pub fn slack(&self) -> i64 {
        self.slack
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn predecessors(&self) -> &[TaskId] {
        &self.predecessors
    }

    pub fn successors(&self) -> &[TaskId] {
        &self.successors
    }

    /// Layout hints, carried through untouched.
    pub fn position(&self) -> (&str, &str) {
        (&self.x, &self.y)
    }

    pub fn is_boundary(&self) -> bool {
        self.kind != TaskKind::Work
    }

    /// Zero slack. A task with an unknown date is never critical.
    pub fn is_critical(&self) -> bool {
        self.slack == 0
    }

    pub fn is_computed(&self) -> bool {
        self.earliest_start != UNCOMPUTED && self.latest_start != UNCOMPUTED
    }

    pub(crate) fn compute_slack(&mut self) {
        self.slack = if self.is_computed() {
            self.latest_start - self.earliest_start
        } else {
            UNCOMPUTED
        };
    }
}
