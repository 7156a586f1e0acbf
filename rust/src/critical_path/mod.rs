//! Slack and critical path analysis.
//!
//! Runs on a network whose forward and backward passes have completed.
//! [`compute_slack`] must run before either path query; both read the
//! slack stored on the tasks.

mod backtrack;
mod enumeration;
mod slack;
mod types;

pub use backtrack::critical_path;
pub use enumeration::all_critical_paths;
pub use slack::compute_slack;
pub use types::CriticalPath;
