//! Application services for workload tracking.

mod assignment;
mod roster;

pub use assignment::{AssignmentDecision, AssignmentError, AssignmentPhase, select_assignee};
pub use roster::{AddTaskRequest, RosterError, RosterResult, RosterService, TaskAssignment};
