//! Assignment policy choosing which employee receives a new task.
//!
//! The policy is a pure function of an employee snapshot and a task
//! duration. It keeps no memory between calls; everything it needs is already
//! reflected in the snapshot's workload figures.
//!
//! Selection runs in two phases:
//!
//! 1. **Fits today**: among employees whose remaining capacity covers the
//!    duration, choose the smallest `(current_workload, id)`.
//! 2. **Overflow**: when nobody fits, choose the smallest
//!    `(next_free_time, id)` across the whole roster.

use crate::workload::domain::{EmployeeId, EmployeeSnapshot, Hours, TaskDuration};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

/// Phase of the policy that produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentPhase {
    /// The chosen employee has room for the task today.
    FitsToday,
    /// Nobody had room; the employee who frees up first was chosen.
    Overflow,
}

impl AssignmentPhase {
    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FitsToday => "fits_today",
            Self::Overflow => "overflow",
        }
    }
}

/// Outcome of a successful assignment decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentDecision {
    /// Employee that should receive the task.
    pub employee_id: EmployeeId,
    /// Phase that selected the employee.
    pub phase: AssignmentPhase,
}

/// Errors returned by the assignment policy.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AssignmentError {
    /// The roster is empty.
    #[error("no employees available for assignment")]
    NoEmployeesAvailable,
}

/// Picks the employee that should receive a task of `duration`.
///
/// # Errors
///
/// Returns [`AssignmentError::NoEmployeesAvailable`] when `snapshot` is empty.
pub fn select_assignee(
    snapshot: &[EmployeeSnapshot],
    duration: TaskDuration,
) -> Result<AssignmentDecision, AssignmentError> {
    let fits_today = snapshot
        .iter()
        .filter(|employee| employee.fits(duration))
        .min_by(|left, right| by_key_then_id(left, right, |e| e.current_workload));
    if let Some(employee) = fits_today {
        return Ok(AssignmentDecision {
            employee_id: employee.id.clone(),
            phase: AssignmentPhase::FitsToday,
        });
    }

    snapshot
        .iter()
        .min_by(|left, right| by_key_then_id(left, right, |e| e.next_free_time))
        .map(|employee| AssignmentDecision {
            employee_id: employee.id.clone(),
            phase: AssignmentPhase::Overflow,
        })
        .ok_or(AssignmentError::NoEmployeesAvailable)
}

fn by_key_then_id(
    left: &EmployeeSnapshot,
    right: &EmployeeSnapshot,
    key: impl Fn(&EmployeeSnapshot) -> Hours,
) -> Ordering {
    key(left)
        .total_cmp(&key(right))
        .then_with(|| left.id.cmp(&right.id))
}
