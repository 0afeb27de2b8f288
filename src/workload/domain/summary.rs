//! Aggregate roster figures.

use super::{EmployeeId, EmployeeSnapshot, Hours, Task};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Roster-wide totals derived from employees and tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadSummary {
    /// Number of employees on the roster.
    pub total_employees: usize,
    /// Number of tasks on record.
    pub total_tasks: usize,
    /// Number of employees still below capacity.
    pub available_employees: usize,
    /// Sum of all task durations.
    pub total_task_hours: Hours,
    /// Task counts for employees with at least one task.
    pub tasks_per_employee: BTreeMap<EmployeeId, usize>,
}

impl WorkloadSummary {
    /// Computes the summary from employee snapshots and tasks.
    #[must_use]
    pub fn from_parts(employees: &[EmployeeSnapshot], tasks: &[Task]) -> Self {
        let mut tasks_per_employee = BTreeMap::new();
        for task in tasks {
            *tasks_per_employee
                .entry(task.assigned_to().clone())
                .or_insert(0_usize) += 1;
        }

        Self {
            total_employees: employees.len(),
            total_tasks: tasks.len(),
            available_employees: employees.iter().filter(|e| e.is_available).count(),
            total_task_hours: Hours::sum(tasks.iter().map(|task| Hours::from(task.duration()))),
            tasks_per_employee,
        }
    }
}
