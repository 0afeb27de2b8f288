//! Service layer owning the assignment workflow.

use super::assignment::{AssignmentError, AssignmentPhase, select_assignee};
use crate::workload::{
    domain::{
        Employee, EmployeeId, EmployeeSnapshot, Task, TaskDescription, TaskDuration, TaskId,
        WorkloadDomainError, WorkloadSummary,
    },
    ports::{TasksByEmployee, WorkloadStore, WorkloadStoreError},
};
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

/// Request payload for adding a task to the roster.
#[derive(Debug, Clone, PartialEq)]
pub struct AddTaskRequest {
    description: String,
    duration_hours: f64,
}

impl AddTaskRequest {
    /// Creates a request from raw caller input.
    #[must_use]
    pub fn new(description: impl Into<String>, duration_hours: f64) -> Self {
        Self {
            description: description.into(),
            duration_hours,
        }
    }
}

/// Result of a successful task assignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskAssignment {
    /// The persisted task.
    pub task: Task,
    /// The assignee after the task was credited.
    pub assignee: EmployeeSnapshot,
    /// Policy phase that chose the assignee.
    pub phase: AssignmentPhase,
}

/// Service-level errors for roster operations.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] WorkloadDomainError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] WorkloadStoreError),
    /// The policy could not pick an employee.
    #[error(transparent)]
    Assignment(#[from] AssignmentError),
}

/// Result type for roster service operations.
pub type RosterResult<T> = Result<T, RosterError>;

/// Roster orchestration service.
///
/// Writes are serialized through a single lock that also covers the
/// snapshot-decide-persist sequence of [`RosterService::add_task`]. Reads do
/// not take the lock.
pub struct RosterService<S, C>
where
    S: WorkloadStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    write_lock: Arc<Mutex<()>>,
}

impl<S, C> Clone for RosterService<S, C>
where
    S: WorkloadStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
            write_lock: Arc::clone(&self.write_lock),
        }
    }
}

impl<S, C> RosterService<S, C>
where
    S: WorkloadStore,
    C: Clock + Send + Sync,
{
    /// Creates a new roster service.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            store,
            clock,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Adds an employee with zero workload.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Domain`] for an empty identifier and
    /// [`RosterError::Store`] wrapping
    /// [`WorkloadStoreError::DuplicateEmployee`] when the identifier exists.
    pub async fn add_employee(&self, id: impl Into<String>) -> RosterResult<Employee> {
        let employee = Employee::new(EmployeeId::new(id)?, &*self.clock);
        let _guard = self.write_lock.lock().await;
        self.store.create_employee(&employee).await?;
        tracing::info!(employee_id = %employee.id(), "employee added");
        Ok(employee)
    }

    /// Removes an employee and every task assigned to them.
    ///
    /// Returns `false` when the employee did not exist.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError`] when the identifier is empty or the store
    /// fails.
    pub async fn remove_employee(&self, id: impl Into<String>) -> RosterResult<bool> {
        let employee_id = EmployeeId::new(id)?;
        let _guard = self.write_lock.lock().await;
        let removed = self.store.remove_employee(&employee_id).await?;
        if removed {
            tracing::info!(employee_id = %employee_id, "employee removed with their tasks");
        } else {
            tracing::debug!(employee_id = %employee_id, "remove requested for unknown employee");
        }
        Ok(removed)
    }

    /// Returns a snapshot of every employee with derived availability.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Store`] when the store fails.
    pub async fn employees(&self) -> RosterResult<Vec<EmployeeSnapshot>> {
        let employees = self.store.list_employees().await?;
        Ok(employees.iter().map(Employee::snapshot).collect())
    }

    /// Validates, assigns, and persists a new task.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Domain`] for an empty description, a
    /// non-positive duration, or a duration that would overflow the
    /// assignee's workload, [`RosterError::Assignment`] when the roster is
    /// empty, and [`RosterError::Store`] when persistence fails.
    pub async fn add_task(&self, request: AddTaskRequest) -> RosterResult<TaskAssignment> {
        let description = TaskDescription::new(request.description)?;
        let duration = TaskDuration::new(request.duration_hours)?;

        let _guard = self.write_lock.lock().await;
        let snapshot = self.employees().await?;
        let decision = select_assignee(&snapshot, duration)?;
        // Reject an overflowing total before an identifier is allocated.
        if let Some(chosen) = snapshot.iter().find(|e| e.id == decision.employee_id) {
            chosen.current_workload.plus(duration)?;
        }

        let sequence = self.store.next_task_sequence().await?;
        let task = Task::new(
            TaskId::from_sequence(sequence),
            description,
            duration,
            decision.employee_id,
            &*self.clock,
        );
        let assignee = self.store.create_task(&task).await?;

        tracing::info!(
            task_id = %task.id(),
            employee_id = %assignee.id(),
            duration = %duration,
            phase = decision.phase.as_str(),
            workload = %assignee.current_workload(),
            "task assigned"
        );
        Ok(TaskAssignment {
            task,
            assignee: assignee.snapshot(),
            phase: decision.phase,
        })
    }

    /// Returns every task, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Store`] when the store fails.
    pub async fn tasks(&self) -> RosterResult<Vec<Task>> {
        Ok(self.store.list_tasks().await?)
    }

    /// Returns tasks grouped by employee, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Store`] when the store fails.
    pub async fn assignments(&self) -> RosterResult<TasksByEmployee> {
        Ok(self.store.tasks_by_employee().await?)
    }

    /// Computes roster-wide totals.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Store`] when the store fails.
    pub async fn summary(&self) -> RosterResult<WorkloadSummary> {
        let employees = self.employees().await?;
        let tasks = self.tasks().await?;
        Ok(WorkloadSummary::from_parts(&employees, &tasks))
    }

    /// Deletes every task and employee.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Store`] when the store fails.
    pub async fn reset(&self) -> RosterResult<()> {
        let _guard = self.write_lock.lock().await;
        self.store.reset_all().await?;
        tracing::warn!("roster reset, all employees and tasks deleted");
        Ok(())
    }
}
