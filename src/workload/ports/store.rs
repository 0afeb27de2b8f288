//! Store port for employee and task persistence.
//!
//! The store is the only writer of workload totals: inserting a task and
//! crediting its duration to the assignee happen in the same atomic unit.

use crate::workload::domain::{Employee, EmployeeId, Task, TaskId, WorkloadDomainError};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

/// Result type for workload store operations.
pub type WorkloadStoreResult<T> = Result<T, WorkloadStoreError>;

/// Tasks grouped by assignee, oldest task first.
pub type TasksByEmployee = BTreeMap<EmployeeId, Vec<Task>>;

/// Workload persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkloadStore: Send + Sync {
    /// Stores a new employee.
    ///
    /// # Errors
    ///
    /// Returns [`WorkloadStoreError::DuplicateEmployee`] when the identifier
    /// is already taken. The existing record is left untouched.
    async fn create_employee(&self, employee: &Employee) -> WorkloadStoreResult<()>;

    /// Removes an employee together with every task assigned to them.
    ///
    /// Returns `false` when no such employee existed.
    async fn remove_employee(&self, id: &EmployeeId) -> WorkloadStoreResult<bool>;

    /// Returns every employee ordered by identifier.
    async fn list_employees(&self) -> WorkloadStoreResult<Vec<Employee>>;

    /// Finds an employee by identifier.
    async fn find_employee(&self, id: &EmployeeId) -> WorkloadStoreResult<Option<Employee>>;

    /// Inserts a task and credits its duration to the assignee.
    ///
    /// Returns the assignee as it stands after the update.
    ///
    /// # Errors
    ///
    /// Returns [`WorkloadStoreError::UnknownEmployee`] when the assignee does
    /// not exist or [`WorkloadStoreError::DuplicateTask`] when the task
    /// identifier is already taken, and
    /// [`WorkloadStoreError::WorkloadRejected`] when the new total would not
    /// be finite. Nothing is written in any of these cases.
    async fn create_task(&self, task: &Task) -> WorkloadStoreResult<Employee>;

    /// Returns every task, newest first.
    async fn list_tasks(&self) -> WorkloadStoreResult<Vec<Task>>;

    /// Returns tasks grouped by assignee, oldest first.
    ///
    /// Every known employee has an entry, including those without tasks.
    async fn tasks_by_employee(&self) -> WorkloadStoreResult<TasksByEmployee>;

    /// Allocates the next task sequence number.
    ///
    /// Numbers start at 1, increase strictly, and are never handed out
    /// twice, even across [`WorkloadStore::reset_all`].
    async fn next_task_sequence(&self) -> WorkloadStoreResult<u64>;

    /// Deletes every task and then every employee.
    async fn reset_all(&self) -> WorkloadStoreResult<()>;
}

/// Errors returned by workload store implementations.
#[derive(Debug, Clone, Error)]
pub enum WorkloadStoreError {
    /// An employee with the same identifier already exists.
    #[error("duplicate employee identifier: {0}")]
    DuplicateEmployee(EmployeeId),

    /// The referenced employee does not exist.
    #[error("unknown employee: {0}")]
    UnknownEmployee(EmployeeId),

    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// Crediting the task would leave the assignee with an invalid workload.
    #[error("cannot credit task to {employee}: {source}")]
    WorkloadRejected {
        /// Intended assignee.
        employee: EmployeeId,
        /// Domain rule that rejected the new total.
        source: WorkloadDomainError,
    },

    /// The persistence layer could not complete the operation.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl WorkloadStoreError {
    /// Wraps a persistence error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::StorageUnavailable(Arc::new(err))
    }
}
