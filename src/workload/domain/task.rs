//! Task records assigned to employees.

use super::{EmployeeId, TaskDuration, TaskId, WorkloadDomainError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-empty free-form task description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Creates a validated description.
    ///
    /// # Errors
    ///
    /// Returns [`WorkloadDomainError::EmptyDescription`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, WorkloadDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(WorkloadDomainError::EmptyDescription);
        }
        Ok(Self(raw))
    }

    /// Returns the description text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable task assigned to a single employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    description: TaskDescription,
    duration: TaskDuration,
    assigned_to: EmployeeId,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted description.
    pub description: TaskDescription,
    /// Persisted duration.
    pub duration: TaskDuration,
    /// Persisted assignee.
    pub assigned_to: EmployeeId,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task assigned to `assigned_to`.
    #[must_use]
    pub fn new(
        id: TaskId,
        description: TaskDescription,
        duration: TaskDuration,
        assigned_to: EmployeeId,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id,
            description,
            duration,
            assigned_to,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            description: data.description,
            duration: data.duration,
            assigned_to: data.assigned_to,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the duration.
    #[must_use]
    pub const fn duration(&self) -> TaskDuration {
        self.duration
    }

    /// Returns the assignee.
    #[must_use]
    pub const fn assigned_to(&self) -> &EmployeeId {
        &self.assigned_to
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
