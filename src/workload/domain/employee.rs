//! Employee aggregate and the read-only snapshot used for assignment.

use super::{EmployeeId, Hours, TaskDuration, WorkloadDomainError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Maximum hours of task time an employee carries in a day.
pub const DAILY_CAPACITY: Hours = Hours::from_const(9.0);

/// Employee aggregate root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    id: EmployeeId,
    current_workload: Hours,
    next_free_time: Hours,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted employee.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedEmployeeData {
    /// Persisted employee identifier.
    pub id: EmployeeId,
    /// Persisted workload total.
    pub current_workload: Hours,
    /// Persisted next free time.
    pub next_free_time: Hours,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Employee {
    /// Creates an employee with no workload.
    #[must_use]
    pub fn new(id: EmployeeId, clock: &impl Clock) -> Self {
        Self {
            id,
            current_workload: Hours::ZERO,
            next_free_time: Hours::ZERO,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs an employee from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedEmployeeData) -> Self {
        Self {
            id: data.id,
            current_workload: data.current_workload,
            next_free_time: data.next_free_time,
            created_at: data.created_at,
        }
    }

    /// Returns the employee identifier.
    #[must_use]
    pub const fn id(&self) -> &EmployeeId {
        &self.id
    }

    /// Returns the hours currently attributed to this employee.
    #[must_use]
    pub const fn current_workload(&self) -> Hours {
        self.current_workload
    }

    /// Returns the hour mark at which the employee's queue drains.
    #[must_use]
    pub const fn next_free_time(&self) -> Hours {
        self.next_free_time
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Records a newly assigned task against this employee.
    ///
    /// `next_free_time` is recomputed from the pre-increment workload plus
    /// the duration, so it always equals the new workload. On error the
    /// employee is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`WorkloadDomainError::WorkloadOverflow`] when the new
    /// workload would not be finite.
    pub fn record_assignment(
        &mut self,
        duration: TaskDuration,
    ) -> Result<(), WorkloadDomainError> {
        let updated = self.current_workload.plus(duration)?;
        self.current_workload = updated;
        self.next_free_time = updated;
        Ok(())
    }

    /// Returns the derived view used by the assignment policy.
    #[must_use]
    pub fn snapshot(&self) -> EmployeeSnapshot {
        EmployeeSnapshot::new(self.id.clone(), self.current_workload, self.next_free_time)
    }
}

/// Read-only copy of an employee's state with derived availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSnapshot {
    /// Employee identifier.
    pub id: EmployeeId,
    /// Hours currently attributed to the employee.
    pub current_workload: Hours,
    /// Hour mark at which the employee's queue drains.
    pub next_free_time: Hours,
    /// Remaining capacity for today, never negative.
    pub available_hours: Hours,
    /// Whether the employee is below capacity.
    pub is_available: bool,
}

impl EmployeeSnapshot {
    /// Builds a snapshot, deriving availability from [`DAILY_CAPACITY`].
    #[must_use]
    pub fn new(id: EmployeeId, current_workload: Hours, next_free_time: Hours) -> Self {
        Self {
            id,
            current_workload,
            next_free_time,
            available_hours: DAILY_CAPACITY.saturating_sub(current_workload),
            is_available: current_workload < DAILY_CAPACITY,
        }
    }

    /// Returns whether a task of `duration` still fits into today.
    #[must_use]
    pub fn fits(&self, duration: TaskDuration) -> bool {
        self.available_hours >= Hours::from(duration)
    }
}
